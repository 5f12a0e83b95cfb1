use crate::cookies::canonical_cookie::CanonicalCookie;
use crate::cookies::psl;
use crate::cookies::store::CookieStore;
use cookie::Cookie;
use dashmap::DashMap;
use std::sync::Arc;
use time::macros::datetime;
use time::OffsetDateTime;
use url::Url;

/// Maximum cookies per domain (browser default).
const MAX_COOKIES_PER_DOMAIN: usize = 50;

/// Maximum total cookies held by one jar.
const MAX_COOKIES_TOTAL: usize = 3000;

/// Expiry given to a `Max-Age` that runs past the representable range.
const FAR_FUTURE: OffsetDateTime = datetime!(9999-12-31 23:59:59 UTC);

/// In-memory cookie store bound to a document URL.
///
/// Behaves like `document.cookie` on that page: writes follow the browser
/// rules for script-set cookies and reads only see cookies whose domain,
/// path and scheme match the document.
pub struct DocumentCookieJar {
    url: Url,
    // Map<Domain, List<Cookie>>, each list in insertion order.
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
}

impl DocumentCookieJar {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            store: Arc::new(DashMap::new()),
        }
    }

    /// The document URL this jar serves.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn host(&self) -> String {
        self.url.host_str().unwrap_or("").to_lowercase()
    }

    pub fn set_canonical_cookie(&self, mut cookie: CanonicalCookie) {
        let mut entry = self.store.entry(cookie.domain.clone()).or_default();

        // Overwrites keep their slot and creation time so ordering is stable.
        if let Some(existing) = entry.iter_mut().find(|c| c.is_equivalent(&cookie)) {
            cookie.creation_time = existing.creation_time;
            *existing = cookie;
            return;
        }

        while entry.len() >= MAX_COOKIES_PER_DOMAIN {
            if let Some(oldest_idx) = entry
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| c.creation_time)
                .map(|(i, _)| i)
            {
                entry.remove(oldest_idx);
            } else {
                break;
            }
        }

        entry.push(cookie);
        drop(entry); // Release lock before checking global count

        self.enforce_global_limit();
    }

    /// Delete the cookie occupying the same slot as `cookie`, if any.
    fn delete_equivalent(&self, cookie: &CanonicalCookie) -> bool {
        let Some(mut entry) = self.store.get_mut(&cookie.domain) else {
            return false;
        };
        let before = entry.len();
        entry.retain(|c| !c.is_equivalent(cookie));
        before != entry.len()
    }

    /// Evict the oldest cookies across all domains until the jar fits
    /// [`MAX_COOKIES_TOTAL`].
    fn enforce_global_limit(&self) {
        while self.total_cookie_count() > MAX_COOKIES_TOTAL {
            let oldest = self
                .store
                .iter()
                .filter_map(|entry| {
                    entry
                        .value()
                        .iter()
                        .enumerate()
                        .min_by_key(|(_, c)| c.creation_time)
                        .map(|(idx, c)| (c.creation_time, entry.key().clone(), idx))
                })
                .min();

            let Some((_, domain, idx)) = oldest else {
                break;
            };
            if let Some(mut entry) = self.store.get_mut(&domain) {
                if idx < entry.len() {
                    entry.remove(idx);
                }
            }
        }
    }

    /// Cookies a script on the document can read, in `document.cookie`
    /// order: longest path first, then oldest first.
    pub fn visible_cookies(&self) -> Vec<CanonicalCookie> {
        let host = self.host();
        let request_path = self.url.path();
        let https = self.url.scheme() == "https";
        let now = OffsetDateTime::now_utc();

        let mut result = Vec::new();
        for domain in Self::matching_domains(&host) {
            if let Some(entry) = self.store.get(&domain) {
                for cookie in entry.iter() {
                    if cookie.http_only
                        || cookie.is_expired(now)
                        || (cookie.secure && !https)
                        || !Self::domain_matches(&cookie.domain, &host, cookie.host_only)
                        || !Self::path_matches(&cookie.path, request_path)
                    {
                        continue;
                    }
                    result.push(cookie.clone());
                }
            }
        }

        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
        });

        result
    }

    /// RFC 6265 domain matching.
    fn domain_matches(cookie_domain: &str, host: &str, host_only: bool) -> bool {
        if host_only {
            return cookie_domain.eq_ignore_ascii_case(host);
        }

        let cookie_domain = cookie_domain.trim_start_matches('.');
        if host.eq_ignore_ascii_case(cookie_domain) {
            return true;
        }

        host.len() > cookie_domain.len()
            && host.is_char_boundary(host.len() - cookie_domain.len())
            && host[host.len() - cookie_domain.len()..].eq_ignore_ascii_case(cookie_domain)
            && host.as_bytes()[host.len() - cookie_domain.len() - 1] == b'.'
    }

    /// RFC 6265 path matching.
    fn path_matches(cookie_path: &str, request_path: &str) -> bool {
        if request_path == cookie_path {
            return true;
        }

        if let Some(rest) = request_path.strip_prefix(cookie_path) {
            return cookie_path.ends_with('/') || rest.starts_with('/');
        }

        false
    }

    /// The host itself and all of its parent domains.
    fn matching_domains(host: &str) -> Vec<String> {
        let mut domains = vec![host.to_string()];

        let parts: Vec<&str> = host.split('.').collect();
        for i in 1..parts.len().saturating_sub(1) {
            domains.push(parts[i..].join("."));
        }

        domains
    }

    /// RFC 6265 default-path of a request path.
    pub fn default_path(request_path: &str) -> String {
        if !request_path.starts_with('/') {
            return "/".to_string();
        }
        match request_path.rfind('/') {
            Some(0) | None => "/".to_string(),
            Some(idx) => request_path[..idx].to_string(),
        }
    }

    /// Get total cookie count, including cookies the document cannot see.
    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn iter_all_cookies(&self) -> impl Iterator<Item = CanonicalCookie> + '_ {
        self.store.iter().flat_map(|entry| entry.value().clone())
    }
}

impl CookieStore for DocumentCookieJar {
    fn cookie_string(&self) -> String {
        self.visible_cookies()
            .iter()
            .map(CanonicalCookie::pair)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie_string(&self, line: &str) {
        let parsed = match Cookie::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(line = %line, error = %e, "dropping unparsable cookie line");
                return;
            }
        };

        // Scripts cannot create HttpOnly cookies.
        if parsed.http_only().unwrap_or(false) {
            tracing::debug!(name = %parsed.name(), "dropping HttpOnly cookie set from script");
            return;
        }

        let secure = parsed.secure().unwrap_or(false);
        if secure && self.url.scheme() != "https" {
            tracing::debug!(
                name = %parsed.name(),
                "dropping Secure cookie set from insecure document"
            );
            return;
        }

        let host = self.host();
        let (domain, host_only) = match parsed.domain() {
            Some(d) => {
                let d = d.trim_start_matches('.').to_lowercase();
                if !psl::is_valid_cookie_domain(&d, &host) {
                    tracing::debug!(
                        domain = %d,
                        host = %host,
                        "dropping cookie for foreign or public-suffix domain"
                    );
                    return;
                }
                (d, false)
            }
            None => (host, true),
        };

        let path = match parsed.path() {
            Some(p) if p.starts_with('/') => p.to_string(),
            _ => Self::default_path(self.url.path()),
        };

        let now = OffsetDateTime::now_utc();
        let expiration_time = match parsed.max_age() {
            Some(max_age) => Some(now.checked_add(max_age).unwrap_or_else(|| {
                tracing::debug!(name = %parsed.name(), %max_age, "clamping out-of-range Max-Age");
                if max_age.is_negative() {
                    OffsetDateTime::UNIX_EPOCH
                } else {
                    FAR_FUTURE
                }
            })),
            None => parsed.expires().and_then(|e| e.datetime()),
        };

        let cookie = CanonicalCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path,
            creation_time: now,
            expiration_time,
            secure,
            http_only: false,
            host_only,
        };

        // A past expiry is how scripts delete cookies.
        if cookie.is_expired(now) {
            let deleted = self.delete_equivalent(&cookie);
            tracing::debug!(name = %cookie.name, deleted, "expired cookie write");
            return;
        }

        self.set_canonical_cookie(cookie);
    }
}
