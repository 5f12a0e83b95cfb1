use crate::base::error::LucidaError;
use crate::cookies::store::CookieStore;
use crate::encoding::{decode_pairs, escape, unescape};
use std::collections::HashMap;
use std::sync::Arc;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

/// Cookie name to decoded value.
pub type CookieMap = HashMap<String, String>;

/// Attributes applied by [`CookieManager::set`].
///
/// A bare number converts into options with only `exdays` set:
///
/// ```
/// use lucida::cookies::manager::CookieOptions;
///
/// assert_eq!(CookieOptions::from(7_i64), CookieOptions::new().exdays(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    /// Days until expiry. `None` or `0` writes a session cookie.
    pub exdays: Option<i64>,
    pub domain: Option<String>,
    /// Falls back to the manager's default path.
    pub path: Option<String>,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exdays(mut self, days: i64) -> Self {
        self.exdays = Some(days);
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl From<i64> for CookieOptions {
    fn from(exdays: i64) -> Self {
        Self::new().exdays(exdays)
    }
}

/// Reads and writes cookies through a [`CookieStore`].
///
/// Holds no cookie state of its own: every call reads or writes the whole
/// store string.
///
/// `get` decodes with the legacy [`unescape`], matching what `set` writes,
/// while `to_object` decodes with `decodeURIComponent` semantics. Values with
/// Latin-1 characters written by `set` are therefore readable through `get`
/// but make `to_object` fail with [`LucidaError::MalformedUri`].
pub struct CookieManager {
    store: Arc<dyn CookieStore>,
    default_path: String,
}

impl CookieManager {
    pub fn new(store: Arc<dyn CookieStore>) -> Self {
        Self::with_default_path(store, "/")
    }

    pub fn with_default_path(store: Arc<dyn CookieStore>, default_path: impl Into<String>) -> Self {
        Self {
            store,
            default_path: default_path.into(),
        }
    }

    pub fn store(&self) -> &Arc<dyn CookieStore> {
        &self.store
    }

    /// Look up `key` and return its unescaped value.
    ///
    /// The search includes the leading `"; "` separator, so `id` never
    /// matches inside `user_id`.
    pub fn get(&self, key: &str) -> Option<String> {
        let cookie = format!("; {}", self.store.cookie_string());
        let key = format!("; {}=", key);

        let index = cookie.find(&key)?;
        let rest = &cookie[index + key.len()..];
        let raw = rest.split(';').next().unwrap_or(rest);
        Some(unescape(raw))
    }

    /// Write a cookie and return the exact line committed to the store.
    ///
    /// # Example
    /// ```
    /// use lucida::cookies::jar::DocumentCookieJar;
    /// use lucida::cookies::manager::{CookieManager, CookieOptions};
    /// use std::sync::Arc;
    /// use url::Url;
    ///
    /// let jar = Arc::new(DocumentCookieJar::new(Url::parse("https://example.com/").unwrap()));
    /// let cookies = CookieManager::new(jar);
    /// let line = cookies.set("theme", "dark blue", CookieOptions::new())?;
    /// assert_eq!(line, "theme=dark%20blue; path=/");
    /// # Ok::<(), lucida::base::error::LucidaError>(())
    /// ```
    pub fn set(
        &self,
        name: &str,
        value: &str,
        opts: impl Into<CookieOptions>,
    ) -> Result<String, LucidaError> {
        let opts = opts.into();
        let mut cookie = format!("{}={}", name, escape(value));

        if let Some(days) = opts.exdays.filter(|days| *days != 0) {
            let expires = expiry_after(OffsetDateTime::now_utc(), days)?;
            cookie.push_str("; expires=");
            cookie.push_str(&http_date(expires)?);
        }
        if let Some(domain) = opts.domain.as_deref().filter(|d| !d.is_empty()) {
            cookie.push_str("; domain=");
            cookie.push_str(domain);
        }
        cookie.push_str("; path=");
        cookie.push_str(
            opts.path
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or(&self.default_path),
        );

        tracing::debug!(cookie = %cookie, "committing cookie");
        self.store.set_cookie_string(&cookie);
        Ok(cookie)
    }

    /// Expire a cookie and return the value it held before.
    ///
    /// Any `exdays` in `opts` is replaced by `-1`; `domain` and `path` must
    /// match the ones the cookie was written with.
    pub fn remove(
        &self,
        name: &str,
        opts: impl Into<CookieOptions>,
    ) -> Result<Option<String>, LucidaError> {
        let value = self.get(name);
        let opts = opts.into().exdays(-1);
        self.set(name, "", opts)?;
        Ok(value)
    }

    /// All visible cookies, values decoded with `decodeURIComponent` semantics.
    pub fn to_object(&self) -> Result<CookieMap, LucidaError> {
        decode_pairs(&self.store.cookie_string(), "; ")
    }
}

/// `now` shifted by `days` whole days, or `ExpiryFormat` when the result
/// leaves the representable date range.
fn expiry_after(now: OffsetDateTime, days: i64) -> Result<OffsetDateTime, LucidaError> {
    days.checked_mul(86_400)
        .map(Duration::seconds)
        .and_then(|offset| now.checked_add(offset))
        .ok_or_else(|| LucidaError::ExpiryFormat {
            reason: format!("{} days from now is out of range", days),
        })
}

/// Format as an HTTP-date (`Tue, 20 Oct 2026 10:00:00 GMT`).
pub fn http_date(at: OffsetDateTime) -> Result<String, LucidaError> {
    let utc = at.to_offset(time::UtcOffset::UTC);
    Ok(utc.format(format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    ))?)
}
