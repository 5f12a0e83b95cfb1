use time::OffsetDateTime;

/// A cookie as held by [`DocumentCookieJar`](crate::cookies::jar::DocumentCookieJar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    /// `None` for session cookies.
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
    pub host_only: bool,
}

impl CanonicalCookie {
    /// Host-only session cookie with no flags.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
        creation_time: OffsetDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
            creation_time,
            expiration_time: None,
            secure: false,
            http_only: false,
            host_only: true,
        }
    }

    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.expiration_time
            .is_some_and(|expiry| expiry <= current_time)
    }

    /// Same storage slot: a write to one replaces the other.
    pub fn is_equivalent(&self, other: &CanonicalCookie) -> bool {
        self.name == other.name
            && self.path == other.path
            && self.host_only == other.host_only
            && self.domain.eq_ignore_ascii_case(&other.domain)
    }

    /// The `name=value` form used by the serialized store.
    pub fn pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn test_session_cookie_never_expires() {
        let now = OffsetDateTime::now_utc();
        let cookie = CanonicalCookie::new("a", "1", "example.com", "/", now);
        assert!(!cookie.is_expired(now + Duration::days(365)));
    }

    #[test]
    fn test_expired_cookie() {
        let now = OffsetDateTime::now_utc();
        let mut cookie = CanonicalCookie::new("a", "1", "example.com", "/", now);
        cookie.expiration_time = Some(now - Duration::days(1));
        assert!(cookie.is_expired(now));
    }

    #[test]
    fn test_equivalence_ignores_value() {
        let now = OffsetDateTime::now_utc();
        let a = CanonicalCookie::new("a", "1", "example.com", "/", now);
        let b = CanonicalCookie::new("a", "2", "EXAMPLE.com", "/", now);
        let c = CanonicalCookie::new("a", "1", "example.com", "/other", now);
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&c));
    }

    #[test]
    fn test_pair() {
        let now = OffsetDateTime::now_utc();
        assert_eq!(
            CanonicalCookie::new("a", "1", "example.com", "/", now).pair(),
            "a=1"
        );
        assert_eq!(
            CanonicalCookie::new("a", "", "example.com", "/", now).pair(),
            "a="
        );
    }
}
