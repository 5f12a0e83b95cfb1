//! Public Suffix List (PSL) validation for the `domain` cookie attribute.
//!
//! A script on `shop.example.co.uk` may scope a cookie to `example.co.uk`
//! but never to `co.uk`. Uses Mozilla's list via the `psl` crate.

use psl::{List, Psl};

/// Check if a domain is a public suffix (e.g., "com", "co.uk").
pub fn is_public_suffix(domain: &str) -> bool {
    let domain_lower = domain.to_lowercase();
    let domain_bytes = domain_lower.as_bytes();

    match List.suffix(domain_bytes) {
        Some(suffix) => suffix.as_bytes() == domain_bytes,
        None => false,
    }
}

/// Check if a `domain` attribute may be set from a document on `host`.
///
/// The domain must equal the host or be one of its parents, and must not be
/// a public suffix.
pub fn is_valid_cookie_domain(cookie_domain: &str, host: &str) -> bool {
    let cookie_domain = cookie_domain
        .strip_prefix('.')
        .unwrap_or(cookie_domain)
        .to_lowercase();
    let host = host.to_lowercase();

    if cookie_domain.is_empty() || is_public_suffix(&cookie_domain) {
        return false;
    }

    host == cookie_domain || host.ends_with(&format!(".{}", cookie_domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_public_suffix() {
        assert!(is_public_suffix("com"));
        assert!(is_public_suffix("CO.UK"));
        assert!(is_public_suffix("github.io"));
    }

    #[test]
    fn test_not_public_suffix() {
        assert!(!is_public_suffix("example.com"));
        assert!(!is_public_suffix("sub.example.co.uk"));
    }

    #[test]
    fn test_valid_cookie_domain() {
        assert!(is_valid_cookie_domain("example.com", "example.com"));
        assert!(is_valid_cookie_domain(".example.com", "www.example.com"));
        assert!(is_valid_cookie_domain("Example.COM", "www.example.com"));
    }

    #[test]
    fn test_invalid_cookie_domain() {
        assert!(!is_valid_cookie_domain("com", "example.com"));
        assert!(!is_valid_cookie_domain(".co.uk", "example.co.uk"));
        assert!(!is_valid_cookie_domain("other.com", "example.com"));
        assert!(!is_valid_cookie_domain("ample.com", "example.com"));
        assert!(!is_valid_cookie_domain("", "example.com"));
    }
}
