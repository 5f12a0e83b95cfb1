//! `decodeURIComponent` over UTF-8 and key/value pair splitting.

use crate::base::error::LucidaError;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Decode a URI component.
///
/// Fails on a `%` that is not followed by two hex digits, or when the decoded
/// bytes are not valid UTF-8. `+` is left as is.
pub fn decode_uri_component(input: &str) -> Result<String, LucidaError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while let Some(offset) = bytes[i..].iter().position(|&b| b == b'%') {
        let at = i + offset;
        let valid = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(LucidaError::malformed_uri(input));
        }
        i = at + 3;
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| LucidaError::malformed_uri(input))
}

/// Split `input` into pairs on `separator`, each pair on `=`, and decode the
/// values (never the keys).
///
/// The value is the second `=`-separated field: `a=b=c` maps `a` to `b`.
/// Later keys overwrite earlier ones. A pair without `=` maps to an empty
/// value and empty pairs are skipped.
pub fn decode_pairs(
    input: &str,
    separator: &str,
) -> Result<HashMap<String, String>, LucidaError> {
    let mut object = HashMap::new();
    for pair in input.split(separator).filter(|pair| !pair.is_empty()) {
        let mut fields = pair.split('=');
        let key = fields.next().unwrap_or(pair);
        let value = fields.next().unwrap_or("");
        object.insert(key.to_string(), decode_uri_component(value)?);
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uri_component() {
        assert_eq!(decode_uri_component("hello%20world").unwrap(), "hello world");
        assert_eq!(decode_uri_component("%C3%A9t%C3%A9").unwrap(), "été");
        assert_eq!(decode_uri_component("a+b").unwrap(), "a+b");
        assert_eq!(decode_uri_component("").unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_truncated_escape() {
        assert!(decode_uri_component("100%").is_err());
        assert!(decode_uri_component("%2").is_err());
        assert!(decode_uri_component("%zz").is_err());
    }

    #[test]
    fn test_decode_pairs() {
        let pairs = decode_pairs("a=1&b=x%20y&flag&&a=2", "&").unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs["a"], "2");
        assert_eq!(pairs["b"], "x y");
        assert_eq!(pairs["flag"], "");
    }

    #[test]
    fn test_decode_pairs_keeps_keys_encoded() {
        let pairs = decode_pairs("a%20b=c", "&").unwrap();
        assert_eq!(pairs["a%20b"], "c");
    }

    #[test]
    fn test_decode_pairs_drops_text_after_second_equals() {
        let pairs = decode_pairs("a=b=c&d==e", "&").unwrap();
        assert_eq!(pairs["a"], "b");
        assert_eq!(pairs["d"], "");
    }

    #[test]
    fn test_decode_rejects_latin1_escape() {
        // Legacy escape() output for "é" is not UTF-8.
        assert_eq!(
            decode_uri_component("%E9"),
            Err(LucidaError::malformed_uri("%E9"))
        );
    }
}
