//! Legacy `escape`/`unescape` transforms.
//!
//! These operate on UTF-16 code units, not UTF-8 bytes: units below 256
//! become `%XX` and everything else `%uXXXX`. Cookie values written by
//! [`CookieManager::set`](crate::cookies::manager::CookieManager::set) use
//! this encoding.

/// Characters `escape` leaves untouched besides ASCII alphanumerics.
const UNESCAPED: &[u8] = b"@*_+-./";

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for unit in input.encode_utf16() {
        match u8::try_from(unit) {
            Ok(byte) if byte.is_ascii_alphanumeric() || UNESCAPED.contains(&byte) => {
                out.push(char::from(byte));
            }
            Ok(byte) => out.push_str(&format!("%{:02X}", byte)),
            Err(_) => out.push_str(&format!("%u{:04X}", unit)),
        }
    }
    out
}

/// Reverse of [`escape`]. Malformed `%` sequences are kept literally.
pub fn unescape(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;

    while i < units.len() {
        if units[i] == u16::from(b'%') {
            if units.get(i + 1) == Some(&u16::from(b'u')) {
                if let Some(unit) = hex_units(&units, i + 2, 4) {
                    out.push(unit);
                    i += 6;
                    continue;
                }
            }
            if let Some(unit) = hex_units(&units, i + 1, 2) {
                out.push(unit);
                i += 3;
                continue;
            }
        }
        out.push(units[i]);
        i += 1;
    }

    String::from_utf16_lossy(&out)
}

/// Read `len` hex digits starting at `start`, if all are present.
fn hex_units(units: &[u16], start: usize, len: usize) -> Option<u16> {
    let digits = units.get(start..start + len)?;
    digits.iter().try_fold(0u16, |acc, &unit| {
        let digit = char::from_u32(u32::from(unit))?.to_digit(16)?;
        Some(acc * 16 + digit as u16)
    })
}
