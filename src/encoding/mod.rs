//! String codecs used by the cookie and query-string managers.
//!
//! The two families are not interchangeable:
//!
//! | Codec | Used by |
//! |-------|---------|
//! | [`escape`](escape::escape) | `CookieManager::set` |
//! | [`unescape`](escape::unescape) | `CookieManager::get` |
//! | [`decode_uri_component`](uri::decode_uri_component) | `to_object` on both managers |

pub mod escape;
pub mod uri;

pub use escape::{escape, unescape};
pub use uri::{decode_pairs, decode_uri_component};
