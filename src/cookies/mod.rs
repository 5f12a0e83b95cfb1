//! Cookie access over a string-based cookie store.
//!
//! - **Manager**: [`CookieManager`](manager::CookieManager) gets, sets,
//!   removes and enumerates cookies by reading and writing the store string
//! - **Store**: [`CookieStore`](store::CookieStore) is the `document.cookie`
//!   getter/setter pair
//! - **Jar**: [`DocumentCookieJar`](jar::DocumentCookieJar) is an in-memory
//!   store bound to a document URL, applying the browser rules for
//!   script-written cookies (expiry, domain, path, Secure, HttpOnly)
//!
//! # Example
//!
//! ```
//! use lucida::cookies::jar::DocumentCookieJar;
//! use lucida::cookies::manager::{CookieManager, CookieOptions};
//! use std::sync::Arc;
//! use url::Url;
//!
//! let jar = Arc::new(DocumentCookieJar::new(Url::parse("https://example.com/").unwrap()));
//! let cookies = CookieManager::new(jar);
//!
//! cookies.set("visits", "3", 30_i64)?;
//! assert_eq!(cookies.get("visits").as_deref(), Some("3"));
//!
//! assert_eq!(cookies.remove("visits", CookieOptions::new())?.as_deref(), Some("3"));
//! assert_eq!(cookies.get("visits"), None);
//! # Ok::<(), lucida::base::error::LucidaError>(())
//! ```

pub mod canonical_cookie;
pub mod jar;
pub mod manager;
pub mod psl;
pub mod store;
