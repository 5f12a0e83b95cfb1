//! # lucida
//!
//! Browser utility helpers for a single document.
//!
//! `lucida` bundles the small pieces of glue most pages end up rewriting:
//! reading and writing cookies through the `document.cookie` string, parsing
//! the query string, turning labels into slugs, and binding event handlers
//! on targets that may only support legacy registration.
//!
//! ## Quick Start
//!
//! ```rust
//! use lucida::base::config::LucidaConfig;
//! use lucida::lucida::Lucida;
//! use url::Url;
//!
//! let location = Url::parse("https://example.com/?utm_source=newsletter").unwrap();
//! let lucida = Lucida::for_document(&location, LucidaConfig::default().with_debug(true));
//!
//! let source = lucida.query_string.get_value("utm_source", None)?;
//! lucida.cookie.set("source", source.as_deref().unwrap_or("direct"), 30_i64)?;
//! assert_eq!(lucida.cookie.get("source").as_deref(), Some("newsletter"));
//! # Ok::<(), lucida::base::error::LucidaError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Configuration and error definitions
//! - [`cookies`] - Cookie manager, cookie store trait and in-memory jar
//! - [`encoding`] - Legacy escape and URI component codecs
//! - [`querystring`] - Query-string parsing
//! - [`strings`] - Trim, sanitize and replace helpers
//! - [`events`] - Event binding across listener models
//! - [`analytics`] - Linker-decorated iframe injection
//! - [`lucida`] - The facade owning one of each manager

pub mod analytics;
pub mod base;
pub mod cookies;
pub mod encoding;
pub mod events;
pub mod lucida;
pub mod querystring;
pub mod strings;
