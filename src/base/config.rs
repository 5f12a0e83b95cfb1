//! Runtime configuration shared by the managers.
//!
//! Replaces the page-global namespace object and its `debug` flag with an
//! explicit value threaded through constructors.

use crate::base::error::LucidaError;
use serde::{Deserialize, Serialize};

/// Configuration options for [`Lucida`](crate::lucida::Lucida).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LucidaConfig {
    /// Log recoverable failures (sanitize input and faults) through `tracing`.
    pub debug: bool,

    /// Path attribute used by cookie writes that do not name one.
    pub default_cookie_path: String,
}

impl Default for LucidaConfig {
    fn default() -> Self {
        Self {
            debug: false,
            default_cookie_path: "/".to_string(),
        }
    }
}

impl LucidaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Example
    /// ```
    /// use lucida::base::config::LucidaConfig;
    ///
    /// let config = LucidaConfig::from_json(r#"{"debug": true}"#)?;
    /// assert!(config.debug);
    /// assert_eq!(config.default_cookie_path, "/");
    /// # Ok::<(), lucida::base::error::LucidaError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LucidaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_default_cookie_path(mut self, path: impl Into<String>) -> Self {
        self.default_cookie_path = path.into();
        self
    }
}
