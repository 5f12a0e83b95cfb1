use thiserror::Error;

/// Errors surfaced by the lucida managers.
///
/// Lookups that find nothing (`CookieManager::get`,
/// `QueryStringManager::get_value`) report `None` instead of an error.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LucidaError {
    /// A `%` escape was truncated or the decoded bytes were not UTF-8.
    #[error("Malformed URI sequence: {input}")]
    MalformedUri { input: String },

    /// `sanitize` received something other than a string.
    #[error("Sanitize error: parameter str is {kind}")]
    InvalidInput { kind: &'static str },

    /// The sanitize transform chain failed at runtime.
    #[error("Sanitize failed: {reason}")]
    Sanitize { reason: String },

    /// A cookie expiry could not be rendered as an HTTP-date.
    #[error("Cookie expiry could not be formatted: {reason}")]
    ExpiryFormat { reason: String },

    /// The iframe host has no element with the requested id.
    #[error("Container not found: {id}")]
    ContainerNotFound { id: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl LucidaError {
    pub fn malformed_uri(input: impl Into<String>) -> Self {
        Self::MalformedUri {
            input: input.into(),
        }
    }

    pub fn sanitize(reason: impl Into<String>) -> Self {
        Self::Sanitize {
            reason: reason.into(),
        }
    }

    pub fn container_not_found(id: impl Into<String>) -> Self {
        Self::ContainerNotFound { id: id.into() }
    }

    /// Whether the caller is expected to recover locally (log and degrade)
    /// rather than propagate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LucidaError::InvalidInput { .. } | LucidaError::ContainerNotFound { .. }
        )
    }
}

impl From<time::error::Format> for LucidaError {
    fn from(err: time::error::Format) -> Self {
        LucidaError::ExpiryFormat {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LucidaError {
    fn from(err: serde_json::Error) -> Self {
        LucidaError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
