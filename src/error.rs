//! Error types for translation resolution

use thiserror::Error;

/// Errors that can occur during translation operations.
///
/// A missing translation is *not* an error: lookups report it through
/// [`Resolution::not_found`](crate::Resolution) and echo the key name
/// back as display text. Only genuinely invalid input or a failed
/// dictionary load surfaces here.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A lookup was attempted with an empty or blank key name
    #[error("translation key name must not be empty")]
    EmptyName,

    /// Invalid culture tag
    #[error("invalid culture tag: {0}")]
    InvalidCulture(String),

    /// Failed to parse a dictionary source
    #[error("failed to parse dictionary source: {0}")]
    ParseError(String),

    /// IO error while loading dictionary sources
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error in a dictionary source
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
