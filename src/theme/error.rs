//! Theme loading errors.

use thiserror::Error;

/// Error returned when a theme document can't be decoded.
///
/// Descriptor contents are never validated; only the document itself can
/// be malformed.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),
}
