//! Error types for the editor

use thiserror::Error;

/// Failures of handle lookups and name-addressed edits.
///
/// A reference to a blip that was trimmed from the bundle is not an error;
/// reads report it as [`crate::Resolved::Unavailable`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Wavelet not in mirror: {0}")]
    UnknownWavelet(String),

    #[error("Blip not materialized: {0}")]
    UnknownBlip(String),

    #[error("Form element not found: {0}")]
    FormElementNotFound(String),
}
