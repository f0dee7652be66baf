use std::result;

use thiserror::Error;

/// Error types for Army publications client operations
#[derive(Error, Debug)]
pub enum ArmyPubsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success HTTP response, including unfollowed redirects
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The document exists but sits behind a credential wall
    #[error("access restricted: {message}")]
    AccessRestricted { message: String },

    /// No resolver signal identified a supported container format
    #[error("unsupported or unknown document format")]
    UnsupportedFormat,

    /// A decoder rejected the downloaded bytes
    #[error("{format} decoding failed: {message}")]
    DecodeError {
        format: &'static str,
        message: String,
    },

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl ArmyPubsError {
    /// Whether this failure means the document is behind a credential wall
    /// rather than missing or malformed. Callers branch on this outcome; the
    /// other failure kinds are interchangeable from their point of view.
    pub fn is_access_restricted(&self) -> bool {
        matches!(self, ArmyPubsError::AccessRestricted { .. })
    }
}

pub type Result<T> = result::Result<T, ArmyPubsError>;
