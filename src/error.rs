//! Redactgate error types

use thiserror::Error;

/// Redactgate error type
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was empty or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No valid session key (never issued, rotated away, or past its lifetime)
    #[error("Session key expired or missing")]
    KeyExpiredOrMissing,

    /// The timestamp embedded in a placeholder is past its lifetime
    #[error("Encrypted token expired")]
    TokenExpired,

    /// AEAD verification failed or the placeholder is not well-formed
    #[error("Placeholder tampered with or invalid")]
    TamperedOrInvalid,

    /// Cryptographic error
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Secret scanner error
    #[error("Scanner error: {0}")]
    Scanner(String),

    /// Pipeline step error
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means a placeholder cannot be restored.
    ///
    /// The unredaction step collapses all three restoration failures into
    /// one outcome: leave the placeholder text in the stream verbatim.
    pub fn is_unrestorable(&self) -> bool {
        matches!(
            self,
            Error::KeyExpiredOrMissing | Error::TokenExpired | Error::TamperedOrInvalid
        )
    }
}

/// Result type alias for redactgate operations
pub type Result<T> = std::result::Result<T, Error>;
