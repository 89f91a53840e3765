//! Error types for wallet-qr

use std::path::PathBuf;
use thiserror::Error;

use crate::credential::CredentialField;
use crate::render::ErrorCorrection;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Export error types
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Credential `{field}` still holds a placeholder value - supply the real value first")]
    PlaceholderCredential { field: CredentialField },

    #[error("Payload of {len} bytes exceeds the QR capacity at error-correction level {level}")]
    PayloadTooLarge { len: usize, level: ErrorCorrection },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected encoding failure: {0}")]
    UnexpectedEncoding(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
