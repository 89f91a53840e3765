//! Error types for the command-line front end

use thiserror::Error;
use wallet_qr::ExportError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to read private key from the terminal: {0}")]
    Prompt(#[source] std::io::Error),
}
