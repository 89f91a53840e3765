//! Credential record, placeholder validation and JSON payload

mod types;
mod validate;

pub use types::*;
pub use validate::{is_placeholder, validate_credentials, PLACEHOLDER_SENTINEL};

use crate::error::Result;

/// Serialize a record into the QR payload
pub fn serialize(record: &CredentialRecord) -> Result<String> {
    record.to_json()
}
