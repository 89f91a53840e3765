//! Placeholder gate run before anything is serialized or written

use tracing::debug;

use super::{CredentialField, CredentialRecord};
use crate::error::{ExportError, Result};

/// Marker embedded in every unfilled template value
pub const PLACEHOLDER_SENTINEL: &str = "YOUR_";

/// Whether a value was never filled in
pub fn is_placeholder(value: &str) -> bool {
    value.trim().is_empty() || value.contains(PLACEHOLDER_SENTINEL)
}

/// Reject credentials that are empty or still carry the placeholder sentinel.
///
/// Fields are checked in payload order and the first offender is reported.
/// No format checks are made beyond that.
pub fn validate_credentials(address: &str, private_key: &str, public_key: &str) -> Result<()> {
    let values = [
        (CredentialField::Address, address),
        (CredentialField::PrivateKey, private_key),
        (CredentialField::PublicKey, public_key),
    ];

    for (field, value) in values {
        if is_placeholder(value) {
            debug!(%field, "Credential field is unfilled");
            return Err(ExportError::PlaceholderCredential { field });
        }
    }

    Ok(())
}

impl CredentialRecord {
    /// Run [`validate_credentials`] on this record
    pub fn validate(&self) -> Result<()> {
        validate_credentials(self.address(), self.private_key(), self.public_key())
    }
}
