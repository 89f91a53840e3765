//! Credential record definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Field of a credential record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    /// Wallet address
    Address,
    /// Private key (sensitive)
    PrivateKey,
    /// Public key
    PublicKey,
}

impl CredentialField {
    /// All fields in payload order
    pub const ALL: [CredentialField; 3] = [Self::Address, Self::PrivateKey, Self::PublicKey];

    /// JSON key used in the payload
    pub fn key(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::PrivateKey => "private_key",
            Self::PublicKey => "public_key",
        }
    }

    /// Template value used when the field was never filled in
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Address => "0xYOUR_WALLET_ADDRESS_HERE",
            Self::PrivateKey => "0xYOUR_PRIVATE_KEY_HERE",
            Self::PublicKey => "0xYOUR_PUBLIC_KEY_HERE",
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Wallet credentials exported into the QR payload.
///
/// Immutable once built; all three fields are always serialized, in the order
/// `address`, `private_key`, `public_key`. Memory is zeroed on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct CredentialRecord {
    address: String,
    private_key: String,
    public_key: String,
}

impl CredentialRecord {
    /// Create a new credential record
    pub fn new(
        address: impl Into<String>,
        private_key: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            private_key: private_key.into(),
            public_key: public_key.into(),
        }
    }

    /// Record holding the unfilled template values
    pub fn placeholder() -> Self {
        Self::new(
            CredentialField::Address.placeholder(),
            CredentialField::PrivateKey.placeholder(),
            CredentialField::PublicKey.placeholder(),
        )
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the private key (use carefully - never log this)
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Value of the given field
    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Address => &self.address,
            CredentialField::PrivateKey => &self.private_key,
            CredentialField::PublicKey => &self.public_key,
        }
    }

    /// Pretty JSON payload with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a payload produced by [`CredentialRecord::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .finish()
    }
}
