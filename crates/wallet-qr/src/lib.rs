//! # wallet-qr
//!
//! Exports wallet credentials as a scannable QR code:
//! - Placeholder gate that refuses unfilled template values
//! - Deterministic JSON payload (`address`, `private_key`, `public_key`)
//! - QR encoding at a configurable error-correction level, rendered to PNG
//! - Atomic file output that never leaves a partial image behind

pub mod credential;
pub mod error;
pub mod output;
pub mod render;
pub mod settings;
mod export;

pub use credential::{
    serialize, validate_credentials, CredentialField, CredentialRecord, PLACEHOLDER_SENTINEL,
};
pub use error::{ExportError, Result};
pub use export::{ExportJob, ExportOutcome, Exporter, DEFAULT_OUTPUT};
pub use render::{encode_and_render, render_terminal, Color, ErrorCorrection, RenderOptions};
pub use settings::Settings;
