//! Command-line arguments and credential sourcing

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use wallet_qr::credential::is_placeholder;
use wallet_qr::{
    CredentialField, CredentialRecord, ErrorCorrection, ExportError, RenderOptions, Settings,
    DEFAULT_OUTPUT,
};

use crate::error::{CliError, Result};

/// wallet-qr - Export wallet credentials as a scannable QR code image
///
/// Credentials can be passed as flags or environment variables. Prefer
/// `--prompt-private-key` so the key never lands in shell history.
#[derive(Parser)]
#[command(name = "wallet-qr")]
#[command(author = "Symbia Labs")]
#[command(version)]
#[command(about = "Export wallet credentials (address, private key, public key) as a QR code")]
pub struct Args {
    /// Wallet address (0x...)
    #[arg(long, env = "WALLET_QR_ADDRESS", hide_env_values = true)]
    pub address: Option<String>,

    /// Private key (0x...)
    #[arg(long, env = "WALLET_QR_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Read the private key from a hidden terminal prompt (overrides --private-key)
    #[arg(long)]
    pub prompt_private_key: bool,

    /// Public key (0x...)
    #[arg(long, env = "WALLET_QR_PUBLIC_KEY", hide_env_values = true)]
    pub public_key: Option<String>,

    /// Output image path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Settings file with render options (default: per-user config dir)
    #[arg(long, env = "WALLET_QR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Error-correction level: L, M, Q or H
    #[arg(long)]
    pub error_correction: Option<ErrorCorrection>,

    /// Pixels per QR module
    #[arg(long)]
    pub module_size: Option<u32>,

    /// Quiet zone width in modules
    #[arg(long)]
    pub border: Option<u32>,

    /// Also print the QR code to the terminal
    #[arg(long)]
    pub show: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build and validate the credential record.
    ///
    /// Unsupplied fields keep their placeholder and fail validation. With
    /// `--prompt-private-key` the other two fields are checked before the
    /// prompt is shown.
    pub fn credentials(&self) -> Result<CredentialRecord> {
        let address = supplied_or_placeholder(&self.address, CredentialField::Address);
        let public_key = supplied_or_placeholder(&self.public_key, CredentialField::PublicKey);

        let private_key = if self.prompt_private_key {
            for (field, value) in [
                (CredentialField::Address, &address),
                (CredentialField::PublicKey, &public_key),
            ] {
                if is_placeholder(value) {
                    return Err(ExportError::PlaceholderCredential { field }.into());
                }
            }
            rpassword::prompt_password("Private key: ").map_err(CliError::Prompt)?
        } else {
            supplied_or_placeholder(&self.private_key, CredentialField::PrivateKey)
        };

        let record = CredentialRecord::new(address, private_key, public_key);
        record.validate()?;
        Ok(record)
    }

    /// Settings file values with command-line overrides applied
    pub fn render_options(&self) -> Result<RenderOptions> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => match Settings::default_path() {
                Some(path) => Settings::load_or_default(&path)?,
                None => Settings::default(),
            },
        };

        let mut options = settings.render;
        if let Some(level) = self.error_correction {
            options.error_correction = level;
        }
        if let Some(module_size) = self.module_size {
            options.module_size = module_size;
        }
        if let Some(border) = self.border {
            options.border = border;
        }
        options.validate()?;

        debug!(?options, "Resolved render options");
        Ok(options)
    }
}

fn supplied_or_placeholder(value: &Option<String>, field: CredentialField) -> String {
    value
        .clone()
        .unwrap_or_else(|| field.placeholder().to_string())
}
