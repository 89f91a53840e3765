//! Export pipeline: validate → serialize → encode → rasterize → write

use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::credential::{serialize, CredentialRecord};
use crate::error::Result;
use crate::render::{encode_and_render, render_terminal, RenderOptions};

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "wallet_qr.png";

/// Credentials plus the destination of the rendered image
#[derive(Debug, Clone)]
pub struct ExportJob {
    credentials: CredentialRecord,
    output_path: PathBuf,
}

impl ExportJob {
    pub fn new(credentials: CredentialRecord, output_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials,
            output_path: output_path.into(),
        }
    }

    /// Job writing to [`DEFAULT_OUTPUT`] in the working directory
    pub fn with_default_output(credentials: CredentialRecord) -> Self {
        Self::new(credentials, DEFAULT_OUTPUT)
    }

    pub fn credentials(&self) -> &CredentialRecord {
        &self.credentials
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Result of a successful export
pub struct ExportOutcome {
    /// The JSON text encoded in the QR symbol (zeroed on drop)
    pub payload: Zeroizing<String>,
    /// Where the image was written
    pub output_path: PathBuf,
}

impl std::fmt::Debug for ExportOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportOutcome")
            .field("payload", &"[REDACTED]")
            .field("output_path", &self.output_path)
            .finish()
    }
}

/// Runs export jobs with a fixed set of render options
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: RenderOptions,
}

impl Exporter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Run the full pipeline for one job.
    ///
    /// Validation runs before anything is serialized, and the image is only
    /// written once encoding has succeeded.
    pub fn export(&self, job: &ExportJob) -> Result<ExportOutcome> {
        job.credentials().validate()?;

        let payload = Zeroizing::new(serialize(job.credentials())?);
        debug!("Serialized credential payload ({} bytes)", payload.len());

        let output_path = encode_and_render(&payload, job.output_path(), &self.options)?;
        info!(
            level = %self.options.error_correction,
            "QR code saved to {:?}",
            output_path
        );

        Ok(ExportOutcome {
            payload,
            output_path,
        })
    }

    /// Terminal rendering of an exported payload
    pub fn preview(&self, payload: &str) -> Result<String> {
        render_terminal(payload, self.options.error_correction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::CredentialField;
    use crate::error::ExportError;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wallet_qr.png");
        let job = ExportJob::new(CredentialRecord::new("0x01ab", "0x02cd", "0x03ef"), &path);

        let outcome = Exporter::default().export(&job).unwrap();

        assert_eq!(outcome.output_path, path);
        assert!(path.is_file());
        let parsed = CredentialRecord::from_json(&outcome.payload).unwrap();
        assert_eq!(&parsed, job.credentials());
    }

    #[test]
    fn test_placeholder_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wallet_qr.png");
        let job = ExportJob::new(CredentialRecord::new("0x01ab", "0xYOUR_KEY", "0x03ef"), &path);

        let err = Exporter::default().export(&job).unwrap_err();

        assert!(matches!(
            err,
            ExportError::PlaceholderCredential {
                field: CredentialField::PrivateKey
            }
        ));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_default_output() {
        let job = ExportJob::with_default_output(CredentialRecord::placeholder());
        assert_eq!(job.output_path(), Path::new("wallet_qr.png"));
    }

    #[test]
    fn test_preview_renders_blocks() {
        let exporter = Exporter::default();
        let art = exporter.preview("hello").unwrap();
        assert!(art.contains('\u{2588}'));
    }
}
