//! Console output
//!
//! The payload and result go to stdout; diagnostics go to stderr.

use wallet_qr::{ExportError, ExportOutcome};

use crate::error::CliError;

const REMEDIATION: &str = "\
To get your wallet info from Ready wallet:
  1. Open Ready wallet
  2. Go to Settings -> Show Private Key
  3. Copy your address, private key, and public key

Then:
  1. Supply them with --address, --public-key and --prompt-private-key
     (or WALLET_QR_ADDRESS, WALLET_QR_PUBLIC_KEY, WALLET_QR_PRIVATE_KEY)
  2. Re-run wallet-qr";

const ENCODER_HINT: &str =
    "Make sure wallet-qr was built with the `qrcode` and `image` (png) dependencies enabled.";

/// Text printed after a successful export
pub fn success_message(outcome: &ExportOutcome, preview: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("=== Wallet QR Code Generator ===\n\nJSON Data:\n");
    out.push_str(&outcome.payload);
    out.push('\n');
    if let Some(preview) = preview {
        out.push('\n');
        out.push_str(preview);
        out.push('\n');
    }
    out.push_str(&format!(
        "\nQR code saved to: {}\n\nScan this QR code with your app to connect!",
        outcome.output_path.display()
    ));
    out
}

/// Diagnostic printed when the run fails
pub fn failure_message(err: &CliError) -> String {
    match err {
        CliError::Export(ExportError::PlaceholderCredential { field }) => format!(
            "Error: `{}` was not supplied - refusing to export placeholder credentials.\n\n{}",
            field, REMEDIATION
        ),
        CliError::Export(ExportError::UnexpectedEncoding(_)) => {
            format!("Error generating QR code: {}\n\n{}", err, ENCODER_HINT)
        }
        CliError::Export(ExportError::PayloadTooLarge { .. }) => format!(
            "Error generating QR code: {}\nTry a lower --error-correction level.",
            err
        ),
        _ => format!("Error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wallet_qr::{CredentialField, ErrorCorrection};
    use zeroize::Zeroizing;

    #[test]
    fn test_success_message() {
        let outcome = ExportOutcome {
            payload: Zeroizing::new("{\n  \"address\": \"0x01ab\"\n}".to_string()),
            output_path: PathBuf::from("wallet_qr.png"),
        };
        let message = success_message(&outcome, None);

        assert!(message.contains("\"address\": \"0x01ab\""));
        assert!(message.contains("QR code saved to: wallet_qr.png"));
    }

    #[test]
    fn test_placeholder_message_has_remediation() {
        let err = CliError::Export(ExportError::PlaceholderCredential {
            field: CredentialField::Address,
        });
        let message = failure_message(&err);

        assert!(message.contains("`address` was not supplied"));
        assert!(message.contains("Show Private Key"));
        assert!(message.contains("Re-run"));
    }

    #[test]
    fn test_encoding_message_has_hint() {
        let err = CliError::Export(ExportError::UnexpectedEncoding("boom".to_string()));
        assert!(failure_message(&err).contains("qrcode"));

        let err = CliError::Export(ExportError::PayloadTooLarge {
            len: 4000,
            level: ErrorCorrection::High,
        });
        assert!(failure_message(&err).contains("4000 bytes"));
    }
}
