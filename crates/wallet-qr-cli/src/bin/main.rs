//! wallet-qr - Export wallet credentials as a scannable QR code image
//!
//! Writes a PNG holding `{"address", "private_key", "public_key"}` as JSON.
//! The image contains the private key: store it as carefully as the key itself.

use clap::Parser;
use std::process::ExitCode;

use wallet_qr_cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the payload and result
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    wallet_qr_cli::run(&args)
}
