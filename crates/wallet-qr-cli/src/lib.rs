//! # wallet-qr-cli
//!
//! Command-line front end for wallet-qr. Reads credentials from flags,
//! environment variables or a hidden prompt, exports the QR image and
//! reports the outcome with a process exit code.

pub mod args;
mod app;
pub mod error;
pub mod report;

pub use app::run;
pub use args::Args;
pub use error::{CliError, Result};
