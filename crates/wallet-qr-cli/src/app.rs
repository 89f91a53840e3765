//! Top-level run: resolve inputs, export, report

use std::process::ExitCode;
use tracing::debug;

use wallet_qr::{ExportJob, ExportOutcome, Exporter};

use crate::args::Args;
use crate::error::Result;
use crate::report::{failure_message, success_message};

/// Run one export and translate the result into console output and an exit code.
///
/// Exit code 0 on success, 1 on any failure.
pub fn run(args: &Args) -> ExitCode {
    match export(args) {
        Ok((outcome, preview)) => {
            println!("{}", success_message(&outcome, preview.as_deref()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Export failed: {:?}", e);
            eprintln!("{}", failure_message(&e));
            ExitCode::from(1)
        }
    }
}

/// Credentials are validated before any settings file is read.
fn export(args: &Args) -> Result<(ExportOutcome, Option<String>)> {
    let credentials = args.credentials()?;
    let options = args.render_options()?;

    let exporter = Exporter::new(options);
    let job = ExportJob::new(credentials, &args.output);
    debug!("Exporting credentials to {:?}", job.output_path());

    let outcome = exporter.export(&job)?;

    let preview = if args.show {
        Some(exporter.preview(&outcome.payload)?)
    } else {
        None
    };

    Ok((outcome, preview))
}
