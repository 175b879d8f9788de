//! Header verification command

use cdigest_core::errors::{ExError, ExErrorKind};
use cdigest_core::{check_content_digest, verify_content_digest, DigestCheck};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Content-Digest header value to check against
    #[arg(long)]
    pub header: String,

    /// Body file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct VerifyReport {
    verified: bool,
    checks: Vec<DigestCheck>,
}

/// Returns whether every digest in the header matched the body
///
/// # Errors
///
/// Fails on unreadable input or a structurally invalid header.
pub fn execute(args: VerifyArgs) -> Result<bool, ExError> {
    let body = super::read_body(args.file.as_deref())?;

    match args.format {
        OutputFormat::Text => {
            let verified = verify_content_digest(Some(body.as_slice()), &args.header)?;
            println!("{}", if verified { "verified" } else { "mismatch" });
            Ok(verified)
        }
        OutputFormat::Json => {
            let checks = check_content_digest(Some(body.as_slice()), &args.header)?;
            let report = VerifyReport {
                verified: checks.iter().all(|c| c.matched),
                checks,
            };
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("verify_report")
                    .with_message(e.to_string())
            })?;
            println!("{}", json);
            Ok(report.verified)
        }
    }
}
