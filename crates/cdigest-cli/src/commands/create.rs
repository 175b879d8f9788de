//! Header construction command

use cdigest_core::create_content_digest_header;
use cdigest_core::errors::ExError;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Digest algorithm; repeat for several, members keep this order
    #[arg(short, long = "algorithm", default_value = "sha-256")]
    pub algorithms: Vec<String>,

    /// Body file (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

/// # Errors
///
/// Fails on unreadable input or an unsupported algorithm.
pub fn execute(args: CreateArgs) -> Result<(), ExError> {
    let body = super::read_body(args.file.as_deref())?;
    let header = create_content_digest_header(Some(body.as_slice()), &args.algorithms)?;
    println!("{}", header);
    Ok(())
}
