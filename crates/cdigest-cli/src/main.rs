//! cdigest CLI
//!
//! Command-line interface for building and checking Content-Digest headers

use cdigest_core::core_types::{RequestId, TraceId};
use cdigest_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cdigest")]
#[command(about = "cdigest - HTTP Content-Digest headers", long_about = None)]
struct Cli {
    /// Log output style (written to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogProfile::Production)]
    log_profile: LogProfile,

    /// Trace identifier supplied by the caller, echoed in logs and errors
    #[arg(long, global = true)]
    trace_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute a Content-Digest header value for a body
    Create(commands::create::CreateArgs),
    /// Verify a body against a Content-Digest header value
    Verify(commands::verify::VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let request_id = RequestId::new();
    let trace_id = cli.trace_id.map(TraceId::from_string);
    let span = tracing::info_span!(
        "cdigest",
        request_id = %request_id,
        trace_id = trace_id.as_ref().map(TraceId::as_str)
    );
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(args).map(|()| ExitCode::SUCCESS),
        Commands::Verify(args) => commands::verify::execute(args).map(|verified| {
            if verified {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let e = e.with_request_id(request_id);
            let e = match trace_id {
                Some(trace_id) => e.with_trace_id(trace_id),
                None => e,
            };
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
