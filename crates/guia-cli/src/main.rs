//! # guia CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use guia_cli::issue::{run_issue, IssueArgs};
use guia_cli::list::{run_list, ListArgs};
use guia_cli::notify::{run_notify, NotifyArgs};
use guia_cli::request::{run_request, RequestArgs};
use guia_cli::session::{run_session, SessionArgs};
use guia_cli::verify::{run_verify, VerifyArgs};

/// Guia — school transfer documents with verifiable integrity.
///
/// Issues transfer documents for students, files and decides transfer
/// requests, and verifies document authenticity from a short reference
/// code or scanned QR payload.
#[derive(Parser, Debug)]
#[command(name = "guia", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory holding the local collections.
    #[arg(long, global = true, default_value = ".guia")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Issue a transfer document for a student.
    Issue(IssueArgs),

    /// Verify a document by short identifier or QR payload.
    Verify(VerifyArgs),

    /// List issued documents.
    List(ListArgs),

    /// File, list, and decide transfer requests.
    Request(RequestArgs),

    /// Set, show, or clear the signed-in actor.
    Session(SessionArgs),

    /// List and acknowledge notifications.
    Notifications(NotifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!(data_dir = %cli.data_dir.display(), "guia CLI starting");

    let result = match cli.command {
        Commands::Issue(args) => run_issue(&args, &cli.data_dir),
        Commands::Verify(args) => run_verify(&args, &cli.data_dir),
        Commands::List(args) => run_list(&args, &cli.data_dir),
        Commands::Request(args) => run_request(&args, &cli.data_dir),
        Commands::Session(args) => run_session(&args, &cli.data_dir),
        Commands::Notifications(args) => run_notify(&args, &cli.data_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
