//! attestdoc CLI - invoice attestation issuance and artifact verification.

use clap::{Parser, Subcommand};

mod commands;
mod ledger;
mod output;

use commands::{extract, inspect, issue, verify};

#[derive(Parser)]
#[command(name = "attestdoc")]
#[command(about = "Invoice attestation artifact issuance and verification CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an invoice attestation and write a document artifact
    Issue(issue::IssueArgs),
    /// Decode and display the record embedded in an artifact
    Inspect {
        /// Path to artifact file
        artifact: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the raw canonical payload embedded in an artifact
    Extract {
        /// Path to artifact file
        artifact: String,
    },
    /// Verify an artifact against the ledger
    Verify {
        /// Path to artifact file
        artifact: String,
        /// Path to ledger file
        #[arg(long)]
        ledger: String,
        /// Exit with error code if verification is rejected
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Issue(args) => issue::run(args),
        Commands::Inspect { artifact, json } => inspect::run(artifact, json),
        Commands::Extract { artifact } => extract::run(artifact),
        Commands::Verify {
            artifact,
            ledger,
            strict,
            json,
        } => verify::run(artifact, ledger, strict, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
