//! Dedup CLI
//!
//! Command-line interface for finding duplicate CRM contacts.

mod commands;
mod config;
mod display;
mod input;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use dedup_core::SimilarityKind;
use tracing_subscriber::EnvFilter;

use commands::check::CandidateArgs;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "dedup")]
#[command(version, about = "Fuzzy duplicate detection for CRM contacts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Matcher config file (JSON)
    #[arg(long, global = true, env = "DEDUP_CONFIG")]
    config: Option<PathBuf>,

    /// Similarity percentage a match must exceed (0-100)
    #[arg(long, global = true, env = "DEDUP_THRESHOLD")]
    threshold: Option<f64>,

    /// Similarity strategy (jaro-winkler, levenshtein)
    #[arg(long, global = true, env = "DEDUP_SIMILARITY")]
    similarity: Option<SimilarityKind>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Log matcher decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one contact against existing contacts
    Check {
        /// Existing contacts (JSON array)
        #[arg(long, value_name = "FILE")]
        existing: PathBuf,

        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Id of the contact when re-checking a persisted record
        #[arg(long)]
        id: Option<String>,
    },

    /// Classify an import file against existing contacts
    Classify {
        /// Existing contacts (JSON array)
        #[arg(long, value_name = "FILE")]
        existing: PathBuf,

        /// Candidates to import (CSV with header row, or JSON array)
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Score the similarity of two strings
    Score {
        /// First string
        a: String,
        /// Second string
        b: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "dedup=debug,dedup_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::load(
        cli.config.as_deref(),
        cli.threshold,
        cli.similarity,
        cli.json,
    )?;

    match cli.command {
        Commands::Check {
            existing,
            name,
            email,
            phone,
            id,
        } => {
            let candidate = CandidateArgs {
                id: id.as_deref(),
                name: &name,
                email: email.as_deref(),
                phone: phone.as_deref(),
            };
            commands::check::run(&config, &existing, &candidate)?;
        }
        Commands::Classify { existing, input } => {
            commands::classify::run(&config, &existing, &input)?;
        }
        Commands::Score { a, b } => {
            commands::score::run(&config, &a, &b)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "dedup", &mut io::stdout());
        }
    }

    Ok(())
}
