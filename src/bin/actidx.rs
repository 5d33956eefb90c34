//! CLI entry point for the `actidx` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use activity_index::cli::commands;
use activity_index::types::{ActivityError, IndexConfig, DEFAULT_LOG_CAPACITY};
use activity_index::ActivityManager;

#[derive(Parser)]
#[command(
    name = "actidx",
    about = "Activity index CLI — per-user activity history in a hash-ordered AVL tree"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug output
    #[arg(long)]
    verbose: bool,

    /// Number of activities kept per user
    #[arg(long, default_value_t = DEFAULT_LOG_CAPACITY)]
    log_capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ordering key of one or more identifiers
    Hash {
        /// Identifiers to hash
        #[arg(required = true)]
        identifiers: Vec<String>,
    },
    /// Apply a JSON-lines script of operations to a fresh index
    Replay {
        /// Path to the script, or "-" for stdin
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let config = IndexConfig {
        log_capacity: cli.log_capacity,
    };

    if cli.verbose {
        eprintln!("Verbose mode enabled (log capacity {})", config.log_capacity);
    }

    let result = match cli.command {
        Commands::Hash { identifiers } => {
            commands::cmd_hash(&identifiers, &mut io::stdout().lock(), json)
        }
        Commands::Replay { file } => ActivityManager::with_config(config)
            .and_then(|mut manager| commands::cmd_replay(&file, &mut manager, json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            ActivityError::Io(_) => 1,
            ActivityError::Script { .. } | ActivityError::Json(_) => 2,
            ActivityError::UserNotFound(_) => 4,
            ActivityError::InvalidCapacity(_) => 5,
        };
        process::exit(code);
    }
}
