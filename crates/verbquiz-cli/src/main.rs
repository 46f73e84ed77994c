//! verbquiz CLI — the terminal front end for the verb drills.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "verbquiz", version, about = "Irregular verb conjugation drills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds interactively
    Play {
        /// Verb list JSON (defaults to the bundled list)
        #[arg(long)]
        verbs: Option<PathBuf>,

        /// Questions per round
        #[arg(long)]
        questions: Option<usize>,

        /// Seed for a reproducible draw order
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a verb list file
    Validate {
        /// Path to the verb list JSON
        #[arg(long)]
        verbs: PathBuf,
    },

    /// List the verbs in a verb list
    List {
        /// Verb list JSON (defaults to the bundled list)
        #[arg(long)]
        verbs: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Create a starter config and verb list
    Init,
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("verbquiz=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            verbs,
            questions,
            seed,
            config,
        } => commands::play::execute(verbs, questions, seed, config).await,
        Commands::Validate { verbs } => commands::validate::execute(verbs).await,
        Commands::List { verbs, format } => commands::list::execute(verbs, format).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
