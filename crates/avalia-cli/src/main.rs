//! avalia CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "avalia", version, about = "Performance-evaluation scoring and history tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the local database and starter form templates
    Init {
        /// Database file path
        #[arg(long, default_value = avalia_store::DEFAULT_DB_FILE)]
        db: PathBuf,
    },

    /// Score a filled-in form and persist the submission
    Submit {
        /// Path to the filled-in .toml form
        #[arg(long)]
        form: PathBuf,

        /// Database file path
        #[arg(long, default_value = avalia_store::DEFAULT_DB_FILE)]
        db: PathBuf,
    },

    /// List stored evaluations, most recent first
    History {
        /// Database file path
        #[arg(long, default_value = avalia_store::DEFAULT_DB_FILE)]
        db: PathBuf,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Export the history as CSV, or one submission as JSON
    Export {
        /// Database file path
        #[arg(long, default_value = avalia_store::DEFAULT_DB_FILE)]
        db: PathBuf,

        /// Export a single record's payload as JSON instead of the CSV history
        #[arg(long)]
        id: Option<i64>,

        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },

    /// List the rating criteria catalogs
    Criteria {
        /// Filter to one kind (lider, liderado)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Validate a form file without submitting it
    Validate {
        /// Path to the .toml form
        #[arg(long)]
        form: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("avalia=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { db } => commands::init::execute(db),
        Commands::Submit { form, db } => commands::submit::execute(form, db),
        Commands::History { db, limit, format } => commands::history::execute(db, limit, format),
        Commands::Export { db, id, output } => commands::export::execute(db, id, output),
        Commands::Criteria { kind } => commands::criteria::execute(kind),
        Commands::Validate { form } => commands::validate::execute(form),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
