mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "krishi",
    version,
    about = "Farm advisory tool: crop recommendation and yield estimation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one JSON message from stdin and write the reply to stdout
    ///
    /// The message is either {"soilData": {...}} or {"yieldData": {...}}.
    /// Failures are replied as {"error": "..."} and the process still
    /// exits 0.
    Run,
    /// Recommend a crop for a soil measurement JSON file
    Recommend {
        /// Path to a JSON file with the 7 soil/weather factors
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Custom tolerance table JSON (replaces the builtin table)
        #[arg(short, long = "tables", value_name = "FILE")]
        tables: Option<PathBuf>,

        /// Show every crop's score, not just the top 3
        #[arg(long)]
        show_all: bool,
    },
    /// Estimate production for a crop/area/season JSON file
    Yield {
        /// Path to a JSON file with crop, area, season, district, year
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect rule tables
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// List the builtin rule tables
    List,
    /// Explain the tolerance table in plain language
    Explain,
    /// Print the JSON schema for custom tolerance tables
    Schema,
    /// Validate a custom tolerance table file
    Validate {
        /// Path to JSON table file
        file: PathBuf,
    },
}

fn main() {
    // Diagnostics go to stderr so stdout stays a clean reply surface.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => commands::run::run(),
        Commands::Recommend {
            input_file,
            output,
            tables,
            show_all,
        } => commands::recommend::run(input_file, &output, tables, show_all),
        Commands::Yield { input_file, output } => commands::estimate::run(input_file, &output),
        Commands::Tables { action } => match action {
            TablesAction::List => commands::tables::list(),
            TablesAction::Explain => commands::tables::explain(),
            TablesAction::Schema => commands::tables::schema(),
            TablesAction::Validate { file } => commands::tables::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
