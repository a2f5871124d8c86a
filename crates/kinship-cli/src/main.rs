//! Kinship CLI
//!
//! Command-line access to a person graph stored in a SQLite file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kinship_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(about = "Kinship - People and their parent/child relationships", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(
        long,
        global = true,
        env = "KINSHIP_DB_PATH",
        default_value = ".kinship/store.db"
    )]
    db: PathBuf,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log operations to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a person and link parents and children
    Add(commands::add::AddArgs),
    /// Show a person with their parents and children
    View(commands::view::ViewArgs),
    /// Delete a person and unlink them from every relative
    Delete(commands::delete::DeleteArgs),
    /// List every person
    List,
    /// Verify that every relationship is recorded on both sides
    Check,
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let ctx = commands::Context {
        db: cli.db,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Add(args) => commands::add::execute(&ctx, args),
        Commands::View(args) => commands::view::execute(&ctx, args),
        Commands::Delete(args) => commands::delete::execute(&ctx, args),
        Commands::List => commands::list::execute(&ctx),
        Commands::Check => commands::check::execute(&ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
