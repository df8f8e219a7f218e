//! Main entry point for the habits command-line application
//!
//! This file sets up logging, parses command line arguments, resolves the
//! database location and today's date, and starts the interactive session
//! over stdin/stdout.

use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habits::{Session, SqliteStore};

/// Get the default database path with robust fallback strategy
///
/// Walks a list of candidate directories in order of preference and picks
/// the first one that exists (or can be created) and passes a write probe.
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let candidates = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|p| p.join(".habits")),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|p| p.join("habits")),
        // 3. User's config directory
        dirs::config_dir().map(|p| p.join("habits")),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|p| p.join(".habits")),
    ];

    for dir in candidates.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            // Test if we can actually write to this directory
            let test_file = dir.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(dir.join("habits.db"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let temp_dir = std::env::temp_dir().join("habits");
    std::fs::create_dir_all(&temp_dir)?;
    let db_path = temp_dir.join("habits.db");

    tracing::warn!("Using temporary directory for database: {}", db_path.display());
    Ok(db_path)
}

/// Command line arguments for the habits application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Date to treat as today instead of reading the system clock
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habits={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            // Validate and prepare the provided path
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    // Resolve today exactly once; everything downstream takes it as a
    // parameter and never consults the clock again
    let today = args.today.unwrap_or_else(|| Utc::now().naive_utc().date());
    info!("Session date: {}", today);

    let store = SqliteStore::new(db_path)?;
    let session = Session::new(store, today);
    session.run().await?;

    info!("Session complete");
    Ok(())
}
