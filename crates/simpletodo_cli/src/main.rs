//! Terminal frontend for SimpleTodo.
//!
//! # Responsibility
//! - Resolve configuration from env and flags, start logging, open storage.
//! - Bind the terminal surface to the core event wiring and run the loop.

mod input;
mod repl;
mod terminal;

use anyhow::Context;
use clap::Parser;
use simpletodo_core::{init_logging, AppConfig, EventWiring, SqliteKvStore, TodoService};
use std::io::IsTerminal;
use std::path::PathBuf;
use terminal::TerminalSurface;

#[derive(Parser)]
#[command(name = "simpletodo", version)]
#[command(about = "Keep a small todo list in the terminal")]
struct Cli {
    /// SQLite file holding the list (overrides SIMPLETODO_DB_PATH)
    #[arg(long)]
    db: Option<PathBuf>,
    /// Directory for rolling log files (overrides SIMPLETODO_LOG_DIR)
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error (overrides SIMPLETODO_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config =
        AppConfig::from_env()?.with_overrides(cli.db, cli.log_dir, cli.log_level.as_deref())?;

    init_logging(config.log_level, &config.log_dir.to_string_lossy())
        .context("failed to start logging")?;
    let store = SqliteKvStore::open(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;

    let stdout = std::io::stdout();
    let clear_screen = stdout.is_terminal();
    let surface = TerminalSurface::new(stdout, clear_screen);
    let mut wiring = EventWiring::init(TodoService::new(store, surface));

    repl::run(&mut wiring, std::io::stdin().lock())?;
    Ok(())
}
