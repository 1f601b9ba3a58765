//! Command-line front end for the wishlist core.
//!
//! # Responsibility
//! - Wire the SQLite repository into `WishlistUsecase`.
//! - Print use-case results as JSON on stdout.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wishlist_core::db::open_db;
use wishlist_core::{
    core_version, default_log_level, init_logging, SqliteWishlistRepository, WishlistInput,
    WishlistUsecase,
};

#[derive(Parser)]
#[command(name = "wishlist-cli")]
#[command(about = "List and create wishlist items", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database file
    #[arg(long, global = true, env = "WISHLIST_DB_PATH", default_value = "wishlist.sqlite3")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error); only used together with --log-dir
    #[arg(long, global = true, env = "WISHLIST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "WISHLIST_LOG_DIR")]
    log_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all live wishlists
    List,

    /// Create a wishlist
    Create {
        /// Wishlist title
        title: String,

        /// Mark the wishlist as already achieved
        #[arg(long)]
        achieved: bool,
    },
}

fn main() -> Result<()> {
    let output = run(Cli::parse())?;
    println!("{output}");
    Ok(())
}

/// Executes one command and returns the JSON to print.
fn run(cli: Cli) -> Result<String> {
    match (cli.log_dir.as_deref(), cli.log_level.as_deref()) {
        (Some(log_dir), level) => {
            init_logging(level.unwrap_or(default_log_level()), log_dir)
                .map_err(|err| anyhow!(err))?;
            info!(
                "event=cli_start module=cli status=ok version={}",
                core_version()
            );
        }
        (None, Some(level)) => {
            eprintln!("warning: log level `{level}` ignored because no log directory is set");
        }
        (None, None) => {}
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let repo = SqliteWishlistRepository::try_new(&conn)?;
    let usecase = WishlistUsecase::new(repo);

    let output = match cli.command {
        Commands::List => serde_json::to_string_pretty(&usecase.get_all()?)?,
        Commands::Create { title, achieved } => {
            let created = usecase.create(WishlistInput::new(title, achieved))?;
            info!("event=cli_create module=cli status=ok id={}", created.id);
            serde_json::to_string_pretty(&created)?
        }
    };

    Ok(output)
}
