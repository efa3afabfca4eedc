mod cli;
mod commands;
mod format;
mod output;

use clap::Parser;
use linkshelf::config::Config;
use linkshelf::error::Result;
use linkshelf::storage::SqliteStorage;
use linkshelf::BookmarkStore;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger; --debug lowers the default filter
    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.version {
        println!("linkshelf {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()
    };

    let db_path = if let Some(path) = &args.db {
        path.clone()
    } else {
        cfg.resolve_data_dir().join("linkshelf.db")
    };

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    log::debug!("Opening store at {:?}", db_path);
    let storage = SqliteStorage::open(&db_path)?;
    let mut store = BookmarkStore::open(Box::new(storage), cfg)?;

    cli::handle_args(args, &mut store)
}
