//! This module handles the initial setup of the application.
use super::args::AppArgs;
use crate::storage::{MemorySavedVariablesStore, SavedVariablesStore, SledSavedVariablesStore};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "HELLOWORLD_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";

/// Contains all the necessary components for the application to run.
pub struct PreparedApp {
    /// The command-line arguments.
    pub args: AppArgs,
    /// Where saved variables are loaded from and written to.
    pub store: Arc<dyn SavedVariablesStore + Send + Sync>,
}

/// Prepares the application for running.
///
/// This function performs the following steps:
/// 1. Configures logging.
/// 2. Resolves and creates the data directory.
/// 3. Opens the saved variables store.
///
/// # Errors
///
/// This function will return an error if the data directory or the database
/// cannot be opened.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    configure_logging(args.verbose);

    let store: Arc<dyn SavedVariablesStore + Send + Sync> = if args.ephemeral {
        info!("Saved variables are kept in memory only");
        Arc::new(MemorySavedVariablesStore::new())
    } else {
        let data_dir = resolve_data_dir(&args);
        std::fs::create_dir_all(&data_dir)?;

        let db_path = format!("{}/db", data_dir);
        info!("Opening saved variables at {}", db_path);
        let db = sled::open(&db_path)?;
        Arc::new(SledSavedVariablesStore::new(db)?)
    };

    Ok(PreparedApp { args, store })
}

/// Configures logging for the application.
///
/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// takes precedence over the verbosity flag.
fn configure_logging(verbose: bool) {
    let default_filter = if verbose {
        "info,helloworld=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves the data directory.
///
/// The directory can be provided via a command-line argument or an environment variable.
fn resolve_data_dir(args: &AppArgs) -> String {
    args.data_dir
        .clone()
        .or_else(|| std::env::var(DATA_DIR_ENV).ok())
        .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_data_dir_wins() {
        let args = AppArgs::parse_from(["helloworld", "--data-dir", "/tmp/notes"]);
        assert_eq!(resolve_data_dir(&args), "/tmp/notes");
    }

    #[tokio::test]
    async fn ephemeral_mode_uses_memory_store() {
        let args = AppArgs::parse_from(["helloworld", "--ephemeral"]);
        let prepared = prepare(args).unwrap();
        assert_eq!(prepared.store.load("HelloWorldDB").await.unwrap(), None);
    }
}
