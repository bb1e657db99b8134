//! The main entry point for the HelloWorld notes application.
mod addon;
mod app;
mod events;
mod notes;
mod storage;
mod types;
mod ui;

use anyhow::Result;

/// The main function of the application.
///
/// This function is the entry point for the HelloWorld application. It loads
/// the saved variables, runs one session and saves them again.
///
/// # Errors
///
/// Returns an error if the application fails to launch or encounters
/// a critical error during execution.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
