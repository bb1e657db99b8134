pub mod args;
mod client;
mod oneshot;
mod setup;

pub use args::AppArgs;

use crate::ui::Session;
use anyhow::Result;
use tracing::info;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

/// Runs one session: load saved variables, log in, handle input, log out and
/// save.
pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { args, store } = setup::prepare(args)?;

    let saved = store.load(&args.record).await?;
    let mut session = Session::new(saved);
    session.login()?;

    let mut session = match args.command_line() {
        Some(command) => oneshot::run(session, &command)?,
        None => client::run(session).await?,
    };

    info!(
        "Session ended with {} messages",
        session.addon().state().messages.count()
    );
    if let Some(saved) = session.logout()? {
        store.save(&args.record, &saved).await?;
        info!("Saved variables '{}' written", args.record);
    }

    Ok(())
}
