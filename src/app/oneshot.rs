use crate::ui::Session;
use anyhow::Result;
use tracing::debug;

/// Runs a single `/hw` command given on the command line.
pub fn run(mut session: Session, command: &str) -> Result<Session> {
    debug!("Running one-shot command '{}'", command);
    session.handle_line(&format!("/hw {}", command))?;
    Ok(session)
}
