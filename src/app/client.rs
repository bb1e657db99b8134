use crate::ui::Session;
use anyhow::Result;

/// Runs the interactive prompt until the player logs out.
pub async fn run(session: Session) -> Result<Session> {
    println!("💬 Type /hw help for commands, /exit to log out.\n");

    tokio::task::spawn_blocking(move || session.run_prompt()).await?
}
