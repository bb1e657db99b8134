//! This module contains the command handler for displaying help.
use anyhow::Result;

use super::super::context::CommandContext;

/// Displays available commands and their usage.
pub fn show_help(context: &mut CommandContext<'_>) -> Result<()> {
    let help_text = "HelloWorld commands:\n  /hw open             - Show the window\n  /hw close            - Hide the window\n  /hw write <message>  - Save a message\n  /hw clear            - Delete all messages\n  /hw <message>        - Save a message and toggle the window\n  /hw help             - Show this help";
    context.emit_chat(help_text);
    Ok(())
}
