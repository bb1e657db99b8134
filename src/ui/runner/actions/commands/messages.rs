//! This module contains the command handlers that change the message log.
use anyhow::Result;
use tracing::debug;

use crate::notes::NotesError;

use super::super::context::CommandContext;

/// Appends a message without changing window visibility.
///
/// Usage: `/hw write <message>`
///
/// # Arguments
///
/// * `text` - The trimmed text after the command word.
/// * `context` - The `CommandContext` providing access to the addon state.
pub fn write_message(text: &str, context: &mut CommandContext<'_>) -> Result<()> {
    match context.state_mut().messages.append(text) {
        Ok(count) => {
            context.emit_chat(format!("✅ Message saved! Total messages: {}", count));
            context.refresh();
        }
        Err(NotesError::EmptyMessage) => {
            context.emit_chat("❌ Usage: /hw write <message>");
        }
    }
    Ok(())
}

/// Removes every stored message.
///
/// Usage: `/hw clear`
pub fn clear_messages(context: &mut CommandContext<'_>) -> Result<()> {
    let removed = context.state().messages.count();
    context.state_mut().messages.clear();
    debug!("Cleared {} messages", removed);

    context.refresh();
    context.emit_chat("🗑️ All messages cleared.");
    Ok(())
}

/// Stores the whole input line as a message and flips the window.
///
/// This is what runs for `/hw <anything that is not a command>`. Unlike
/// `write`, the stored text is the line exactly as typed, and the window is
/// toggled afterwards.
pub fn quick_note(raw: &str, context: &mut CommandContext<'_>) -> Result<()> {
    let count = context.state_mut().messages.append(raw)?;
    context.emit_chat(format!("✅ Message saved! Total messages: {}", count));
    context.refresh();
    context.toggle_window();
    Ok(())
}
