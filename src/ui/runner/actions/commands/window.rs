//! This module contains the command handlers that show and hide the window.
use anyhow::Result;

use super::super::context::CommandContext;

/// Shows the window.
///
/// Usage: `/hw open`
pub fn open_window(context: &mut CommandContext<'_>) -> Result<()> {
    context.show_window();
    context.emit_chat("Window opened.");
    Ok(())
}

/// Hides the window.
///
/// Usage: `/hw close`
pub fn close_window(context: &mut CommandContext<'_>) -> Result<()> {
    context.hide_window();
    context.emit_chat("Window closed.");
    Ok(())
}
