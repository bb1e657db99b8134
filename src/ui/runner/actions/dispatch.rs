use anyhow::Result;
use tracing::debug;

use crate::addon::Addon;
use crate::ui::UIAction;

/// Whether the session keeps reading input after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Logout,
}

pub fn handle_ui_action(action: UIAction, addon: &mut Addon) -> Result<SessionControl> {
    match action {
        UIAction::Exit => {
            addon.context().emit_chat("👋 Goodbye!");
            Ok(SessionControl::Logout)
        }
        UIAction::Unknown(input) => {
            debug!("Ignoring input without a slash command: '{}'", input);
            addon
                .context()
                .emit_chat("❌ Unknown command. Type /hw help for available commands.");
            Ok(SessionControl::Continue)
        }
        UIAction::SlashCommand(line) => {
            if let Err(e) = addon.handle_slash(&line) {
                addon.context().emit_chat(format!("❌ Error: {}", e));
            }
            Ok(SessionControl::Continue)
        }
    }
}
