//! This module defines the addon's slash command interpreter and the host
//! actions that feed it.
mod commands;
mod context;
mod dispatch;
mod execute;

pub use context::CommandContext;
pub use dispatch::{handle_ui_action, SessionControl};
pub(crate) use execute::execute_command_line;
