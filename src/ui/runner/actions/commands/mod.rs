//! This module contains command dispatching logic for the addon's slash command.
//!
//! It maps command words to their respective handler functions. Input that
//! matches no command is stored as a message.
mod info;
mod messages;
mod window;

use anyhow::Result;

use super::context::CommandContext;
use super::execute::ParsedCommand;

/// Dispatches a parsed command to the appropriate handler function.
///
/// # Arguments
///
/// * `parsed` - The command line split into command word and argument.
/// * `context` - The `CommandContext` providing access to the addon state.
///
/// # Returns
///
/// A `Result` indicating success or failure of the command execution.
pub fn dispatch(parsed: &ParsedCommand<'_>, context: &mut CommandContext<'_>) -> Result<()> {
    match parsed.command.as_str() {
        "open" => window::open_window(context),
        "close" => window::close_window(context),
        "write" => messages::write_message(parsed.argument, context),
        "clear" => messages::clear_messages(context),
        "help" | "" => info::show_help(context),
        _ => messages::quick_note(parsed.raw, context),
    }
}
