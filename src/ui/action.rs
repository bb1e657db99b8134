//! This module defines the actions the host derives from a line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum UIAction {
    /// Runs an addon slash command. Carries the text after the command word.
    SlashCommand(String),
    /// Input the host has no handler for.
    Unknown(String),
    /// Ends the session.
    Exit,
}
