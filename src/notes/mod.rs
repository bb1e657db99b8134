//! The addon's domain state: the message log, the window visibility flag and
//! the text rendering of the log.
pub mod log;
pub mod render;
pub mod visibility;

pub use log::MessageLog;
pub use render::render_messages;
pub use visibility::Visibility;

use thiserror::Error;

/// Errors raised by the note-taking state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotesError {
    /// The text to append was empty or only whitespace.
    #[error("message text is empty")]
    EmptyMessage,
}
