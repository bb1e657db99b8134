//! This module defines the ordered message log kept by the addon.
use super::NotesError;

/// An ordered, append-only list of messages that can be cleared as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    /// Appends a message to the end of the log.
    ///
    /// The text is stored exactly as given. Text that is empty after trimming
    /// is rejected and the log is left untouched.
    ///
    /// # Returns
    ///
    /// The number of messages in the log after the append.
    pub fn append(&mut self, text: impl Into<String>) -> Result<usize, NotesError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(NotesError::EmptyMessage);
        }

        self.messages.push(text);
        Ok(self.messages.len())
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the messages in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl From<Vec<String>> for MessageLog {
    fn from(messages: Vec<String>) -> Self {
        Self { messages }
    }
}
