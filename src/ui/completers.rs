//! This module provides an autocompletion mechanism for the prompt input.
#[derive(Clone)]
pub struct CommandCompleter {
    /// Slash command lines offered as completions.
    commands: Vec<String>,
}

impl CommandCompleter {
    /// Creates a new `CommandCompleter` with the addon and host commands.
    pub fn new() -> Self {
        let commands = vec![
            "/hw open".to_string(),
            "/hw close".to_string(),
            "/hw write ".to_string(),
            "/hw clear".to_string(),
            "/hw help".to_string(),
            "/exit".to_string(),
        ];

        Self { commands }
    }

    /// Generates a list of suggestions based on the current input.
    ///
    /// Matching ignores case. Blank input suggests every command.
    ///
    /// # Arguments
    ///
    /// * `input` - The current input string from the user.
    ///
    /// # Returns
    ///
    /// A `Vec` of full command lines that start with the input.
    pub fn get_suggestions(&self, input: &str) -> Vec<String> {
        let prefix = input.trim_start().to_lowercase();
        if prefix.is_empty() {
            return self.commands.clone();
        }

        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(&prefix) && cmd.as_str() != prefix)
            .cloned()
            .collect()
    }

    /// Returns the single completion to hint, if the input is unambiguous.
    pub fn get_best_suggestion(&self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }

        let mut suggestions = self.get_suggestions(input);
        if suggestions.len() == 1 {
            suggestions.pop()
        } else {
            None
        }
    }
}
