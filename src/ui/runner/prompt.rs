//! This module adapts the command completer to the `rustyline` prompt.
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::ui::CommandCompleter;

const PROMPT: &str = "> ";

/// A source of input lines for a session.
pub trait LineSource {
    /// Reads the next line.
    ///
    /// # Errors
    ///
    /// `Interrupted` and `Eof` mean the user closed the input; anything else
    /// is a read failure.
    fn read_line(&mut self) -> rustyline::Result<String>;
}

/// The interactive terminal prompt with history.
pub struct Prompt {
    editor: Editor<PromptHelper, DefaultHistory>,
}

impl Prompt {
    /// Creates the prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> rustyline::Result<Self> {
        let mut editor: Editor<PromptHelper, DefaultHistory> = Editor::new()?;
        editor.set_helper(Some(PromptHelper::new()));
        Ok(Self { editor })
    }
}

impl LineSource for Prompt {
    fn read_line(&mut self) -> rustyline::Result<String> {
        let line = self.editor.readline(PROMPT)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        Ok(line)
    }
}

/// Prompt helper offering tab completion and inline hints for slash commands.
pub struct PromptHelper {
    completer: CommandCompleter,
}

impl PromptHelper {
    pub fn new() -> Self {
        Self {
            completer: CommandCompleter::new(),
        }
    }

    /// Returns the rest of the only matching command, if the typed text is
    /// an exact prefix of it.
    fn hint_for(&self, line: &str) -> Option<String> {
        let typed = line.trim_start();
        self.completer
            .get_best_suggestion(typed)
            .and_then(|suggestion| suggestion.strip_prefix(typed).map(str::to_string))
    }
}

impl Completer for PromptHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if pos < line.len() {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .completer
            .get_suggestions(line)
            .into_iter()
            .map(|suggestion| Pair {
                display: suggestion.clone(),
                replacement: suggestion,
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for PromptHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }

        self.hint_for(line)
    }
}

impl Highlighter for PromptHelper {}

impl Validator for PromptHelper {}

impl Helper for PromptHelper {}
