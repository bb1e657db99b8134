use anyhow::Result;
use tracing::debug;

use super::{commands, context::CommandContext};

/// A slash command line split into its command word and argument.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The first whitespace-delimited token, lowercased. Empty for blank input.
    pub command: String,
    /// Everything after the command token, trimmed.
    pub argument: &'a str,
    /// The line exactly as received.
    pub raw: &'a str,
}

pub fn parse_command_line(raw: &str) -> ParsedCommand<'_> {
    let line = raw.trim_start();
    let (token, rest) = match line.find(char::is_whitespace) {
        Some(split) => line.split_at(split),
        None => (line, ""),
    };

    ParsedCommand {
        command: token.to_lowercase(),
        argument: rest.trim(),
        raw,
    }
}

pub(crate) fn execute_command_line(raw: &str, context: &mut CommandContext<'_>) -> Result<()> {
    let parsed = parse_command_line(raw);
    debug!("Executing slash command '{}'", parsed.command);
    commands::dispatch(&parsed, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_and_argument() {
        let parsed = parse_command_line("write  hello there  ");
        assert_eq!(parsed.command, "write");
        assert_eq!(parsed.argument, "hello there");
        assert_eq!(parsed.raw, "write  hello there  ");
    }

    #[test]
    fn lowercases_command_only() {
        let parsed = parse_command_line("WRITE Hello");
        assert_eq!(parsed.command, "write");
        assert_eq!(parsed.argument, "Hello");
    }

    #[test]
    fn blank_input_yields_empty_command() {
        for raw in ["", "   ", "\t \n"] {
            let parsed = parse_command_line(raw);
            assert_eq!(parsed.command, "");
            assert_eq!(parsed.argument, "");
        }
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        let parsed = parse_command_line("   open");
        assert_eq!(parsed.command, "open");
        assert_eq!(parsed.argument, "");
    }

    #[test]
    fn command_without_argument() {
        let parsed = parse_command_line("write");
        assert_eq!(parsed.command, "write");
        assert_eq!(parsed.argument, "");
    }
}
