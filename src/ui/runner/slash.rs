//! This module routes a line of user input to the slash command it names.
use crate::ui::UIAction;

/// Command words that reach the addon.
pub const ADDON_ALIASES: [&str; 2] = ["/hw", "/helloworld"];

/// Command words that end the session.
pub const EXIT_COMMANDS: [&str; 3] = ["/exit", "/quit", "/logout"];

/// Turns a raw input line into a host action.
///
/// Alias matching is case-insensitive. Everything after the command word,
/// with leading whitespace removed, is passed on unchanged.
pub fn route_input(line: &str) -> UIAction {
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };
    let word = word.to_lowercase();

    if ADDON_ALIASES.contains(&word.as_str()) {
        UIAction::SlashCommand(rest.trim_start().to_string())
    } else if EXIT_COMMANDS.contains(&word.as_str()) {
        UIAction::Exit
    } else {
        UIAction::Unknown(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_addon_aliases() {
        assert_eq!(
            route_input("/hw write hello"),
            UIAction::SlashCommand("write hello".to_string())
        );
        assert_eq!(
            route_input("/HelloWorld   open"),
            UIAction::SlashCommand("open".to_string())
        );
    }

    #[test]
    fn bare_alias_passes_empty_line() {
        assert_eq!(route_input("/hw"), UIAction::SlashCommand(String::new()));
        assert_eq!(route_input("/hw   "), UIAction::SlashCommand(String::new()));
    }

    #[test]
    fn keeps_trailing_text_verbatim() {
        assert_eq!(
            route_input("/hw note with trailing space "),
            UIAction::SlashCommand("note with trailing space ".to_string())
        );
    }

    #[test]
    fn exit_commands_end_session() {
        for line in ["/exit", "/QUIT", "/logout now"] {
            assert_eq!(route_input(line), UIAction::Exit);
        }
    }

    #[test]
    fn other_input_is_unknown() {
        assert_eq!(
            route_input("hello"),
            UIAction::Unknown("hello".to_string())
        );
        assert_eq!(route_input("/hwx"), UIAction::Unknown("/hwx".to_string()));
    }
}
