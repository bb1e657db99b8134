//! This module renders the message log as the text shown in the addon window.
use super::MessageLog;

/// Text shown when the log holds no messages.
pub const EMPTY_PLACEHOLDER: &str = "No messages yet. Type /hw <message> to add one!";

/// Renders the full log.
///
/// An empty log renders as [`EMPTY_PLACEHOLDER`]. Otherwise the output is a
/// header with the total count followed by one `<index>. <message>` line per
/// message, numbered from 1 in insertion order.
pub fn render_messages(log: &MessageLog) -> String {
    if log.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut output = format!("Total messages: {}", log.count());
    for (index, message) in log.messages().iter().enumerate() {
        output.push_str(&format!("\n{}. {}", index + 1, message));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_renders_placeholder() {
        assert_eq!(render_messages(&MessageLog::default()), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn messages_are_numbered_in_order() {
        let mut log = MessageLog::default();
        log.append("buy milk").unwrap();
        log.append("call home").unwrap();
        log.append("buy milk").unwrap();

        let rendered = render_messages(&log);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "Total messages: 3",
                "1. buy milk",
                "2. call home",
                "3. buy milk"
            ]
        );
    }
}
