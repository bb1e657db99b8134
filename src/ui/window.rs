//! This module draws the addon window as a framed block of text.
use unicode_width::UnicodeWidthStr;

const MIN_INNER_WIDTH: usize = 24;

/// A titled text frame sized to fit its content.
pub struct Window {
    title: String,
}

impl Window {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Draws `body` inside the frame.
    ///
    /// The frame grows to the widest line so nothing is cut off. Control
    /// characters are drawn as spaces.
    pub fn draw(&self, body: &str) -> String {
        let lines: Vec<String> = body.lines().map(printable).collect();
        let inner_width = lines
            .iter()
            .map(|line| line.width())
            .chain(std::iter::once(self.title.width() + 2))
            .max()
            .unwrap_or(0)
            .max(MIN_INNER_WIDTH);

        let title = format!(" {} ", self.title);
        let fill = inner_width + 2 - title.width();
        let mut output = format!("┌─{}{}┐", title, "─".repeat(fill.saturating_sub(1)));

        for line in &lines {
            let padding = inner_width - line.width();
            output.push_str(&format!("\n│ {}{} │", line, " ".repeat(padding)));
        }

        output.push_str(&format!("\n└{}┘", "─".repeat(inner_width + 2)));
        output
    }
}

fn printable(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
