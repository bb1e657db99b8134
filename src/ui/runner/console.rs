//! This module turns addon output events into terminal text.
use colored::Colorize;
use tokio::sync::mpsc;

use crate::addon::ADDON_NAME;
use crate::ui::{UIEvent, Window};

/// Prints addon output and keeps track of whether the window is drawn.
pub struct Console {
    window: Window,
    shown: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            window: Window::new(ADDON_NAME),
            shown: false,
        }
    }

    /// Formats one event, or returns `None` when it produces no output.
    ///
    /// Refreshes only draw while the window is shown.
    pub fn format_event(&mut self, event: UIEvent) -> Option<String> {
        match event {
            UIEvent::ChatMessage(text) => Some(format!("{} {}", prefix(), text)),
            UIEvent::WindowShown(body) => {
                self.shown = true;
                Some(self.window.draw(&body))
            }
            UIEvent::Refresh(body) if self.shown => Some(self.window.draw(&body)),
            UIEvent::Refresh(_) => None,
            UIEvent::WindowHidden => {
                self.shown = false;
                None
            }
        }
    }

    /// Prints every event currently waiting on the channel.
    pub fn print_pending(&mut self, receiver: &mut mpsc::UnboundedReceiver<UIEvent>) {
        while let Ok(event) = receiver.try_recv() {
            if let Some(output) = self.format_event(event) {
                println!("{}", output);
            }
        }
    }
}

fn prefix() -> String {
    format!("{}:", ADDON_NAME).bright_green().to_string()
}
