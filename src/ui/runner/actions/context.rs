//! This module defines the `CommandContext`, which gives command handlers
//! access to the addon state and the output channel.
use tokio::sync::mpsc;

use crate::addon::AddonState;
use crate::notes::{render_messages, Visibility};
use crate::ui::UIEvent;

/// Provides state access and output helpers to command handlers.
///
/// The context borrows the addon state for the duration of one command, so
/// handlers never reach for global state.
pub struct CommandContext<'a> {
    /// The state the command operates on.
    state: &'a mut AddonState,
    /// The sender for dispatching `UIEvent`s to the host.
    ui_sender: &'a mpsc::UnboundedSender<UIEvent>,
}

impl<'a> CommandContext<'a> {
    /// Creates a new `CommandContext`.
    ///
    /// # Arguments
    ///
    /// * `state` - The addon state to operate on.
    /// * `ui_sender` - An `mpsc::UnboundedSender` for `UIEvent`s.
    pub fn new(state: &'a mut AddonState, ui_sender: &'a mpsc::UnboundedSender<UIEvent>) -> Self {
        Self { state, ui_sender }
    }

    pub fn state(&self) -> &AddonState {
        &*self.state
    }

    pub fn state_mut(&mut self) -> &mut AddonState {
        &mut *self.state
    }

    /// Emits a generic `UIEvent` to the host.
    pub fn emit(&self, event: UIEvent) {
        let _ = self.ui_sender.send(event);
    }

    /// Emits a chat line such as a confirmation or usage hint.
    pub fn emit_chat<S: Into<String>>(&self, message: S) {
        self.emit(UIEvent::ChatMessage(message.into()));
    }

    /// Re-renders the window content from the current message log.
    pub fn refresh(&self) {
        self.emit(UIEvent::Refresh(render_messages(&self.state.messages)));
    }

    pub fn show_window(&mut self) {
        self.state.window.show();
        self.emit(UIEvent::WindowShown(render_messages(&self.state.messages)));
    }

    pub fn hide_window(&mut self) {
        self.state.window.hide();
        self.emit(UIEvent::WindowHidden);
    }

    /// Flips the window between shown and hidden.
    pub fn toggle_window(&mut self) {
        match self.state.window.toggle() {
            Visibility::Shown => {
                self.emit(UIEvent::WindowShown(render_messages(&self.state.messages)))
            }
            Visibility::Hidden => self.emit(UIEvent::WindowHidden),
        }
    }
}
