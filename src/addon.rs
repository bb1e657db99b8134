//! The HelloWorld addon: its state, its lifecycle event handlers and its
//! slash command entry point.
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::events::{EventFrame, HostEvent, ADDON_LOADED, PLAYER_LOGIN, PLAYER_LOGOUT};
use crate::notes::{MessageLog, Visibility};
use crate::types::SavedVariables;
use crate::ui::runner::actions::{execute_command_line, CommandContext};
use crate::ui::UIEvent;

pub const ADDON_NAME: &str = "HelloWorld";

/// Default name of the saved-variables record.
pub const SAVED_VARIABLES: &str = "HelloWorldDB";

/// Everything the slash commands operate on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonState {
    pub messages: MessageLog,
    pub window: Visibility,
}

impl AddonState {
    /// Creates state around an existing log with the window hidden.
    pub fn new(messages: MessageLog) -> Self {
        Self {
            messages,
            window: Visibility::Hidden,
        }
    }

    /// Builds state from the persisted record, using defaults on a first run.
    pub fn from_saved(saved: Option<SavedVariables>) -> Self {
        let saved = saved.unwrap_or_default();
        Self::new(MessageLog::from(saved.messages))
    }

    pub fn to_saved(&self) -> SavedVariables {
        SavedVariables {
            messages: self.messages.messages().to_vec(),
        }
    }
}

pub struct Addon {
    /// The saved-variables record as handed over by the host. Read on load,
    /// written back on logout.
    saved: Option<SavedVariables>,
    state: AddonState,
    loaded: bool,
    ui_sender: mpsc::UnboundedSender<UIEvent>,
}

impl Addon {
    /// Creates the addon with the record the host loaded for it.
    ///
    /// The record is not applied until `ADDON_LOADED` fires for this addon.
    pub fn new(saved: Option<SavedVariables>, ui_sender: mpsc::UnboundedSender<UIEvent>) -> Self {
        Self {
            saved,
            state: AddonState::default(),
            loaded: false,
            ui_sender,
        }
    }

    /// Registers the addon's lifecycle handlers with the host event frame.
    pub fn register_events(frame: &mut EventFrame<Addon>) {
        frame.register(ADDON_LOADED, Self::on_addon_loaded);
        frame.register(PLAYER_LOGIN, Self::on_player_login);
        frame.register(PLAYER_LOGOUT, Self::on_player_logout);
    }

    fn on_addon_loaded(addon: &mut Addon, event: &HostEvent) -> Result<()> {
        let HostEvent::AddonLoaded(name) = event else {
            return Ok(());
        };
        if name != ADDON_NAME || addon.loaded {
            return Ok(());
        }

        addon.state = AddonState::from_saved(addon.saved.take());
        addon.loaded = true;
        info!(
            "{} loaded with {} saved messages",
            ADDON_NAME,
            addon.state.messages.count()
        );
        Ok(())
    }

    fn on_player_login(addon: &mut Addon, _event: &HostEvent) -> Result<()> {
        let count = addon.state.messages.count();
        addon.context().emit_chat(format!(
            "{} loaded with {} messages. Type /hw help for commands.",
            ADDON_NAME, count
        ));
        Ok(())
    }

    fn on_player_logout(addon: &mut Addon, _event: &HostEvent) -> Result<()> {
        if !addon.loaded {
            debug!("Logout before {} loaded, keeping host record", ADDON_NAME);
            return Ok(());
        }

        addon.saved = Some(addon.state.to_saved());
        Ok(())
    }

    /// Runs one `/hw` command line against the addon state.
    ///
    /// # Arguments
    ///
    /// * `line` - The text after the slash command word.
    pub fn handle_slash(&mut self, line: &str) -> Result<()> {
        execute_command_line(line, &mut self.context())
    }

    /// Returns a command context over the addon state and output channel.
    pub fn context(&mut self) -> CommandContext<'_> {
        CommandContext::new(&mut self.state, &self.ui_sender)
    }

    pub fn state(&self) -> &AddonState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns the record the host should persist.
    pub fn saved_variables(&self) -> Option<&SavedVariables> {
        self.saved.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(messages: &[&str]) -> SavedVariables {
        SavedVariables {
            messages: messages.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn loaded_addon(
        record: Option<SavedVariables>,
    ) -> (Addon, EventFrame<Addon>, mpsc::UnboundedReceiver<UIEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut frame = EventFrame::new();
        Addon::register_events(&mut frame);

        let mut addon = Addon::new(record, sender);
        frame
            .fire(&mut addon, &HostEvent::AddonLoaded(ADDON_NAME.to_string()))
            .unwrap();
        (addon, frame, receiver)
    }

    #[test]
    fn first_run_starts_empty_and_hidden() {
        let (addon, _frame, _rx) = loaded_addon(None);
        assert!(addon.is_loaded());
        assert!(addon.state().messages.is_empty());
        assert!(!addon.state().window.is_shown());
    }

    #[test]
    fn loads_messages_from_record() {
        let (addon, _frame, _rx) = loaded_addon(Some(saved(&["a", "b"])));
        assert_eq!(addon.state().messages.messages(), ["a", "b"]);
    }

    #[test]
    fn ignores_other_addons_loading() {
        let (sender, _rx) = mpsc::unbounded_channel();
        let mut frame = EventFrame::new();
        Addon::register_events(&mut frame);

        let mut addon = Addon::new(Some(saved(&["a"])), sender);
        frame
            .fire(&mut addon, &HostEvent::AddonLoaded("OtherAddon".to_string()))
            .unwrap();

        assert!(!addon.is_loaded());
        assert!(addon.state().messages.is_empty());
        assert_eq!(addon.saved_variables(), Some(&saved(&["a"])));
    }

    #[test]
    fn second_load_event_does_not_reset_state() {
        let (mut addon, frame, _rx) = loaded_addon(Some(saved(&["a"])));
        addon.handle_slash("write b").unwrap();

        frame
            .fire(&mut addon, &HostEvent::AddonLoaded(ADDON_NAME.to_string()))
            .unwrap();
        assert_eq!(addon.state().messages.messages(), ["a", "b"]);
    }

    #[test]
    fn login_announces_message_count() {
        let (mut addon, frame, mut rx) = loaded_addon(Some(saved(&["a", "b"])));
        frame.fire(&mut addon, &HostEvent::PlayerLogin).unwrap();

        match rx.try_recv().unwrap() {
            UIEvent::ChatMessage(text) => assert!(text.contains("loaded with 2 messages")),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn logout_writes_state_back_to_record() {
        let (mut addon, frame, _rx) = loaded_addon(Some(saved(&["a"])));
        addon.handle_slash("write b").unwrap();
        addon.handle_slash("open").unwrap();

        frame.fire(&mut addon, &HostEvent::PlayerLogout).unwrap();
        assert_eq!(addon.saved_variables(), Some(&saved(&["a", "b"])));
    }

    #[test]
    fn logout_after_clear_saves_empty_record() {
        let (mut addon, frame, _rx) = loaded_addon(Some(saved(&["a"])));
        addon.handle_slash("clear").unwrap();

        frame.fire(&mut addon, &HostEvent::PlayerLogout).unwrap();
        assert_eq!(addon.saved_variables(), Some(&SavedVariables::default()));
    }
}
