//! This module contains the host event table addons register handlers with.
//!
//! The host fires events by name and the frame calls whatever handler is
//! registered for that name, synchronously and in the caller's context.
use anyhow::Result;
use std::collections::HashMap;
use tracing::debug;

pub const ADDON_LOADED: &str = "ADDON_LOADED";
pub const PLAYER_LOGIN: &str = "PLAYER_LOGIN";
pub const PLAYER_LOGOUT: &str = "PLAYER_LOGOUT";

/// Events fired by the host during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// An addon finished loading. Carries the addon name.
    AddonLoaded(String),
    PlayerLogin,
    /// Fired right before saved variables are written.
    PlayerLogout,
}

impl HostEvent {
    /// Returns the host name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::AddonLoaded(_) => ADDON_LOADED,
            HostEvent::PlayerLogin => PLAYER_LOGIN,
            HostEvent::PlayerLogout => PLAYER_LOGOUT,
        }
    }
}

pub type EventHandler<T> = fn(&mut T, &HostEvent) -> Result<()>;

/// A table from event name to the handler registered for it.
pub struct EventFrame<T> {
    handlers: HashMap<&'static str, EventHandler<T>>,
}

impl<T> Default for EventFrame<T> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<T> EventFrame<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `event`, replacing any previous handler.
    pub fn register(&mut self, event: &'static str, handler: EventHandler<T>) {
        self.handlers.insert(event, handler);
    }

    pub fn unregister(&mut self, event: &str) {
        self.handlers.remove(event);
    }

    pub fn is_registered(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    /// Fires `event` at `target`.
    ///
    /// # Returns
    ///
    /// `true` if a handler was registered for the event and ran.
    ///
    /// # Errors
    ///
    /// Returns the handler's error, if any.
    pub fn fire(&self, target: &mut T, event: &HostEvent) -> Result<bool> {
        let Some(handler) = self.handlers.get(event.name()) else {
            debug!("No handler registered for {}", event.name());
            return Ok(false);
        };

        debug!("Dispatching {:?}", event);
        handler(target, event)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
    }

    fn record(target: &mut Recorder, event: &HostEvent) -> Result<()> {
        target.seen.push(event.name().to_string());
        Ok(())
    }

    fn fail(_: &mut Recorder, _: &HostEvent) -> Result<()> {
        anyhow::bail!("handler failed")
    }

    #[test]
    fn fires_registered_handler() {
        let mut frame = EventFrame::new();
        frame.register(PLAYER_LOGIN, record);

        let mut recorder = Recorder::default();
        assert!(frame.fire(&mut recorder, &HostEvent::PlayerLogin).unwrap());
        assert_eq!(recorder.seen, [PLAYER_LOGIN]);
    }

    #[test]
    fn ignores_unregistered_events() {
        let mut frame = EventFrame::new();
        frame.register(PLAYER_LOGIN, record);

        let mut recorder = Recorder::default();
        assert!(!frame.fire(&mut recorder, &HostEvent::PlayerLogout).unwrap());
        assert!(recorder.seen.is_empty());
    }

    #[test]
    fn unregister_removes_handler() {
        let mut frame = EventFrame::new();
        frame.register(ADDON_LOADED, record);
        frame.unregister(ADDON_LOADED);

        assert!(!frame.is_registered(ADDON_LOADED));
        let mut recorder = Recorder::default();
        let event = HostEvent::AddonLoaded("HelloWorld".to_string());
        assert!(!frame.fire(&mut recorder, &event).unwrap());
    }

    #[test]
    fn handler_errors_propagate() {
        let mut frame = EventFrame::new();
        frame.register(PLAYER_LOGOUT, fail);

        let mut recorder = Recorder::default();
        assert!(frame.fire(&mut recorder, &HostEvent::PlayerLogout).is_err());
    }
}
