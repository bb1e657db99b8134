//! This module drives a play session: it fires lifecycle events at the addon,
//! routes input lines to it and prints what it emits.
pub mod actions;
mod console;
mod prompt;
mod slash;

use anyhow::{bail, Result};
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::addon::{Addon, ADDON_NAME};
use crate::events::{EventFrame, HostEvent, ADDON_LOADED};
use crate::types::SavedVariables;
use crate::ui::UIEvent;

use actions::{handle_ui_action, SessionControl};
use console::Console;
use prompt::{LineSource, Prompt};
use slash::route_input;

/// A single login-to-logout run of the addon.
pub struct Session {
    addon: Addon,
    frame: EventFrame<Addon>,
    ui_receiver: mpsc::UnboundedReceiver<UIEvent>,
    console: Console,
}

impl Session {
    /// Creates a session around the record the host loaded.
    pub fn new(saved: Option<SavedVariables>) -> Self {
        let (ui_sender, ui_receiver) = mpsc::unbounded_channel::<UIEvent>();
        let mut frame = EventFrame::new();
        Addon::register_events(&mut frame);

        Self {
            addon: Addon::new(saved, ui_sender),
            frame,
            ui_receiver,
            console: Console::new(),
        }
    }

    /// Fires `event` at the addon and prints its output.
    pub fn fire(&mut self, event: HostEvent) -> Result<()> {
        self.frame.fire(&mut self.addon, &event)?;
        self.flush();
        Ok(())
    }

    /// Loads the addon and logs the player in.
    ///
    /// # Errors
    ///
    /// Returns an error if the addon does not finish loading.
    pub fn login(&mut self) -> Result<()> {
        if !self.frame.is_registered(ADDON_LOADED) {
            bail!("{} has no {} handler", ADDON_NAME, ADDON_LOADED);
        }
        self.fire(HostEvent::AddonLoaded(ADDON_NAME.to_string()))?;
        if !self.addon.is_loaded() {
            bail!("{} did not load", ADDON_NAME);
        }
        self.frame.unregister(ADDON_LOADED);

        self.fire(HostEvent::PlayerLogin)
    }

    /// Logs the player out.
    ///
    /// # Returns
    ///
    /// The record to persist, if the addon has one.
    pub fn logout(&mut self) -> Result<Option<SavedVariables>> {
        self.fire(HostEvent::PlayerLogout)?;
        Ok(self.addon.saved_variables().cloned())
    }

    /// Handles one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Result<SessionControl> {
        let control = handle_ui_action(route_input(line), &mut self.addon)?;
        self.flush();
        Ok(control)
    }

    /// Reads prompt lines until the user logs out or closes the input.
    ///
    /// This blocks on terminal input and is meant to run on a blocking thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up. Failures while
    /// reading end the session instead, so its state can still be saved.
    pub fn run_prompt(mut self) -> Result<Self> {
        let mut prompt = Prompt::new()?;
        info!("Prompt started");
        self.read_lines(&mut prompt);
        Ok(self)
    }

    /// Handles lines from `source` until logout, end of input or a read
    /// failure.
    pub fn read_lines<S: LineSource>(&mut self, source: &mut S) {
        loop {
            let line = match source.read_line() {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    debug!("Input closed, logging out");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read input, logging out: {}", e);
                    break;
                }
            };

            match self.handle_line(&line) {
                Ok(SessionControl::Continue) => {}
                Ok(SessionControl::Logout) => break,
                Err(e) => {
                    warn!("Failed to handle input, logging out: {}", e);
                    break;
                }
            }
        }
    }

    pub fn addon(&self) -> &Addon {
        &self.addon
    }

    fn flush(&mut self) {
        self.console.print_pending(&mut self.ui_receiver);
    }
}
