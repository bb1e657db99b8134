//! Terminal presentation for the addon: input routing, the prompt, output
//! printing and the window frame.
pub mod action;
pub mod completers;
pub mod event;
pub mod runner;
pub mod window;

pub use action::UIAction;
pub use completers::CommandCompleter;
pub use event::UIEvent;
pub use runner::Session;
pub use window::Window;
