/// Output produced by the addon for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIEvent {
    /// Command results, usage errors and other system lines.
    ChatMessage(String),
    /// The window content changed; carries the freshly rendered body.
    Refresh(String),
    /// The window became visible; carries the rendered body to draw.
    WindowShown(String),
    WindowHidden,
}
