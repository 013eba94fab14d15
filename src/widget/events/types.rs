//! Input event types
//!
//! Events the host delivers for the search box. Each edit is one
//! "input changed" event for the controller.

/// An input event on the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Append a character to the search value
    Insert(char),
    /// Remove the last character
    Backspace,
    /// Empty the search box
    Clear,
    /// Replace the whole value (paste, scripted input)
    Replace(String),
    /// Leave the application
    Quit,
}

impl InputEvent {
    /// Apply this edit to a search value
    ///
    /// Returns `false` for events that do not edit the value.
    pub fn apply_to(&self, value: &mut String) -> bool {
        match self {
            InputEvent::Insert(ch) => value.push(*ch),
            InputEvent::Backspace => {
                value.pop();
            }
            InputEvent::Clear => value.clear(),
            InputEvent::Replace(text) => *value = text.clone(),
            InputEvent::Quit => return false,
        }
        true
    }
}
