#![forbid(unsafe_code)]

//! What a button does when activated.

use tgrid_widgets::ButtonId;

/// Behavior bound to a button.
///
/// Every activation first logs `Selected: <label>`; the action runs after.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    /// Nothing beyond the selection log entry.
    #[default]
    Noop,
    /// Append a message to the log.
    Log(String),
    /// Switch to another page.
    SwitchPage(u8),
    /// Read one line of text, then return to the current page.
    TextEntry,
    /// Stop the program.
    Quit,
    /// Flip the visibility of another button on the same page.
    Toggle(ButtonId),
    /// Run the inner action, then hide the pressed button.
    Once(Box<Action>),
}

impl Action {
    /// Convenience for [`Action::Log`].
    pub fn log(message: impl Into<String>) -> Self {
        Self::Log(message.into())
    }

    /// Wrap `self` so the button disappears after one press.
    #[must_use]
    pub fn once(self) -> Self {
        Self::Once(Box::new(self))
    }
}
