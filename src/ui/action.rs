//! This module defines the actions the UI sends to the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIAction {
    /// Makes the given text the current activity.
    UpdateActivity(String),
    /// Exits the application.
    Exit,
}
