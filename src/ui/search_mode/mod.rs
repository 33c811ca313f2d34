//! This module defines the search box: key handling and the suggestion dropdown.
use super::controller::{ActivityDispatcher, InputController};
use super::UIState;

mod input;
mod render;

pub(crate) use render::truncate_to_width;

pub const PLACEHOLDER: &str = "Insert your activity here!";

/// Wraps the [`InputController`] and drives it from terminal input.
pub struct SearchMode {
    controller: InputController,
    placeholder: String,
}

impl SearchMode {
    pub fn new(dispatcher: Box<dyn ActivityDispatcher>) -> Self {
        Self {
            controller: InputController::new(dispatcher),
            placeholder: PLACEHOLDER.to_string(),
        }
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    /// Recomputes suggestions against the latest candidate snapshot, e.g.
    /// after the list finished loading while the user was already typing.
    pub fn refresh(&mut self, state: &UIState) {
        if !self.controller.text().is_empty() {
            self.controller
                .on_suggestions_requested(state.candidates.as_slice());
        }
    }
}
