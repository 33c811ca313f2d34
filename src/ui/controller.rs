//! The state machine behind the search box.
use tokio::sync::mpsc;
use tracing::debug;

use crate::search;
use crate::types::Candidate;

use super::UIAction;

/// Receives the committed activity text.
pub trait ActivityDispatcher: Send {
    fn update_activity(&self, activity: String);
}

impl ActivityDispatcher for mpsc::UnboundedSender<UIAction> {
    fn update_activity(&self, activity: String) {
        if let Err(e) = self.send(UIAction::UpdateActivity(activity)) {
            debug!("Dropping committed activity, receiver closed: {}", e);
        }
    }
}

/// Owns the query text and the current suggestion list.
///
/// Text changes and suggestion recomputation are separate steps: the caller
/// decides when to request suggestions, and passes the candidate list it has
/// at that moment.
pub struct InputController {
    text: String,
    suggestions: Vec<Candidate>,
    selected: Option<usize>,
    dispatcher: Box<dyn ActivityDispatcher>,
}

impl InputController {
    pub fn new(dispatcher: Box<dyn ActivityDispatcher>) -> Self {
        Self {
            text: String::new(),
            suggestions: Vec::new(),
            selected: None,
            dispatcher,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn on_text_change(&mut self, new_text: String) {
        self.text = new_text;
    }

    pub fn on_suggestions_requested(&mut self, candidates: &[Candidate]) {
        self.suggestions = search::filter(&self.text, candidates);
        self.selected = None;
    }

    pub fn on_suggestions_cleared(&mut self) {
        self.suggestions.clear();
        self.selected = None;
    }

    /// Forwards the current text as-is. Text and suggestions are kept, so
    /// the same value can be committed again.
    pub fn on_commit_key(&mut self) {
        debug!("Committing activity '{}'", self.text);
        self.dispatcher.update_activity(self.text.clone());
    }

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(i) if i + 1 >= self.suggestions.len() => None,
            Some(i) => Some(i + 1),
        };
    }

    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(self.suggestions.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Replaces the text with the selected suggestion's activity and closes
    /// the dropdown. Returns the new text, or `None` if nothing is selected.
    pub fn accept_selected(&mut self) -> Option<String> {
        let index = self.selected?;
        let value = self.suggestions.get(index)?.activity.clone();
        self.text = value.clone();
        self.on_suggestions_cleared();
        Some(value)
    }
}
