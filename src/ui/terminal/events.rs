use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::ui::{UIAction, UIEvent};

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn handle_event(&mut self, event: UIEvent) -> Result<()> {
        match event {
            UIEvent::KeyPress(key_event) => {
                self.handle_key_event(key_event);
            }
            UIEvent::Resize(width, height) => {
                self.state.terminal_size = (width, height);
            }
            UIEvent::CandidatesLoaded(snapshot) => {
                info!("Candidate list now: {}", snapshot.describe());
                self.state.candidates = snapshot;
                self.search_mode.refresh(&self.state);
            }
            UIEvent::ActivityUpdated(activity) => {
                self.state.current_activity = Some(activity);
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            let _ = self.action_tx.send(UIAction::Exit);
            self.running = false;
            return;
        }

        self.search_mode.handle_key(&mut self.state, key);
    }
}
