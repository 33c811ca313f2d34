use crossterm::event::KeyEvent;

use crate::types::CandidateSnapshot;

#[derive(Debug)]
pub enum UIEvent {
    KeyPress(KeyEvent),
    Resize(u16, u16),
    CandidatesLoaded(CandidateSnapshot),
    ActivityUpdated(String),
}
