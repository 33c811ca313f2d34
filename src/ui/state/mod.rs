mod input;

use crate::types::CandidateSnapshot;

#[derive(Debug)]
pub struct UIState {
    pub input_buffer: String,
    pub cursor_pos: usize,
    pub terminal_size: (u16, u16),
    pub candidates: CandidateSnapshot,
    pub current_activity: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            input_buffer: String::new(),
            cursor_pos: 0,
            terminal_size: (80, 24),
            candidates: CandidateSnapshot::Loading,
            current_activity: None,
        }
    }

    /// Replaces the whole buffer and parks the cursor at the end.
    pub fn set_input(&mut self, text: String) {
        self.input_buffer = text;
        self.safe_cursor_end();
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}
