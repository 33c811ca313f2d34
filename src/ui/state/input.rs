use super::UIState;

impl UIState {
    fn byte_pos(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map(|(pos, _)| pos)
            .unwrap_or(self.input_buffer.len())
    }

    pub fn safe_insert_char(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.input_buffer.insert(byte_pos, c);
        self.cursor_pos += 1;
    }

    pub fn safe_remove_char_before(&mut self) -> bool {
        if self.cursor_pos == 0 || self.cursor_pos > self.input_buffer.chars().count() {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_pos - 1);
        self.input_buffer.remove(byte_pos);
        self.cursor_pos -= 1;
        true
    }

    pub fn safe_remove_char_at(&mut self) -> bool {
        if self.cursor_pos >= self.input_buffer.chars().count() {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.input_buffer.remove(byte_pos);
        true
    }

    pub fn safe_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    pub fn safe_cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        if self.cursor_pos < char_count {
            self.cursor_pos += 1;
        }
    }

    pub fn safe_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn safe_cursor_end(&mut self) {
        self.cursor_pos = self.input_buffer.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_is_char_based() {
        let mut state = UIState::new();
        for c in "Écrire".chars() {
            state.safe_insert_char(c);
        }
        assert_eq!(state.cursor_pos, 6);

        state.safe_cursor_home();
        state.safe_cursor_right();
        state.safe_insert_char('x');
        assert_eq!(state.input_buffer, "Éxcrire");

        assert!(state.safe_remove_char_before());
        assert!(state.safe_remove_char_before());
        assert!(!state.safe_remove_char_before());
        assert_eq!(state.input_buffer, "crire");

        assert!(state.safe_remove_char_at());
        assert_eq!(state.input_buffer, "rire");

        state.safe_cursor_end();
        assert!(!state.safe_remove_char_at());
        state.safe_cursor_right();
        assert_eq!(state.cursor_pos, 4);
    }

    #[test]
    fn set_input_moves_cursor_to_end() {
        let mut state = UIState::new();
        state.set_input("Rowing".to_string());
        assert_eq!(state.cursor_pos, 6);
        state.safe_cursor_left();
        state.safe_insert_char('!');
        assert_eq!(state.input_buffer, "Rowin!g");
    }
}
