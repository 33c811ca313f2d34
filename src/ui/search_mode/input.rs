use super::super::UIState;
use super::SearchMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

impl SearchMode {
    pub fn handle_key(&mut self, state: &mut UIState, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.controller.on_commit_key();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                state.safe_insert_char(c);
                self.text_changed(state);
            }
            KeyCode::Backspace => {
                if state.safe_remove_char_before() {
                    self.text_changed(state);
                }
            }
            KeyCode::Delete => {
                if state.safe_remove_char_at() {
                    self.text_changed(state);
                }
            }
            KeyCode::Left => {
                state.safe_cursor_left();
            }
            KeyCode::Right => {
                state.safe_cursor_right();
            }
            KeyCode::Home => {
                state.safe_cursor_home();
            }
            KeyCode::End => {
                state.safe_cursor_end();
            }
            KeyCode::Up => {
                self.controller.select_previous();
            }
            KeyCode::Down => {
                self.controller.select_next();
            }
            KeyCode::Tab => {
                if self.controller.selected().is_none() {
                    self.controller.select_next();
                }
                if let Some(value) = self.controller.accept_selected() {
                    state.set_input(value);
                }
            }
            KeyCode::Esc => {
                self.controller.on_suggestions_cleared();
            }
            _ => {}
        }
    }

    fn text_changed(&mut self, state: &UIState) {
        self.controller.on_text_change(state.input_buffer.clone());
        self.controller
            .on_suggestions_requested(state.candidates.as_slice());
        trace!(
            "'{}' -> {} suggestions",
            state.input_buffer,
            self.controller.suggestions().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Candidate, CandidateSnapshot};
    use crate::ui::UIAction;
    use tokio::sync::mpsc;

    fn press(mode: &mut SearchMode, state: &mut UIState, code: KeyCode) {
        mode.handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(mode: &mut SearchMode, state: &mut UIState, text: &str) {
        for c in text.chars() {
            press(mode, state, KeyCode::Char(c));
        }
    }

    fn setup() -> (SearchMode, UIState, mpsc::UnboundedReceiver<UIAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = UIState::new();
        state.candidates = CandidateSnapshot::ready(
            ["Running", "Reading", "Rowing", "Yoga"]
                .iter()
                .enumerate()
                .map(|(i, name)| Candidate::new(i.to_string(), *name, ""))
                .collect(),
        );
        (SearchMode::new(Box::new(tx)), state, rx)
    }

    #[test]
    fn typing_filters_live() {
        let (mut mode, mut state, _rx) = setup();
        type_text(&mut mode, &mut state, "r");
        assert_eq!(mode.controller().suggestions().len(), 3);

        type_text(&mut mode, &mut state, "o");
        assert_eq!(mode.controller().suggestions().len(), 1);

        press(&mut mode, &mut state, KeyCode::Backspace);
        press(&mut mode, &mut state, KeyCode::Backspace);
        assert_eq!(mode.controller().text(), "");
        assert!(mode.controller().suggestions().is_empty());
    }

    #[test]
    fn enter_commits_typed_text() {
        let (mut mode, mut state, mut rx) = setup();
        type_text(&mut mode, &mut state, "Rea");
        press(&mut mode, &mut state, KeyCode::Enter);

        assert_eq!(rx.try_recv().unwrap(), UIAction::UpdateActivity("Rea".to_string()));
        assert_eq!(state.input_buffer, "Rea");
        assert_eq!(mode.controller().suggestions().len(), 1);
    }

    #[test]
    fn tab_takes_the_selected_suggestion() {
        let (mut mode, mut state, mut rx) = setup();
        type_text(&mut mode, &mut state, "r");
        press(&mut mode, &mut state, KeyCode::Down);
        press(&mut mode, &mut state, KeyCode::Down);
        press(&mut mode, &mut state, KeyCode::Tab);

        assert_eq!(state.input_buffer, "Reading");
        assert_eq!(state.cursor_pos, 7);
        assert!(mode.controller().suggestions().is_empty());

        press(&mut mode, &mut state, KeyCode::Enter);
        assert_eq!(rx.try_recv().unwrap(), UIAction::UpdateActivity("Reading".to_string()));
    }

    #[test]
    fn tab_without_selection_takes_the_first() {
        let (mut mode, mut state, _rx) = setup();
        type_text(&mut mode, &mut state, "y");
        press(&mut mode, &mut state, KeyCode::Tab);
        assert_eq!(state.input_buffer, "Yoga");
    }

    #[test]
    fn modified_chars_are_not_typed() {
        let (mut mode, mut state, _rx) = setup();
        mode.handle_key(&mut state, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        mode.handle_key(&mut state, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(state.input_buffer, "");

        mode.handle_key(&mut state, KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert_eq!(state.input_buffer, "R");
        assert_eq!(mode.controller().suggestions().len(), 3);
    }

    #[test]
    fn escape_closes_the_dropdown() {
        let (mut mode, mut state, _rx) = setup();
        type_text(&mut mode, &mut state, "r");
        press(&mut mode, &mut state, KeyCode::Esc);
        assert!(mode.controller().suggestions().is_empty());
        assert_eq!(state.input_buffer, "r");
    }

    #[test]
    fn late_candidates_are_picked_up_on_refresh() {
        let (mut mode, mut state, _rx) = setup();
        let loaded = std::mem::take(&mut state.candidates);
        type_text(&mut mode, &mut state, "ro");
        assert!(mode.controller().suggestions().is_empty());

        state.candidates = loaded;
        mode.refresh(&state);
        assert_eq!(mode.controller().suggestions()[0].activity, "Rowing");
    }
}
