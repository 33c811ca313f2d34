//! This module contains the rendering logic for the search box and its dropdown.
use super::super::UIState;
use super::SearchMode;
use crate::search::highlight;
use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;
use unicode_width::UnicodeWidthChar;

pub(crate) const PROMPT: &str = "🔍 ";

impl SearchMode {
    /// Draws the input line at `row` and the dropdown right below it.
    ///
    /// Returns the terminal column where the cursor belongs.
    pub fn render(
        &self,
        stdout: &mut impl Write,
        state: &UIState,
        row: u16,
        width: u16,
        max_rows: u16,
    ) -> Result<u16> {
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::Cyan),
            Print(PROMPT),
            ResetColor
        )?;

        if state.input_buffer.is_empty() {
            queue!(
                stdout,
                SetForegroundColor(Color::DarkGrey),
                Print(&self.placeholder),
                ResetColor
            )?;
        } else {
            queue!(stdout, Print(&state.input_buffer))?;
        }

        let prompt_width = display_width(PROMPT.chars());
        let input_width = display_width(state.input_buffer.chars().take(state.cursor_pos));
        let cursor_x = (prompt_width + input_width).min(width.saturating_sub(1) as usize) as u16;

        self.render_suggestions(stdout, row + 1, width, max_rows)?;

        Ok(cursor_x)
    }

    fn render_suggestions(
        &self,
        stdout: &mut impl Write,
        first_row: u16,
        width: u16,
        max_rows: u16,
    ) -> Result<()> {
        let query = self.controller.text();
        let selected = self.controller.selected();

        for (index, suggestion) in self
            .controller
            .suggestions()
            .iter()
            .take(max_rows as usize)
            .enumerate()
        {
            queue!(stdout, cursor::MoveTo(0, first_row + index as u16))?;
            if selected == Some(index) {
                queue!(stdout, SetAttribute(Attribute::Reverse))?;
            }

            let mut remaining = (width as usize).saturating_sub(2);
            queue!(stdout, Print("  "))?;
            for span in highlight(&suggestion.activity, query) {
                if remaining == 0 {
                    break;
                }
                let (text, used) = truncate_to_width(&span.text, remaining);
                remaining -= used;
                if span.highlighted {
                    queue!(
                        stdout,
                        SetAttribute(Attribute::Bold),
                        Print(text),
                        SetAttribute(Attribute::NormalIntensity)
                    )?;
                } else {
                    queue!(stdout, Print(text))?;
                }
            }

            if remaining > 0 {
                queue!(stdout, Print(" ".repeat(remaining)))?;
            }
            queue!(stdout, SetAttribute(Attribute::Reset))?;
        }

        Ok(())
    }
}

fn display_width(chars: impl Iterator<Item = char>) -> usize {
    chars.map(|c| UnicodeWidthChar::width(c).unwrap_or(0)).sum()
}

/// Longest prefix of `text` that fits in `max` columns, plus its width.
pub(crate) fn truncate_to_width(text: &str, max: usize) -> (&str, usize) {
    let mut used = 0;
    for (pos, c) in text.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max {
            return (&text[..pos], used);
        }
        used += w;
    }
    (text, used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Candidate, CandidateSnapshot};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;

    #[test]
    fn truncation_respects_wide_chars() {
        assert_eq!(truncate_to_width("Running", 3), ("Run", 3));
        assert_eq!(truncate_to_width("日本語", 5), ("日本", 4));
        assert_eq!(truncate_to_width("ok", 10), ("ok", 2));
    }

    #[test]
    fn placeholder_shows_when_empty() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut mode = SearchMode::new(Box::new(tx));
        mode.set_placeholder("Pick one");
        let state = UIState::new();

        let mut out = Vec::new();
        let cursor_x = mode.render(&mut out, &state, 2, 40, 5).unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("Pick one"));
        assert_eq!(cursor_x as usize, display_width(PROMPT.chars()));
    }

    #[test]
    fn dropdown_lists_suggestions() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut mode = SearchMode::new(Box::new(tx));
        let mut state = UIState::new();
        state.candidates = CandidateSnapshot::ready(vec![
            Candidate::new("1", "Running", ""),
            Candidate::new("2", "Rowing", ""),
        ]);
        mode.handle_key(&mut state, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));

        let mut out = Vec::new();
        mode.render(&mut out, &state, 2, 40, 5).unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("unning"));
        assert!(rendered.contains("owing"));
        assert!(!rendered.contains(super::super::PLACEHOLDER));
    }
}
