use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{stdout, Write};
use crate::types::CandidateSnapshot;
use crate::ui::search_mode::truncate_to_width;

use super::TerminalUI;

const INPUT_ROW: u16 = 2;

impl TerminalUI {
    pub(super) fn render(&mut self) -> Result<()> {
        let mut stdout = stdout();
        self.draw(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    pub(super) fn draw(&self, stdout: &mut impl Write) -> Result<()> {
        queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (width, height) = self.state.terminal_size;
        self.render_status_line(stdout, 0, width)?;

        let dropdown_rows = height.saturating_sub(INPUT_ROW + 3);
        let cursor_x = self
            .search_mode
            .render(stdout, &self.state, INPUT_ROW, width, dropdown_rows)?;

        if height > INPUT_ROW + 2 {
            self.render_help_line(stdout, height - 1)?;
        }

        queue!(stdout, cursor::MoveTo(cursor_x, INPUT_ROW), cursor::Show)?;
        Ok(())
    }

    fn render_status_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetBackgroundColor(Color::DarkGrey),
            SetForegroundColor(Color::White)
        )?;

        let activity = self
            .state
            .current_activity
            .as_deref()
            .unwrap_or("none");
        let status_text = format!(
            " Activity: {} | {}",
            activity,
            self.state.candidates.describe()
        );

        queue!(
            stdout,
            Print(fit_to_width(&status_text, width as usize)),
            ResetColor
        )?;
        Ok(())
    }

    fn render_help_line(&self, stdout: &mut impl Write, row: u16) -> Result<()> {
        let color = match self.state.candidates {
            CandidateSnapshot::Unavailable(_) => Color::Yellow,
            _ => Color::DarkGrey,
        };
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(color),
            Print(" Enter: set activity | ↑↓: select | Tab: complete | Esc: close | Ctrl+C: exit"),
            ResetColor
        )?;
        Ok(())
    }
}

/// Cuts `text` to `width` columns and pads the rest with spaces.
fn fit_to_width(text: &str, width: usize) -> String {
    let (visible, used) = truncate_to_width(text, width);
    format!("{}{}", visible, " ".repeat(width - used))
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn status_text_fits_by_display_width() {
        let fitted = fit_to_width(" Activity: 日本語の練習", 14);
        assert_eq!(UnicodeWidthStr::width(fitted.as_str()), 14);
        assert_eq!(fitted, " Activity: 日 ");

        assert_eq!(fit_to_width("ok", 4), "ok  ");
        assert_eq!(fit_to_width("anything", 0), "");
    }
    use crate::ui::UIEvent;
    use tokio::sync::mpsc;

    #[test]
    fn status_line_shows_activity_and_candidate_state() {
        let (_event_tx, event_rx) = mpsc::unbounded_channel();
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let mut ui = TerminalUI::new(event_rx, action_tx);

        let mut out = Vec::new();
        ui.draw(&mut out).unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("Activity: none"));
        assert!(rendered.contains("loading activities"));

        ui.handle_event(UIEvent::CandidatesLoaded(CandidateSnapshot::Unavailable(
            "offline".to_string(),
        )))
        .unwrap();
        ui.handle_event(UIEvent::ActivityUpdated("Yoga".to_string()))
            .unwrap();

        let mut out = Vec::new();
        ui.draw(&mut out).unwrap();
        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("Activity: Yoga"));
        assert!(rendered.contains("activities unavailable: offline"));
    }
}
