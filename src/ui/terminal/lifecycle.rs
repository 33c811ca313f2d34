use anyhow::Result;
use crossterm::{cursor, execute, terminal};
use std::io::stdout;

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn initialize_terminal(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::SetCursorStyle::BlinkingBar
        )?;

        self.state.terminal_size = terminal::size()?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> Result<()> {
        if terminal::is_raw_mode_enabled()? {
            terminal::disable_raw_mode()?;
            execute!(
                stdout(),
                cursor::SetCursorStyle::DefaultUserShape,
                cursor::Show,
                terminal::LeaveAlternateScreen
            )?;
        }
        Ok(())
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
