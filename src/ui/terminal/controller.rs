use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::ui::{SearchMode, UIAction, UIEvent, UIState};

pub struct TerminalUI {
    pub(super) state: UIState,
    pub(super) search_mode: SearchMode,
    pub(super) event_rx: mpsc::UnboundedReceiver<UIEvent>,
    pub(super) action_tx: mpsc::UnboundedSender<UIAction>,
    pub(super) running: bool,
}

impl TerminalUI {
    /// The search box commits through `action_tx`, the same channel the
    /// terminal uses for `Exit`.
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<UIEvent>,
        action_tx: mpsc::UnboundedSender<UIAction>,
    ) -> Self {
        Self {
            state: UIState::new(),
            search_mode: SearchMode::new(Box::new(action_tx.clone())),
            event_rx,
            action_tx,
            running: true,
        }
    }

    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.search_mode.set_placeholder(placeholder);
    }

    pub async fn run(&mut self) -> Result<()> {
        self.initialize_terminal()?;
        self.render()?;

        debug!("Starting terminal UI loop");

        while self.running {
            match self.event_rx.recv().await {
                Some(event) => {
                    if let Err(e) = self.handle_event(event) {
                        error!("Error handling UI event: {}", e);
                    }
                }
                None => break,
            }

            self.render()?;
        }

        debug!("Terminal UI loop finished");
        self.cleanup()
    }
}
