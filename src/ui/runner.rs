use super::{TerminalUI, UIAction, UIEvent};
use crate::provider::{load_snapshot, PlaylistSource};
use crate::store::ActivityStore;
use crate::types::CandidateSnapshot;
use anyhow::Result;
use crossterm::event::{self, Event};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct RunOptions {
    pub placeholder: String,
}

pub async fn run_tui(
    source: Option<Arc<dyn PlaylistSource>>,
    store: ActivityStore,
    options: RunOptions,
) -> Result<()> {
    info!("Starting activity search TUI");

    let (ui_event_tx, ui_event_rx) = mpsc::unbounded_channel::<UIEvent>();
    let (ui_action_tx, mut ui_action_rx) = mpsc::unbounded_channel::<UIAction>();

    let mut terminal_ui = TerminalUI::new(ui_event_rx, ui_action_tx);
    terminal_ui.set_placeholder(&options.placeholder);

    // Terminal input
    let ui_event_tx_keys = ui_event_tx.clone();
    tokio::spawn(async move {
        loop {
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(Event::Key(key_event)) => ui_event_tx_keys.send(UIEvent::KeyPress(key_event)),
                    Ok(Event::Resize(width, height)) => {
                        ui_event_tx_keys.send(UIEvent::Resize(width, height))
                    }
                    _ => Ok(()),
                };
                if let Err(e) = forwarded {
                    debug!("Stopping terminal reader: {}", e);
                    break;
                }
            } else if ui_event_tx_keys.is_closed() {
                break;
            }
        }
    });

    // Candidate list
    let ui_event_tx_candidates = ui_event_tx.clone();
    tokio::spawn(async move {
        let snapshot = match source {
            Some(source) => load_snapshot(source.as_ref()).await,
            None => CandidateSnapshot::Unavailable("no playlists file configured".to_string()),
        };
        let _ = ui_event_tx_candidates.send(UIEvent::CandidatesLoaded(snapshot));
    });

    // Actions from the search box
    let ui_event_tx_actions = ui_event_tx.clone();
    let action_handler = tokio::spawn(async move {
        process_actions(&mut ui_action_rx, &store, &ui_event_tx_actions).await;
    });

    drop(ui_event_tx);
    let result = terminal_ui.run().await;

    // Closes the action channel, so the handler finishes even without `Exit`.
    drop(terminal_ui);
    if let Err(e) = action_handler.await {
        debug!("Action handler stopped abnormally: {}", e);
    }

    result
}

/// Applies actions until `Exit` arrives or every sender is gone.
pub(crate) async fn process_actions(
    ui_action_rx: &mut mpsc::UnboundedReceiver<UIAction>,
    store: &ActivityStore,
    ui_sender: &mpsc::UnboundedSender<UIEvent>,
) {
    while let Some(action) = ui_action_rx.recv().await {
        if !handle_ui_action(action, store, ui_sender) {
            break;
        }
    }
}

/// Applies one action. Returns `false` once the UI asked to exit.
pub(crate) fn handle_ui_action(
    action: UIAction,
    store: &ActivityStore,
    ui_sender: &mpsc::UnboundedSender<UIEvent>,
) -> bool {
    match action {
        UIAction::UpdateActivity(activity) => {
            store.update_activity(activity.clone());
            let _ = ui_sender.send(UIEvent::ActivityUpdated(activity));
            true
        }
        UIAction::Exit => {
            debug!("Exit requested");
            false
        }
    }
}
