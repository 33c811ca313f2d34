pub mod action;
pub mod controller;
pub mod event;
pub mod runner;
pub mod search_mode;
pub mod state;
pub mod terminal;

pub use action::UIAction;
pub use controller::{ActivityDispatcher, InputController};
pub use event::UIEvent;
pub use runner::{run_tui, RunOptions};
pub use search_mode::SearchMode;
pub use state::UIState;
pub use terminal::TerminalUI;
