//! This module defines the terminal front end: event loop, layout and lifecycle.
mod controller;
mod events;
mod lifecycle;
mod render;

pub use controller::TerminalUI;
