//! Autosuggest search over playlist activities.
//!
//! The matching core lives in [`search`]; [`ui`] wraps it in a terminal
//! search box whose committed value lands in the [`store`].
pub mod app;
pub mod logging;
pub mod provider;
pub mod search;
pub mod store;
pub mod types;
pub mod ui;
