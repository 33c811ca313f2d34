//! Matching logic behind the suggestion dropdown.
//!
//! Everything here works on plain in-memory data: the UI hands in the query
//! text and a candidate slice, and gets back owned results it can render.
pub mod filter;
pub mod highlight;
pub mod normalize;

pub use filter::{filter, MAX_SUGGESTIONS};
pub use highlight::highlight;
pub use normalize::normalize;
