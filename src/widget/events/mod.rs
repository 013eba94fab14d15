//! # Events
//!
//! Input events from the host and the debouncer that turns bursts of them
//! into a single search.

pub mod debounce;
pub mod types;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};
pub use types::InputEvent;
