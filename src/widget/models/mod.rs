//! # Models Module
//!
//! Plain data the widget works with: country records from the API, the
//! trimmed search query and the current display state.

pub mod country;
pub mod display_state;

pub use country::{Country, Flags, Language};
pub use display_state::{DisplayState, NoticeKind, SearchQuery};
