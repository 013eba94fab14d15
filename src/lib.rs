//! # countryline - Country Lookup Widget
//!
//! Type a country name, get the matching countries from the REST Countries
//! API. One match shows a detail panel, two to ten show a list of names, and
//! anything broader asks for a more specific query.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  InputEvent  ┌───────────────┐  fired   ┌───────────┐
//! │ EventStream │─────────────▶│ AppController │◀─────────│ Debouncer │
//! └─────────────┘              └───────┬───────┘          └───────────┘
//!                                      │ ticket / outcome
//!                                      ▼
//!                              ┌──────────────────┐  search   ┌────────────────┐
//!                              │ SearchController │──────────▶│ CountrySource  │
//!                              └──┬────────────┬──┘           └────────────────┘
//!                    markup       │            │  Notice
//!                                 ▼            ▼
//!                              ┌──────┐   ┌──────────┐
//!                              │ Page │   │ Notifier │
//!                              └──────┘   └──────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod widget;

// Re-export main types for easy access
pub use widget::*;
