//! # Controllers
//!
//! `SearchController` runs a single search cycle against the page;
//! `AppController` feeds it from the input stream and the debouncer.

pub mod app_controller;
pub mod search_controller;

pub use app_controller::AppController;
pub use search_controller::{SearchController, SearchSettings, SearchState, SearchTicket};
