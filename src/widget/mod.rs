//! # Country Lookup Widget
//!
//! The widget core and the boundaries it talks through. All components
//! take their collaborators explicitly so the same core runs against the
//! terminal host and against in-memory test doubles.

pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod notifier;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::{AppController, SearchController, SearchSettings, SearchState};
pub use events::{Debouncer, InputEvent};
pub use io::{EventStream, Page};
pub use models::{Country, DisplayState, NoticeKind, SearchQuery};
pub use notifier::{Notice, NoticeBoard, Notifier};
pub use services::{CountryService, CountrySource, FetchError};
pub use view_models::{classify, Classification};
pub use views::{format_population, render_country_info, render_country_list};
