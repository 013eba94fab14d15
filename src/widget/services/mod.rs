//! # Services Layer
//!
//! Abstracts the external resources the widget talks to. Today that is only
//! the REST Countries API.

pub mod http;

pub use http::{CountryService, CountrySource, FetchError, COUNTRY_FIELDS};
