//! # Views
//!
//! Markup produced for the page's result containers.

pub mod markup;

pub use markup::{format_population, render_country_info, render_country_list};
