//! Search query and display state
//!
//! `SearchQuery` is the trimmed value of the search box at the moment the
//! debounce timer fires. `DisplayState` records what the page currently shows
//! so the controller can be inspected without parsing markup.

use std::fmt;

/// A non-empty, trimmed search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the raw input value
    ///
    /// Returns `None` for an empty or whitespace-only value, which is the
    /// "no query" state: the page is cleared and nothing is fetched.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which notice is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    TooManyMatches,
    NotFound,
    /// Any other failure, carrying its status or transport message
    Failure(String),
}

/// What the two result containers currently reflect
///
/// Exactly one variant holds at a time, so the list and the detail
/// container can never both carry content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Empty,
    /// Names shown in the list container, in API order
    List(Vec<String>),
    /// Name of the country shown in the detail container
    Detail(String),
    Notice(NoticeKind),
}
