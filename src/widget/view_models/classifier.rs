//! Result classification
//!
//! Decides how a search result is displayed from the number of records alone.

/// Largest result that is still shown as a list
pub const MAX_LISTED: usize = 10;

/// Display mode chosen for a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No records: nothing is rendered and no notice is shown
    Nothing,
    Detail,
    List,
    TooMany,
}

/// Map a record count to its display mode
pub fn classify(count: usize) -> Classification {
    match count {
        0 => Classification::Nothing,
        1 => Classification::Detail,
        2..=MAX_LISTED => Classification::List,
        _ => Classification::TooMany,
    }
}
