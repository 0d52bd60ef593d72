//! Read-only summary of the dimension list, as shown below the drawing and in
//! the printed report.

use crate::types::{DimensionId, DimensionList};

/// Text shown for a dimension without a value.
pub const NOT_SET_TEXT: &str = "Not set";

/// One cell of the summary grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Dimension summarized by this cell
    pub id: DimensionId,
    /// Static meaning of the letter
    pub description: String,
    /// `"<value> mm"`, or [`NOT_SET_TEXT`]
    pub display: String,
    /// False when the value is empty; such cells are flagged in red
    pub is_set: bool,
}

/// Builds one entry per dimension, in list order.
pub fn summarize(dimensions: &DimensionList) -> Vec<SummaryEntry> {
    dimensions
        .iter()
        .map(|dim| SummaryEntry {
            id: dim.id,
            description: dim.description.clone(),
            display: dim
                .display_value()
                .unwrap_or_else(|| NOT_SET_TEXT.to_string()),
            is_set: dim.is_set(),
        })
        .collect()
}

/// Number of entries still flagged as unset.
pub fn unset_count(entries: &[SummaryEntry]) -> usize {
    entries.iter().filter(|e| !e.is_set).count()
}
