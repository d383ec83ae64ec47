// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One calendar day of the dataset: the feast and everyone celebrating it.
/// Names are always stored in Cyrillic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDayEntry {
    pub holiday: String,
    pub names: Vec<String>,
}

/// Result of a name or date lookup. `names` is an owned copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDayRecord {
    /// "MM-DD"
    pub date: String,
    pub holiday: String,
    pub names: Vec<String>,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    pub name: String,
    pub date: String,
    pub holiday: String,
}

impl NameDayRecord {
    pub(crate) fn from_entry(date: &str, entry: &NameDayEntry) -> Self {
        Self {
            date: date.to_string(),
            holiday: entry.holiday.clone(),
            names: entry.names.clone(),
        }
    }
}
