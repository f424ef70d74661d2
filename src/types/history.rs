use serde::{Deserialize, Serialize};

/// One visited location in a tab's navigation history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub title: Option<String>,
}

impl HistoryEntry {
    pub fn new(url: &str, title: Option<&str>) -> Self {
        Self {
            url: url.to_string(),
            title: title.map(str::to_string),
        }
    }
}
