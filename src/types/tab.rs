use serde::{Deserialize, Serialize};

use crate::managers::navigation_history::NavigationHistory;

/// An independent navigable session with its own location and history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub url: String,
    pub history: NavigationHistory,
    pub loading: bool,
    /// Transient render fault, cleared on the next successful load or retry.
    pub error_message: Option<String>,
    pub created_at: i64,
}

impl Tab {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
