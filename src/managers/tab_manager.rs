use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::managers::navigation_history::NavigationHistory;
use crate::types::errors::TabError;
use crate::types::history::HistoryEntry;
use crate::types::tab::Tab;

/// Trait defining the tab registry interface.
///
/// Every `Err` leaves the registry exactly as it was.
pub trait TabManagerTrait {
    fn open_tab(&mut self, url: Option<&str>, title: Option<&str>, activate: bool) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn update_active(&mut self, url: &str, title: Option<&str>);
    fn seed_active(&mut self, url: &str) -> bool;
    fn mark_error(&mut self, tab_id: &str, message: &str) -> Result<(), TabError>;
    fn clear_error(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn set_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
    fn set_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError>;
    fn go_back(&mut self) -> Option<String>;
    fn go_forward(&mut self) -> Option<String>;
    fn go_to_history(&mut self, index: usize) -> Result<String, TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn tabs(&self) -> &[Tab];
    fn active_tab(&self) -> &Tab;
    fn active_tab_id(&self) -> &str;
    fn tab_count(&self) -> usize;
}

/// In-memory tab registry.
///
/// The collection is never empty and the active pointer always names a tab
/// in it. Tabs are kept in insertion order.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: String,
    blank_url: String,
    new_tab_title: String,
}

impl TabManager {
    /// Creates a registry holding one active tab at `initial_url`.
    pub fn new(initial_url: &str) -> Self {
        Self::with_placeholders(initial_url, "about:blank", "New Tab")
    }

    /// Like [`TabManager::new`], with explicit placeholders for tabs opened
    /// without a URL or title.
    pub fn with_placeholders(initial_url: &str, blank_url: &str, new_tab_title: &str) -> Self {
        let first = Self::build_tab(initial_url, None, new_tab_title);
        Self {
            active_tab_id: first.id.clone(),
            tabs: vec![first],
            blank_url: blank_url.to_string(),
            new_tab_title: new_tab_title.to_string(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn build_tab(url: &str, title: Option<&str>, fallback_title: &str) -> Tab {
        Tab {
            id: Uuid::new_v4().to_string(),
            title: title.unwrap_or(fallback_title).to_string(),
            url: url.to_string(),
            history: NavigationHistory::new(HistoryEntry::new(url, title)),
            loading: false,
            error_message: None,
            created_at: Self::now(),
        }
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn tab_mut(&mut self, tab_id: &str) -> Result<&mut Tab, TabError> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    fn active_mut(&mut self) -> &mut Tab {
        let idx = self.find_tab_index(&self.active_tab_id).unwrap_or(0);
        &mut self.tabs[idx]
    }

    /// Moves the active tab's cursor and syncs its displayed location.
    fn traverse<F>(&mut self, step: F) -> Option<String>
    where
        F: FnOnce(&mut NavigationHistory) -> Option<&HistoryEntry>,
    {
        let tab = self.active_mut();
        let entry = step(&mut tab.history)?.clone();
        tab.url = entry.url.clone();
        if let Some(title) = entry.title {
            tab.title = title;
        }
        Some(entry.url)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

impl TabManagerTrait for TabManager {
    /// Opens a tab seeded with `url` (or the blank placeholder).
    /// Returns the new tab's ID.
    fn open_tab(&mut self, url: Option<&str>, title: Option<&str>, activate: bool) -> String {
        let url = url.unwrap_or(self.blank_url.as_str()).to_string();
        let tab = Self::build_tab(&url, title, &self.new_tab_title);
        let id = tab.id.clone();
        self.tabs.push(tab);
        if activate {
            self.active_tab_id = id.clone();
        }
        tracing::debug!(tab_id = %id, %url, activate, "opened tab");
        id
    }

    /// Closes a tab unless it is the only one.
    ///
    /// Closing the active tab hands activation to the first remaining tab.
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        if self.tabs.len() == 1 {
            return Err(TabError::LastTab);
        }

        self.tabs.remove(idx);
        if self.active_tab_id == tab_id {
            self.active_tab_id = self.tabs[0].id.clone();
        }
        tracing::debug!(%tab_id, active = %self.active_tab_id, "closed tab");
        Ok(())
    }

    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = tab_id.to_string();
        Ok(())
    }

    /// Records a navigation on the active tab and clears its fault state.
    fn update_active(&mut self, url: &str, title: Option<&str>) {
        let tab = self.active_mut();
        tab.history.push(HistoryEntry::new(url, title));
        tab.url = url.to_string();
        if let Some(title) = title {
            tab.title = title.to_string();
        }
        tab.error_message = None;
    }

    /// Points the active tab at `url` in place if it is still an untouched
    /// blank tab, replacing its single history entry. Returns false, changing
    /// nothing, when the tab already holds a page.
    fn seed_active(&mut self, url: &str) -> bool {
        let blank_url = self.blank_url.clone();
        let tab = self.active_mut();
        if tab.url != blank_url || tab.history.len() != 1 {
            return false;
        }
        tab.history = NavigationHistory::new(HistoryEntry::new(url, None));
        tab.url = url.to_string();
        tab.error_message = None;
        true
    }

    fn mark_error(&mut self, tab_id: &str, message: &str) -> Result<(), TabError> {
        let tab = self.tab_mut(tab_id)?;
        tab.error_message = Some(message.to_string());
        tab.loading = false;
        Ok(())
    }

    fn clear_error(&mut self, tab_id: &str) -> Result<(), TabError> {
        self.tab_mut(tab_id)?.error_message = None;
        Ok(())
    }

    /// Updates the displayed title and the current history entry's title.
    fn set_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let tab = self.tab_mut(tab_id)?;
        tab.title = title.to_string();
        tab.history.set_current_title(title);
        Ok(())
    }

    fn set_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError> {
        self.tab_mut(tab_id)?.loading = loading;
        Ok(())
    }

    fn go_back(&mut self) -> Option<String> {
        self.traverse(|h| h.back())
    }

    fn go_forward(&mut self) -> Option<String> {
        self.traverse(|h| h.forward())
    }

    fn go_to_history(&mut self, index: usize) -> Result<String, TabError> {
        self.traverse(|h| h.go_to(index))
            .ok_or(TabError::InvalidHistoryIndex(index))
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn active_tab(&self) -> &Tab {
        self.get_tab(&self.active_tab_id).unwrap_or(&self.tabs[0])
    }

    fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
