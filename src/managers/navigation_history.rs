//! Per-tab navigation history with a current-position cursor.
//!
//! Classic back/forward-stack semantics: pushing while the cursor is not at
//! the tail discards every entry after the cursor first. The history is never
//! empty and `0 <= cursor < len` holds after every operation.

use serde::{Deserialize, Serialize};

use crate::types::history::HistoryEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "HistoryRecord")]
pub struct NavigationHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

/// Unchecked serialized form; converting it enforces the cursor bounds.
#[derive(Deserialize)]
struct HistoryRecord {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl TryFrom<HistoryRecord> for NavigationHistory {
    type Error = String;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        if record.cursor >= record.entries.len() {
            return Err(format!(
                "history cursor {} out of range for {} entries",
                record.cursor,
                record.entries.len()
            ));
        }
        Ok(Self {
            entries: record.entries,
            cursor: record.cursor,
        })
    }
}

impl NavigationHistory {
    /// Creates a single-entry history positioned on `initial`.
    pub fn new(initial: HistoryEntry) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Records a navigation, truncating any forward entries first.
    ///
    /// Identical consecutive locations are recorded as separate entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Steps back one entry. Returns `None` when already at the first entry.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Steps forward one entry. Returns `None` when already at the tail.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Moves the cursor straight to `index`. Out-of-range is a no-op.
    pub fn go_to(&mut self, index: usize) -> Option<&HistoryEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = index;
        self.entries.get(self.cursor)
    }

    pub fn current(&self) -> &HistoryEntry {
        // cursor is kept in bounds by every mutation and entries is never empty
        &self.entries[self.cursor]
    }

    pub fn current_url(&self) -> &str {
        &self.current().url
    }

    /// Attaches a title to the current entry without recording a navigation.
    pub fn set_current_title(&mut self, title: &str) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            entry.title = Some(title.to_string());
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a constructed history.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
