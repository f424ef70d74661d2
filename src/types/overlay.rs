use serde::{Deserialize, Serialize};

/// The two gesture-dismissible bottom panels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    TabSwitcher,
    History,
}

impl PanelKind {
    pub fn other(self) -> Self {
        match self {
            PanelKind::TabSwitcher => PanelKind::History,
            PanelKind::History => PanelKind::TabSwitcher,
        }
    }
}

/// Animation/gesture phase of one panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PanelPhase {
    Closed,
    Opening { elapsed_ms: u64 },
    Open,
    /// `committed == false` while a drag is still reversible; once committed
    /// the panel is animating off-screen.
    Dismissing { committed: bool, elapsed_ms: u64 },
}

/// Outcome of releasing a dismiss drag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DragRelease {
    /// Drag exceeded the threshold; the panel is animating closed.
    Committed,
    /// Drag fell short; the panel is back to open with no offset.
    SpringBack,
    /// No drag was in progress.
    Ignored,
}

/// Emitted when a panel finishes closing. Stands in for the close callback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "panel", rename_all = "snake_case")]
pub enum PanelEvent {
    Closed(PanelKind),
}
