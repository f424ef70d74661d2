//! Overlay panel controller.
//!
//! Each panel runs `Closed → Opening → Open → Dismissing → Closed`. The host
//! drives animation time through `advance` and reads `offset` to position the
//! panel; the controller itself knows nothing about rendering.
//!
//! The tab switcher and the history browser are mutually exclusive: opening
//! one snaps the other closed.

use crate::types::overlay::{DragRelease, PanelEvent, PanelKind, PanelPhase};
use crate::types::settings::OverlaySettings;

/// Decelerate easing, `1 - (1 - t)^2`.
fn decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Debug, Clone)]
pub struct OverlayPanel {
    kind: PanelKind,
    phase: PanelPhase,
    drag_offset: f32,
    /// Offset the committed dismiss animation starts from.
    dismiss_from: f32,
    /// Same, as a fraction of the panel height, for a dismiss that
    /// interrupts the entrance animation.
    dismiss_from_fraction: f32,
    settings: OverlaySettings,
}

impl OverlayPanel {
    pub fn new(kind: PanelKind, settings: OverlaySettings) -> Self {
        Self {
            kind,
            phase: PanelPhase::Closed,
            drag_offset: 0.0,
            dismiss_from: 0.0,
            dismiss_from_fraction: 0.0,
            settings,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn is_open(&self) -> bool {
        self.phase == PanelPhase::Open
    }

    /// True in every phase except `Closed`.
    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    /// Starts the entrance animation. Only valid from `Closed`.
    pub fn open(&mut self) -> bool {
        if self.phase != PanelPhase::Closed {
            return false;
        }
        self.phase = PanelPhase::Opening { elapsed_ms: 0 };
        self.drag_offset = 0.0;
        self.dismiss_from = 0.0;
        self.dismiss_from_fraction = 0.0;
        true
    }

    /// Commits a dismiss animation without a gesture (close button, selection).
    pub fn close(&mut self) -> bool {
        match self.phase {
            PanelPhase::Closed | PanelPhase::Dismissing { committed: true, .. } => false,
            PanelPhase::Opening { elapsed_ms } => {
                // leave from wherever the entrance had got to
                self.dismiss_from = 0.0;
                self.dismiss_from_fraction = 1.0 - decelerate(self.progress(elapsed_ms));
                self.phase = PanelPhase::Dismissing {
                    committed: true,
                    elapsed_ms: 0,
                };
                true
            }
            PanelPhase::Open | PanelPhase::Dismissing { committed: false, .. } => {
                self.dismiss_from = self.drag_offset;
                self.dismiss_from_fraction = 0.0;
                self.drag_offset = 0.0;
                self.phase = PanelPhase::Dismissing {
                    committed: true,
                    elapsed_ms: 0,
                };
                true
            }
        }
    }

    /// Tracks a downward dismiss drag 1:1. `translation` is the total
    /// vertical travel since the gesture began; upward travel clamps to 0.
    pub fn update_drag(&mut self, translation: f32) -> bool {
        match self.phase {
            PanelPhase::Open | PanelPhase::Dismissing { committed: false, .. } => {
                self.drag_offset = translation.max(0.0);
                self.phase = if self.drag_offset > 0.0 {
                    PanelPhase::Dismissing {
                        committed: false,
                        elapsed_ms: 0,
                    }
                } else {
                    PanelPhase::Open
                };
                true
            }
            _ => false,
        }
    }

    /// Ends the gesture: commit past the threshold, otherwise spring back.
    pub fn release_drag(&mut self) -> DragRelease {
        match self.phase {
            PanelPhase::Dismissing { committed: false, .. } => {
                let offset = self.drag_offset;
                self.drag_offset = 0.0;
                if offset > self.settings.dismiss_threshold {
                    self.dismiss_from = offset;
                    self.dismiss_from_fraction = 0.0;
                    self.phase = PanelPhase::Dismissing {
                        committed: true,
                        elapsed_ms: 0,
                    };
                    DragRelease::Committed
                } else {
                    self.phase = PanelPhase::Open;
                    DragRelease::SpringBack
                }
            }
            PanelPhase::Open => {
                self.drag_offset = 0.0;
                DragRelease::SpringBack
            }
            _ => DragRelease::Ignored,
        }
    }

    /// Advances running animations by `dt_ms`. Returns the close event when
    /// a dismiss animation finishes.
    pub fn advance(&mut self, dt_ms: u64) -> Option<PanelEvent> {
        let duration = self.settings.animation_ms;
        match self.phase {
            PanelPhase::Opening { elapsed_ms } => {
                let elapsed_ms = elapsed_ms.saturating_add(dt_ms);
                self.phase = if elapsed_ms >= duration {
                    PanelPhase::Open
                } else {
                    PanelPhase::Opening { elapsed_ms }
                };
                None
            }
            PanelPhase::Dismissing {
                committed: true,
                elapsed_ms,
            } => {
                let elapsed_ms = elapsed_ms.saturating_add(dt_ms);
                if elapsed_ms >= duration {
                    self.finish_close()
                } else {
                    self.phase = PanelPhase::Dismissing {
                        committed: true,
                        elapsed_ms,
                    };
                    None
                }
            }
            _ => None,
        }
    }

    /// Closes immediately, skipping the animation.
    pub fn snap_closed(&mut self) -> Option<PanelEvent> {
        if self.phase == PanelPhase::Closed {
            return None;
        }
        self.finish_close()
    }

    fn finish_close(&mut self) -> Option<PanelEvent> {
        self.phase = PanelPhase::Closed;
        self.drag_offset = 0.0;
        self.dismiss_from = 0.0;
        self.dismiss_from_fraction = 0.0;
        Some(PanelEvent::Closed(self.kind))
    }

    fn progress(&self, elapsed_ms: u64) -> f32 {
        if self.settings.animation_ms == 0 {
            return 1.0;
        }
        elapsed_ms as f32 / self.settings.animation_ms as f32
    }

    /// Vertical translation of the panel: 0 is fully shown, `panel_height`
    /// is fully off-screen.
    pub fn offset(&self, panel_height: f32) -> f32 {
        match self.phase {
            PanelPhase::Closed => panel_height,
            PanelPhase::Opening { elapsed_ms } => {
                panel_height * (1.0 - decelerate(self.progress(elapsed_ms)))
            }
            PanelPhase::Open => 0.0,
            PanelPhase::Dismissing {
                committed: false, ..
            } => self.drag_offset,
            PanelPhase::Dismissing {
                committed: true,
                elapsed_ms,
            } => {
                let start = self
                    .dismiss_from
                    .min(panel_height)
                    .max(panel_height * self.dismiss_from_fraction);
                start + (panel_height - start) * decelerate(self.progress(elapsed_ms))
            }
        }
    }
}

/// Owns both panels and enforces that at most one is visible.
#[derive(Debug, Clone)]
pub struct OverlayManager {
    tab_switcher: OverlayPanel,
    history: OverlayPanel,
}

impl OverlayManager {
    pub fn new(settings: OverlaySettings) -> Self {
        Self {
            tab_switcher: OverlayPanel::new(PanelKind::TabSwitcher, settings.clone()),
            history: OverlayPanel::new(PanelKind::History, settings),
        }
    }

    pub fn panel(&self, kind: PanelKind) -> &OverlayPanel {
        match kind {
            PanelKind::TabSwitcher => &self.tab_switcher,
            PanelKind::History => &self.history,
        }
    }

    fn panel_mut(&mut self, kind: PanelKind) -> &mut OverlayPanel {
        match kind {
            PanelKind::TabSwitcher => &mut self.tab_switcher,
            PanelKind::History => &mut self.history,
        }
    }

    /// Opens `kind`, snapping the other panel closed first if it is visible.
    /// Returns the close events this produced.
    pub fn open(&mut self, kind: PanelKind) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        if let Some(event) = self.panel_mut(kind.other()).snap_closed() {
            events.push(event);
        }
        self.panel_mut(kind).open();
        events
    }

    pub fn close(&mut self, kind: PanelKind) -> bool {
        self.panel_mut(kind).close()
    }

    /// Closes `kind` if visible, otherwise opens it.
    pub fn toggle(&mut self, kind: PanelKind) -> Vec<PanelEvent> {
        if self.panel(kind).is_visible() {
            self.close(kind);
            Vec::new()
        } else {
            self.open(kind)
        }
    }

    pub fn update_drag(&mut self, kind: PanelKind, translation: f32) -> bool {
        self.panel_mut(kind).update_drag(translation)
    }

    pub fn release_drag(&mut self, kind: PanelKind) -> DragRelease {
        self.panel_mut(kind).release_drag()
    }

    pub fn advance(&mut self, dt_ms: u64) -> Vec<PanelEvent> {
        [PanelKind::TabSwitcher, PanelKind::History]
            .into_iter()
            .filter_map(|kind| self.panel_mut(kind).advance(dt_ms))
            .collect()
    }

    /// The panel currently on screen, if any.
    pub fn visible_panel(&self) -> Option<PanelKind> {
        [PanelKind::TabSwitcher, PanelKind::History]
            .into_iter()
            .find(|kind| self.panel(*kind).is_visible())
    }
}
