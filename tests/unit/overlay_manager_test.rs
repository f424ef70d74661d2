use seedbrowser::managers::overlay_manager::{OverlayManager, OverlayPanel};
use seedbrowser::types::overlay::{DragRelease, PanelEvent, PanelKind, PanelPhase};
use seedbrowser::types::settings::OverlaySettings;

fn settings() -> OverlaySettings {
    OverlaySettings {
        animation_ms: 200,
        dismiss_threshold: 100.0,
    }
}

fn open_panel() -> OverlayPanel {
    let mut panel = OverlayPanel::new(PanelKind::History, settings());
    assert!(panel.open());
    assert_eq!(panel.advance(200), None);
    assert_eq!(panel.phase(), PanelPhase::Open);
    panel
}

#[test]
fn test_opening_animation_reaches_open() {
    let mut panel = OverlayPanel::new(PanelKind::TabSwitcher, settings());
    assert!(!panel.is_visible());
    assert_eq!(panel.offset(500.0), 500.0);

    panel.open();
    assert_eq!(panel.phase(), PanelPhase::Opening { elapsed_ms: 0 });
    assert_eq!(panel.offset(500.0), 500.0);

    panel.advance(100);
    let midway = panel.offset(500.0);
    assert!(midway > 0.0 && midway < 500.0);

    panel.advance(100);
    assert!(panel.is_open());
    assert_eq!(panel.offset(500.0), 0.0);
}

#[test]
fn test_open_only_from_closed() {
    let mut panel = open_panel();
    assert!(!panel.open());
    assert_eq!(panel.phase(), PanelPhase::Open);
}

#[test]
fn test_short_swipe_springs_back_without_close_event() {
    let mut panel = open_panel();
    assert!(panel.update_drag(40.0));
    assert_eq!(panel.drag_offset(), 40.0);
    assert_eq!(panel.offset(500.0), 40.0);

    assert_eq!(panel.release_drag(), DragRelease::SpringBack);
    assert_eq!(panel.phase(), PanelPhase::Open);
    assert_eq!(panel.drag_offset(), 0.0);
    assert_eq!(panel.advance(1_000), None);
}

#[test]
fn test_long_swipe_commits_and_fires_close_once() {
    let mut panel = open_panel();
    panel.update_drag(250.0);
    assert_eq!(panel.release_drag(), DragRelease::Committed);
    assert!(matches!(
        panel.phase(),
        PanelPhase::Dismissing { committed: true, .. }
    ));
    assert!(panel.offset(500.0) >= 250.0);

    assert_eq!(panel.advance(100), None);
    assert_eq!(panel.advance(100), Some(PanelEvent::Closed(PanelKind::History)));
    assert_eq!(panel.phase(), PanelPhase::Closed);
    assert_eq!(panel.advance(100), None);
}

#[test]
fn test_drag_at_threshold_springs_back() {
    let mut panel = open_panel();
    panel.update_drag(100.0);
    assert_eq!(panel.release_drag(), DragRelease::SpringBack);
}

#[test]
fn test_upward_drag_clamps_to_zero() {
    let mut panel = open_panel();
    panel.update_drag(60.0);
    panel.update_drag(-30.0);
    assert_eq!(panel.drag_offset(), 0.0);
    assert_eq!(panel.phase(), PanelPhase::Open);
}

#[test]
fn test_drag_ignored_while_closed_or_opening() {
    let mut panel = OverlayPanel::new(PanelKind::History, settings());
    assert!(!panel.update_drag(50.0));
    assert_eq!(panel.release_drag(), DragRelease::Ignored);

    panel.open();
    assert!(!panel.update_drag(50.0));
}

#[test]
fn test_close_button_commits_dismiss() {
    let mut panel = open_panel();
    assert!(panel.close());
    assert!(!panel.close());
    assert_eq!(panel.advance(200), Some(PanelEvent::Closed(PanelKind::History)));
}

#[test]
fn test_manager_panels_are_mutually_exclusive() {
    let mut manager = OverlayManager::new(settings());
    assert!(manager.open(PanelKind::TabSwitcher).is_empty());
    assert_eq!(manager.visible_panel(), Some(PanelKind::TabSwitcher));

    let events = manager.open(PanelKind::History);
    assert_eq!(events, vec![PanelEvent::Closed(PanelKind::TabSwitcher)]);
    assert_eq!(manager.visible_panel(), Some(PanelKind::History));
    assert_eq!(manager.panel(PanelKind::TabSwitcher).phase(), PanelPhase::Closed);
}

#[test]
fn test_manager_toggle() {
    let mut manager = OverlayManager::new(settings());
    manager.toggle(PanelKind::History);
    manager.advance(200);
    assert!(manager.panel(PanelKind::History).is_open());

    manager.toggle(PanelKind::History);
    assert_eq!(manager.advance(200), vec![PanelEvent::Closed(PanelKind::History)]);
    assert_eq!(manager.visible_panel(), None);
}

#[test]
fn test_manager_routes_gestures_to_kind() {
    let mut manager = OverlayManager::new(settings());
    manager.open(PanelKind::TabSwitcher);
    manager.advance(200);

    assert!(!manager.update_drag(PanelKind::History, 300.0));
    assert!(manager.update_drag(PanelKind::TabSwitcher, 300.0));
    assert_eq!(manager.release_drag(PanelKind::TabSwitcher), DragRelease::Committed);
}

#[test]
fn test_close_during_entrance_continues_from_current_offset() {
    let mut panel = OverlayPanel::new(PanelKind::TabSwitcher, settings());
    panel.open();
    panel.advance(150);
    let before = panel.offset(500.0);

    assert!(panel.close());
    assert!((panel.offset(500.0) - before).abs() < 0.01);

    panel.advance(100);
    let leaving = panel.offset(500.0);
    assert!(leaving > before && leaving < 500.0);
    assert_eq!(panel.advance(100), Some(PanelEvent::Closed(PanelKind::TabSwitcher)));
}
