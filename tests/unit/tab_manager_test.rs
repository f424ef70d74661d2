use seedbrowser::managers::tab_manager::{TabManager, TabManagerTrait};
use seedbrowser::types::errors::TabError;

fn manager_with(urls: &[&str]) -> (TabManager, Vec<String>) {
    let mut manager = TabManager::new(urls[0]);
    let mut ids = vec![manager.active_tab_id().to_string()];
    for url in &urls[1..] {
        ids.push(manager.open_tab(Some(url), None, false));
    }
    (manager, ids)
}

#[test]
fn test_starts_with_one_active_tab() {
    let manager = TabManager::default();
    assert_eq!(manager.tab_count(), 1);
    assert_eq!(manager.active_tab().url, "about:blank");
    assert_eq!(manager.active_tab().title, "New Tab");
    assert_eq!(manager.active_tab().history.len(), 1);
}

#[test]
fn test_open_tab_activates_by_default_flag() {
    let mut manager = TabManager::default();
    let background = manager.open_tab(Some("https://a.test"), Some("A"), false);
    assert_ne!(manager.active_tab_id(), background);

    let foreground = manager.open_tab(Some("https://b.test"), None, true);
    assert_eq!(manager.active_tab_id(), foreground);
    assert_eq!(manager.tab_count(), 3);
    assert_eq!(manager.get_tab(&background).map(|t| t.title.as_str()), Some("A"));
}

#[test]
fn test_open_tab_ids_are_unique() {
    let mut manager = TabManager::default();
    let a = manager.open_tab(None, None, false);
    let b = manager.open_tab(None, None, false);
    assert_ne!(a, b);
    assert_ne!(a, manager.active_tab_id());
}

#[test]
fn test_close_active_tab_activates_first_remaining() {
    let (mut manager, ids) = manager_with(&["https://a.test", "https://b.test", "https://c.test"]);
    manager.switch_tab(&ids[2]).unwrap();
    manager.close_tab(&ids[2]).unwrap();

    assert_eq!(manager.tab_count(), 2);
    assert_eq!(manager.active_tab_id(), ids[0]);
}

#[test]
fn test_close_background_tab_keeps_active() {
    let (mut manager, ids) = manager_with(&["https://a.test", "https://b.test"]);
    manager.switch_tab(&ids[1]).unwrap();
    manager.close_tab(&ids[0]).unwrap();
    assert_eq!(manager.active_tab_id(), ids[1]);
}

#[test]
fn test_close_last_tab_is_rejected() {
    let (mut manager, ids) = manager_with(&["https://a.test"]);
    assert_eq!(manager.close_tab(&ids[0]), Err(TabError::LastTab));
    assert_eq!(manager.tab_count(), 1);
    assert_eq!(manager.active_tab_id(), ids[0]);
}

#[test]
fn test_unknown_ids_leave_state_untouched() {
    let (mut manager, ids) = manager_with(&["https://a.test", "https://b.test"]);
    assert_eq!(
        manager.close_tab("missing"),
        Err(TabError::NotFound("missing".into()))
    );
    assert!(manager.switch_tab("missing").is_err());
    assert!(manager.mark_error("missing", "boom").is_err());
    assert_eq!(manager.tab_count(), 2);
    assert_eq!(manager.active_tab_id(), ids[0]);
}

#[test]
fn test_update_active_pushes_and_clears_error() {
    let mut manager = TabManager::new("https://a.test");
    let id = manager.active_tab_id().to_string();
    manager.mark_error(&id, "HTTP error 500").unwrap();
    assert!(manager.active_tab().has_error());

    manager.update_active("https://b.test", Some("B"));
    let tab = manager.active_tab();
    assert!(!tab.has_error());
    assert_eq!(tab.url, "https://b.test");
    assert_eq!(tab.title, "B");
    assert_eq!(tab.history.len(), 2);
}

#[test]
fn test_mark_error_stops_loading() {
    let mut manager = TabManager::new("https://a.test");
    let id = manager.active_tab_id().to_string();
    manager.set_loading(&id, true).unwrap();
    manager.mark_error(&id, "offline").unwrap();
    let tab = manager.active_tab();
    assert!(!tab.loading);
    assert_eq!(tab.error_message.as_deref(), Some("offline"));
}

#[test]
fn test_back_forward_sync_displayed_location() {
    let mut manager = TabManager::new("https://x.test");
    manager.update_active("https://y.test", Some("Y"));

    assert_eq!(manager.go_back().as_deref(), Some("https://x.test"));
    assert_eq!(manager.active_tab().url, "https://x.test");
    assert_eq!(manager.go_back(), None);
    assert_eq!(manager.go_forward().as_deref(), Some("https://y.test"));
    assert_eq!(manager.active_tab().title, "Y");
    assert_eq!(manager.go_forward(), None);
}

#[test]
fn test_history_is_per_tab() {
    let (mut manager, ids) = manager_with(&["https://a.test", "https://b.test"]);
    manager.update_active("https://a2.test", None);
    manager.switch_tab(&ids[1]).unwrap();

    assert_eq!(manager.active_tab().history.len(), 1);
    assert_eq!(manager.go_back(), None);
    manager.switch_tab(&ids[0]).unwrap();
    assert_eq!(manager.go_back().as_deref(), Some("https://a.test"));
}

#[test]
fn test_go_to_history_out_of_range() {
    let mut manager = TabManager::new("https://a.test");
    manager.update_active("https://b.test", None);
    assert_eq!(manager.go_to_history(5), Err(TabError::InvalidHistoryIndex(5)));
    assert_eq!(manager.go_to_history(0).as_deref(), Ok("https://a.test"));
    assert_eq!(manager.active_tab().history.cursor(), 0);
}

#[test]
fn test_set_title_updates_current_entry() {
    let mut manager = TabManager::new("https://a.test");
    let id = manager.active_tab_id().to_string();
    manager.set_title(&id, "Alpha").unwrap();
    assert_eq!(manager.active_tab().title, "Alpha");
    assert_eq!(manager.active_tab().history.current().title.as_deref(), Some("Alpha"));
}
