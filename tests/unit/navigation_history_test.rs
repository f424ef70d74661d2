use rstest::rstest;
use seedbrowser::managers::navigation_history::NavigationHistory;
use seedbrowser::types::history::HistoryEntry;

fn history_of(urls: &[&str]) -> NavigationHistory {
    let mut history = NavigationHistory::new(HistoryEntry::new(urls[0], None));
    for url in &urls[1..] {
        history.push(HistoryEntry::new(url, None));
    }
    history
}

fn urls(history: &NavigationHistory) -> Vec<String> {
    history.entries().iter().map(|e| e.url.clone()).collect()
}

#[test]
fn test_back_then_forward_scenario() {
    let mut history = history_of(&["https://x"]);
    history.push(HistoryEntry::new("https://y", None));

    assert_eq!(history.back().map(|e| e.url.clone()).as_deref(), Some("https://x"));
    assert_eq!(history.current_url(), "https://x");
    assert_eq!(history.forward().map(|e| e.url.clone()).as_deref(), Some("https://y"));
    assert_eq!(history.current_url(), "https://y");
}

#[test]
fn test_back_at_start_is_noop() {
    let mut history = history_of(&["a"]);
    assert!(history.back().is_none());
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_forward_at_tail_is_noop() {
    let mut history = history_of(&["a", "b"]);
    assert!(history.forward().is_none());
    assert_eq!(history.cursor(), 1);
}

#[test]
fn test_push_after_back_drops_forward_entries() {
    let mut history = history_of(&["a", "b", "c", "d"]);
    history.back();
    history.back();
    history.push(HistoryEntry::new("e", None));

    assert_eq!(urls(&history), vec!["a", "b", "e"]);
    assert!(!history.can_go_forward());
    assert!(history.forward().is_none());
}

#[test]
fn test_duplicate_push_is_recorded() {
    let mut history = history_of(&["a"]);
    history.push(HistoryEntry::new("a", None));
    history.push(HistoryEntry::new("a", None));
    assert_eq!(history.len(), 3);
}

#[test]
fn test_set_current_title_does_not_push() {
    let mut history = history_of(&["a", "b"]);
    history.set_current_title("Bee");
    assert_eq!(history.len(), 2);
    assert_eq!(history.current().title.as_deref(), Some("Bee"));
}

#[rstest]
#[case(0, Some("a"))]
#[case(2, Some("c"))]
#[case(3, None)]
#[case(99, None)]
fn test_go_to(#[case] index: usize, #[case] expected: Option<&str>) {
    let mut history = history_of(&["a", "b", "c"]);
    let got = history.go_to(index).map(|e| e.url.clone());
    assert_eq!(got.as_deref(), expected);
    if expected.is_none() {
        assert_eq!(history.cursor(), 2);
    }
}

#[test]
fn test_deserialize_accepts_valid_history() {
    let history: NavigationHistory = serde_json::from_str(
        r#"{"entries":[{"url":"a","title":null},{"url":"b","title":"B"}],"cursor":1}"#,
    )
    .unwrap();
    assert_eq!(history.current_url(), "b");
    assert!(history.can_go_back());
}

#[rstest]
#[case(r#"{"entries":[],"cursor":0}"#)]
#[case(r#"{"entries":[{"url":"a","title":null}],"cursor":1}"#)]
fn test_deserialize_rejects_out_of_bounds_cursor(#[case] json: &str) {
    assert!(serde_json::from_str::<NavigationHistory>(json).is_err());
}
