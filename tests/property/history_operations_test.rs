//! Property-based tests for NavigationHistory.
//!
//! For any sequence of push/back/forward/jump operations the cursor stays in
//! bounds, the history is never empty, and back followed by forward restores
//! the position.

use proptest::prelude::*;
use seedbrowser::managers::navigation_history::NavigationHistory;
use seedbrowser::types::history::HistoryEntry;

#[derive(Debug, Clone)]
enum HistoryOp {
    Push(String),
    Back,
    Forward,
    GoTo(usize),
}

fn arb_url() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|host| format!("https://{}.test", host))
}

fn arb_ops() -> impl Strategy<Value = Vec<HistoryOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => arb_url().prop_map(HistoryOp::Push),
            2 => Just(HistoryOp::Back),
            2 => Just(HistoryOp::Forward),
            1 => (0..12usize).prop_map(HistoryOp::GoTo),
        ],
        1..80,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cursor_stays_in_bounds(ops in arb_ops()) {
        let mut history = NavigationHistory::new(HistoryEntry::new("about:blank", None));

        for op in &ops {
            match op {
                HistoryOp::Push(url) => {
                    let cursor = history.cursor();
                    history.push(HistoryEntry::new(url, None));
                    prop_assert_eq!(history.len(), cursor + 2);
                    prop_assert!(!history.can_go_forward());
                    prop_assert_eq!(history.current_url(), url.as_str());
                }
                HistoryOp::Back => { history.back(); }
                HistoryOp::Forward => { history.forward(); }
                HistoryOp::GoTo(i) => { history.go_to(*i); }
            }
            prop_assert!(!history.is_empty());
            prop_assert!(history.cursor() < history.len());
        }
    }

    #[test]
    fn back_then_forward_restores_position(
        urls in prop::collection::vec(arb_url(), 1..20),
        steps_back in 0..20usize,
    ) {
        let mut history = NavigationHistory::new(HistoryEntry::new("about:blank", None));
        for url in &urls {
            history.push(HistoryEntry::new(url, None));
        }
        for _ in 0..steps_back {
            history.back();
        }
        prop_assume!(history.can_go_back());

        let cursor = history.cursor();
        let current = history.current_url().to_string();
        history.back();
        history.forward();
        prop_assert_eq!(history.cursor(), cursor);
        prop_assert_eq!(history.current_url(), current.as_str());
    }
}
