//! History tests - bounded retention and cursor navigation

use tui_life::core::{Grid, HistoryStore, HistoryView};
use tui_life::types::LifeError;

/// 1x8 grid with only cell `i` alive, so snapshots are distinguishable.
fn marked(i: i32) -> Grid {
    let mut grid = Grid::new(1, 8);
    grid.set(i, 0, true);
    grid
}

fn past(view: Option<HistoryView>) -> Grid {
    match view {
        Some(HistoryView::Past(grid)) => grid,
        other => panic!("expected a past generation, got {:?}", other),
    }
}

#[test]
fn test_retains_most_recent_generations() {
    let mut history = HistoryStore::new(3);
    for i in 0..5 {
        assert!(history.push(marked(i)));
    }
    assert_eq!(history.len(), 3);
    let kept: Vec<Grid> = history.iter().cloned().collect();
    assert_eq!(kept, vec![marked(2), marked(3), marked(4)]);
}

#[test]
fn test_capacity_one_never_records() {
    let mut history = HistoryStore::new(1);
    assert!(!history.is_recording());
    assert!(!history.push(marked(0)));
    assert!(history.is_empty());
    assert!(history.step_back().is_none());
}

#[test]
fn test_zero_capacity_is_treated_as_one() {
    let history = HistoryStore::new(0);
    assert_eq!(history.capacity(), 1);
}

#[test]
fn test_back_and_forward_walk_newest_first() {
    let mut history = HistoryStore::new(4);
    for i in 0..3 {
        history.push(marked(i));
    }

    assert_eq!(past(history.step_back()), marked(2));
    assert_eq!(past(history.step_back()), marked(1));
    assert_eq!(past(history.step_back()), marked(0));
    assert_eq!(history.cursor(), 3);
    assert!(history.step_back().is_none());

    assert_eq!(past(history.step_forward()), marked(1));
    assert_eq!(past(history.step_forward()), marked(2));
    assert!(matches!(history.step_forward(), Some(HistoryView::Live)));
    assert!(history.is_live());
    assert!(history.step_forward().is_none());
}

#[test]
fn test_returned_snapshot_is_a_copy() {
    let mut history = HistoryStore::new(2);
    history.push(marked(3));

    let mut shown = past(history.step_back());
    shown.flip(0, 0);
    assert_eq!(history.viewed(), Some(&marked(3)));
}

#[test]
fn test_push_ignored_while_viewing() {
    let mut history = HistoryStore::new(5);
    history.push(marked(0));
    history.push(marked(1));
    history.step_back();

    assert!(!history.push(marked(7)));
    assert_eq!(history.len(), 2);
}

#[test]
fn test_rewind_drops_viewed_and_newer() {
    let mut history = HistoryStore::new(5);
    for i in 0..4 {
        history.push(marked(i));
    }
    history.step_back();
    history.step_back();

    assert_eq!(history.rewind(), Some(marked(2)));
    assert!(history.is_live());
    let kept: Vec<Grid> = history.iter().cloned().collect();
    assert_eq!(kept, vec![marked(0), marked(1)]);
    assert_eq!(history.rewind(), None);
}

#[test]
fn test_set_capacity() {
    let mut history = HistoryStore::new(5);
    for i in 0..5 {
        history.push(marked(i));
    }
    history.step_back();
    history.step_back();
    history.step_back();
    history.step_back();

    assert_eq!(
        history.set_capacity(0),
        Err(LifeError::InvalidConfiguration {
            field: "history_length",
            value: 0
        })
    );
    assert_eq!(history.capacity(), 5);

    history.set_capacity(2).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.viewed(), Some(&marked(3)));

    history.clear();
    assert!(history.is_empty());
    assert!(history.is_live());
    assert_eq!(history.capacity(), 2);
}

#[test]
fn test_capacity_one_clears_instead_of_keeping_a_stale_snapshot() {
    let mut history = HistoryStore::new(5);
    history.push(marked(0));
    history.push(marked(1));
    history.step_back();

    history.set_capacity(1).unwrap();
    assert!(history.is_empty());
    assert!(history.is_live());
    assert!(!history.push(marked(2)));

    history.set_capacity(5).unwrap();
    assert!(history.push(marked(4)));
    let kept: Vec<Grid> = history.iter().cloned().collect();
    assert_eq!(kept, vec![marked(4)]);
    assert_eq!(past(history.step_back()), marked(4));
    assert!(history.step_back().is_none());
}
