use super::*;

fn snap(seed: u32) -> Parameters {
    Parameters {
        seed,
        ..Parameters::default()
    }
}

#[test]
fn undo_redo_walks_snapshots() {
    let mut h = ParamHistory::default();
    assert!(h.is_empty());
    assert!(!h.can_undo() && !h.can_redo());
    h.push(snap(1));
    h.push(snap(2));
    h.push(snap(3));
    assert_eq!(h.undo().map(|p| p.seed), Some(2));
    assert_eq!(h.undo().map(|p| p.seed), Some(1));
    assert!(h.undo().is_none());
    assert_eq!(h.redo().map(|p| p.seed), Some(2));
    assert_eq!(h.current().map(|p| p.seed), Some(2));
    assert!(h.can_redo());
}

#[test]
fn push_drops_redo_tail() {
    let mut h = ParamHistory::default();
    for s in 1..=3 {
        h.push(snap(s));
    }
    h.undo();
    h.undo();
    h.push(snap(9));
    assert!(!h.can_redo());
    assert_eq!(h.len(), 2);
    assert_eq!(h.undo().map(|p| p.seed), Some(1));
}

#[test]
fn capacity_evicts_oldest() {
    let mut h = ParamHistory::default();
    for s in 0..(HISTORY_CAPACITY as u32 + 5) {
        h.push(snap(s));
    }
    assert_eq!(h.len(), HISTORY_CAPACITY);
    while h.can_undo() {
        h.undo();
    }
    assert_eq!(h.current().map(|p| p.seed), Some(5));
}

#[test]
fn small_capacity() {
    let mut h = ParamHistory::with_capacity(0);
    h.push(snap(1));
    h.push(snap(2));
    assert_eq!(h.len(), 1);
    assert!(!h.can_undo());
    assert_eq!(h.current().map(|p| p.seed), Some(2));
}
