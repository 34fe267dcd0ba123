use floorplan_designer::model::{Color, Layer, Shape, ShapeType};
use floorplan_designer::{History, WorldPoint};

fn line(x: f64) -> Shape {
    Shape::new(
        ShapeType::Line,
        Layer::Paths,
        0.25,
        Color::PATHS,
        vec![WorldPoint::new(x, 0.0), WorldPoint::new(x, 10.0)],
    )
    .unwrap()
}

#[test]
fn test_new_history_holds_initial_state() {
    let history = History::new(&[], 50);
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_redo_walks_snapshots() {
    let a = line(1.0);
    let b = line(2.0);
    let mut history = History::new(&[], 50);
    history.checkpoint(&[a.clone()]);
    history.checkpoint(&[a.clone(), b.clone()]);

    assert_eq!(history.undo(), Some(vec![a.clone()]));
    assert_eq!(history.undo(), Some(vec![]));
    assert_eq!(history.undo(), None);

    assert_eq!(history.redo(), Some(vec![a.clone()]));
    assert_eq!(history.redo(), Some(vec![a, b]));
    assert_eq!(history.redo(), None);
}

#[test]
fn test_checkpoint_discards_redo_tail() {
    let mut history = History::new(&[], 50);
    history.checkpoint(&[line(1.0)]);
    history.checkpoint(&[line(1.0), line(2.0)]);
    history.undo();
    assert!(history.can_redo());

    history.checkpoint(&[line(3.0)]);
    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);
    assert_eq!(history.index(), 2);
}

#[test]
fn test_capacity_drops_oldest() {
    let mut history = History::new(&[], 3);
    for i in 0..5 {
        history.checkpoint(&[line(i as f64)]);
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.index(), 2);
    assert_eq!(history.snapshot(0).unwrap()[0].vertices_ft[0].x, 2.0);

    history.undo();
    history.undo();
    assert!(!history.can_undo());
}

#[test]
fn test_set_capacity_keeps_cursor_valid() {
    let mut history = History::new(&[], 10);
    for i in 0..6 {
        history.checkpoint(&[line(i as f64)]);
    }
    history.set_capacity(2);
    assert_eq!(history.len(), 2);
    assert_eq!(history.index(), 1);
    assert!(history.can_undo());
}

#[test]
fn test_set_capacity_after_undo_keeps_live_snapshot() {
    let mut history = History::new(&[], 10);
    for i in 0..6 {
        history.checkpoint(&[line(i as f64)]);
    }
    for _ in 0..4 {
        history.undo();
    }
    let live = history.snapshot(history.index()).unwrap().to_vec();
    assert_eq!(live[0].vertices_ft[0].x, 1.0);

    history.set_capacity(2);
    assert_eq!(history.len(), 2);
    assert_eq!(history.snapshot(history.index()).unwrap(), live.as_slice());
    assert!(!history.can_redo());
    assert_eq!(history.undo().unwrap()[0].vertices_ft[0].x, 0.0);
    assert_eq!(history.redo(), Some(live));
}

#[test]
fn test_set_capacity_drops_redo_tail_first() {
    let mut history = History::new(&[], 10);
    for i in 0..4 {
        history.checkpoint(&[line(i as f64)]);
    }
    history.undo();
    history.undo();

    history.set_capacity(4);
    assert_eq!(history.len(), 4);
    assert_eq!(history.index(), 2);
    assert!(history.can_redo());
    assert_eq!(history.redo().unwrap()[0].vertices_ft[0].x, 2.0);
    assert!(!history.can_redo());
}

#[test]
fn test_snapshots_are_independent_of_live_shapes() {
    let mut live = vec![line(1.0)];
    let mut history = History::new(&[], 50);
    history.checkpoint(&live);

    live[0].translate(WorldPoint::new(100.0, 0.0));
    assert_eq!(history.snapshot(1).unwrap()[0].vertices_ft[0].x, 1.0);

    let mut restored = history.undo().unwrap();
    restored.push(line(9.0));
    assert!(history.snapshot(0).unwrap().is_empty());
}

#[test]
fn test_reset_starts_over() {
    let mut history = History::new(&[], 50);
    history.checkpoint(&[line(1.0)]);
    history.reset(&[line(5.0)]);
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
    assert_eq!(history.snapshot(0).unwrap().len(), 1);
}
