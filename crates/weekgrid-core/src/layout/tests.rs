//! Tests for the layout engine.

use super::*;
use crate::{
    grid::{GridConfig, ResizeEdge},
    params::NewTask,
    store::{MemoryBackend, StateBackend},
};

fn setup(slot_height_px: f64) -> (LayoutEngine, TaskStore, String) {
    let config = GridConfig::default();
    let mut store = TaskStore::open(config, Box::new(MemoryBackend::new()));
    let task = store.add_task(
        Day::Mon,
        NewTask {
            title: Some("Focus".to_string()),
            start_min: Some(240),
            duration_min: Some(60),
            ..Default::default()
        },
    );
    let engine = LayoutEngine::new(TimeScale::new(config, slot_height_px));
    (engine, store, task.id)
}

fn span(store: &TaskStore, day: Day, id: &str) -> (u32, u32) {
    let task = store.task(day, id).expect("task should exist");
    (task.start_min, task.duration_min)
}

#[test]
fn test_initial_geometry() {
    let (engine, store, id) = setup(20.0);
    assert_eq!(
        engine.geometry_of(&store, Day::Mon, &id),
        Some(Geometry::new(160.0, 40.0))
    );
}

#[test]
fn test_drag_down_snaps_to_nearest_slot() {
    let (engine, mut store, id) = setup(20.0);
    let mut session = engine.begin_drag(&store, Day::Mon, &id).unwrap();
    let live = session.move_to(engine.scale(), 25.0);
    assert_eq!(live.top_px, 185.0);

    // Live movement does not touch canonical fields
    assert_eq!(span(&store, Day::Mon, &id), (240, 60));

    let committed = engine.commit_drag(&mut store, &session).unwrap().unwrap();
    assert_eq!(committed, Geometry::new(180.0, 40.0));
    assert_eq!(span(&store, Day::Mon, &id), (270, 60));
}

#[test]
fn test_commit_persists_state() {
    let (engine, mut store, id) = setup(20.0);
    let mut session = engine.begin_drag(&store, Day::Mon, &id).unwrap();
    session.move_to(engine.scale(), 40.0);
    engine.commit_drag(&mut store, &session).unwrap();

    let written = store.backend().read().unwrap().unwrap();
    assert!(written.contains("\"startMin\":300"));
}

#[test]
fn test_abandoned_drag_changes_nothing() {
    let (engine, store, id) = setup(20.0);
    let mut session = engine.begin_drag(&store, Day::Mon, &id).unwrap();
    session.move_to(engine.scale(), 300.0);
    drop(session);
    assert_eq!(span(&store, Day::Mon, &id), (240, 60));
    assert!(store.backend().read().unwrap().is_none());
}

#[test]
fn test_drag_past_bottom_stays_inside_day() {
    let (engine, mut store, id) = setup(20.0);
    let mut session = engine.begin_drag(&store, Day::Mon, &id).unwrap();
    session.move_to(engine.scale(), 5000.0);
    engine.commit_drag(&mut store, &session).unwrap();
    assert_eq!(span(&store, Day::Mon, &id), (1020, 60));
}

#[test]
fn test_resize_bottom_snaps_height() {
    let (engine, mut store, id) = setup(20.0);
    let mut session = engine.begin_resize(&store, Day::Mon, &id).unwrap();
    let live = session.move_edge(engine.scale(), ResizeEdge::Bottom, 7.0);
    assert_eq!(live.height_px, 47.0);

    let committed = engine.commit_resize(&mut store, &session).unwrap().unwrap();
    assert_eq!(committed.height_px, 40.0);
    let (start, duration) = span(&store, Day::Mon, &id);
    assert_eq!(start, 240);
    assert_eq!(duration, 60);
    assert_eq!(duration % 30, 0);
}

#[test]
fn test_resize_top_moves_start() {
    let (engine, mut store, id) = setup(20.0);
    let mut session = engine.begin_resize(&store, Day::Mon, &id).unwrap();
    session.move_edge(engine.scale(), ResizeEdge::Top, -38.0);
    engine.commit_resize(&mut store, &session).unwrap();
    // Top 122 snaps to 120, height 78 snaps to 80
    assert_eq!(span(&store, Day::Mon, &id), (180, 120));
}

#[test]
fn test_resize_cannot_collapse_below_one_slot() {
    let (engine, mut store, id) = setup(20.0);
    let mut session = engine.begin_resize(&store, Day::Mon, &id).unwrap();
    session.move_edge(engine.scale(), ResizeEdge::Bottom, -500.0);
    engine.commit_resize(&mut store, &session).unwrap();
    assert_eq!(span(&store, Day::Mon, &id), (240, 30));
}

#[test]
fn test_begin_on_missing_task() {
    let (engine, store, _) = setup(20.0);
    assert!(engine.begin_drag(&store, Day::Mon, "missing").is_none());
    assert!(engine.begin_resize(&store, Day::Tue, "missing").is_none());
}

#[test]
fn test_commit_after_task_removed() {
    let (engine, mut store, id) = setup(20.0);
    let session = engine.begin_drag(&store, Day::Mon, &id).unwrap();
    store.remove_task(Day::Mon, &id);
    assert_eq!(engine.commit_drag(&mut store, &session).unwrap(), None);
}

#[test]
fn test_settle_is_idempotent() {
    for slot_height in [12.0, 19.5, 20.0, 24.0, 40.0] {
        let (engine, mut store, id) = setup(slot_height);
        let first = engine.settle(&mut store, Day::Mon, &id).unwrap();
        let after_first = span(&store, Day::Mon, &id);
        let second = engine.settle(&mut store, Day::Mon, &id).unwrap();
        assert_eq!(first, second);
        assert_eq!(after_first, (240, 60));
        assert_eq!(span(&store, Day::Mon, &id), after_first);
    }
}

#[test]
fn test_move_to_day_places_at_drop_point() {
    let (engine, mut store, id) = setup(20.0);
    let committed = engine
        .move_to_day(&mut store, Day::Mon, Day::Wed, &id, 95.0, 10.0)
        .unwrap()
        .unwrap();
    // 105px snaps to 100px, which is 150 minutes after the day start
    assert_eq!(committed, Geometry::new(100.0, 40.0));
    assert!(store.state().bucket(Day::Mon).is_empty());
    assert_eq!(store.state().bucket(Day::Wed).len(), 1);
    assert_eq!(span(&store, Day::Wed, &id), (150, 60));
}

#[test]
fn test_move_to_day_near_bottom_keeps_block_inside() {
    let (engine, mut store, id) = setup(20.0);
    engine
        .move_to_day(&mut store, Day::Mon, Day::Sun, &id, 715.0, 0.0)
        .unwrap();
    assert_eq!(span(&store, Day::Sun, &id), (1020, 60));
}

#[test]
fn test_move_to_day_missing_task_changes_nothing() {
    let (engine, mut store, id) = setup(20.0);
    let before = store.state().clone();
    let result = engine
        .move_to_day(&mut store, Day::Tue, Day::Wed, &id, 100.0, 0.0)
        .unwrap();
    assert_eq!(result, None);
    assert_eq!(store.state(), &before);
}

#[test]
fn test_move_to_same_day_is_noop() {
    let (engine, mut store, id) = setup(20.0);
    let result = engine
        .move_to_day(&mut store, Day::Mon, Day::Mon, &id, 500.0, 0.0)
        .unwrap();
    assert_eq!(result, Some(Geometry::new(160.0, 40.0)));
    assert_eq!(span(&store, Day::Mon, &id), (240, 60));
}
