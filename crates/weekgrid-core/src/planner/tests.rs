//! Tests for the planner module.

use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::{
    error::PlannerError,
    grid::{Geometry, ResizeEdge},
    models::{Day, TaskColor},
    params::{DragTask, MoveTask, NewTask, RecolorTask, RenameTask, ResizeTask, TaskRef},
};

/// Helper function to create a test planner backed by a database file
fn create_test_planner() -> (TempDir, PathBuf, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create planner");
    (temp_dir, db_path, planner)
}

fn reopen(db_path: &PathBuf) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to reopen planner")
}

#[test]
fn test_add_task_persists_across_reopen() {
    let (_temp_dir, db_path, mut planner) = create_test_planner();
    let task = planner
        .add_task(
            Day::Tue,
            NewTask {
                title: Some("Write report".to_string()),
                ..Default::default()
            },
        )
        .expect("Failed to add task");

    let reopened = reopen(&db_path);
    let (day, stored) = reopened.store().find(&task.id).expect("task should persist");
    assert_eq!(day, Day::Tue);
    assert_eq!(stored.title, "Write report");
}

#[test]
fn test_drag_persists_across_reopen() {
    let (_temp_dir, db_path, mut planner) = create_test_planner();
    let task = planner.add_task(Day::Mon, NewTask::default()).unwrap();

    let geometry = planner
        .drag_task(&DragTask {
            task: TaskRef::new(Day::Mon, &task.id),
            delta_y: 25.0,
        })
        .expect("Failed to drag task");
    assert_eq!(geometry, Geometry::new(180.0, 40.0));

    let reopened = reopen(&db_path);
    let stored = reopened.store().task(Day::Mon, &task.id).unwrap();
    assert_eq!(stored.start_min, 270);
}

#[test]
fn test_resize_unknown_task_is_error() {
    let (_temp_dir, _db_path, mut planner) = create_test_planner();
    let err = planner
        .resize_task(&ResizeTask {
            task: TaskRef::new(Day::Mon, "missing"),
            edge: ResizeEdge::Bottom,
            delta_y: 20.0,
        })
        .unwrap_err();
    assert!(matches!(err, PlannerError::TaskNotFound { .. }));
}

#[test]
fn test_resize_task() {
    let (_temp_dir, _db_path, mut planner) = create_test_planner();
    let task = planner.add_task(Day::Mon, NewTask::default()).unwrap();
    let geometry = planner
        .resize_task(&ResizeTask {
            task: TaskRef::new(Day::Mon, &task.id),
            edge: ResizeEdge::Bottom,
            delta_y: 29.0,
        })
        .unwrap();
    assert_eq!(geometry, Geometry::new(160.0, 60.0));
    assert_eq!(
        planner.store().task(Day::Mon, &task.id).unwrap().duration_min,
        90
    );
}

#[test]
fn test_rename_and_recolor() {
    let (_temp_dir, _db_path, mut planner) = create_test_planner();
    let task = planner.add_task(Day::Fri, NewTask::default()).unwrap();
    let task_ref = TaskRef::new(Day::Fri, &task.id);

    let renamed = planner
        .rename_task(&RenameTask {
            task: task_ref.clone(),
            title: "Retro".to_string(),
        })
        .unwrap();
    assert_eq!(renamed.title, "Retro");

    let cycled = planner
        .recolor_task(&RecolorTask {
            task: task_ref.clone(),
            color: None,
        })
        .unwrap();
    assert_eq!(cycled.color, TaskColor::Blue);

    let set = planner
        .recolor_task(&RecolorTask {
            task: task_ref,
            color: Some(TaskColor::Purple),
        })
        .unwrap();
    assert_eq!(set.color, TaskColor::Purple);

    let err = planner
        .rename_task(&RenameTask {
            task: TaskRef::new(Day::Sat, &task.id),
            title: "Wrong day".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, PlannerError::TaskNotFound { day: Day::Sat, .. }));
}

#[test]
fn test_move_and_remove() {
    let (_temp_dir, _db_path, mut planner) = create_test_planner();
    let task = planner.add_task(Day::Mon, NewTask::default()).unwrap();

    let moved = planner
        .move_task(&MoveTask {
            task: TaskRef::new(Day::Mon, &task.id),
            to: Day::Thu,
            drop_offset_px: 40.0,
            scroll_offset_px: 0.0,
        })
        .unwrap();
    assert_eq!(moved, Some(Geometry::new(40.0, 40.0)));
    assert_eq!(planner.resolve(&task.id).unwrap().day, Day::Thu);

    assert!(planner
        .remove_task(&TaskRef::new(Day::Mon, &task.id))
        .unwrap()
        .is_none());
    let removed = planner
        .remove_task(&TaskRef::new(Day::Thu, &task.id))
        .unwrap()
        .unwrap();
    assert_eq!(removed.start_min, 60);
    assert!(planner.state().is_empty());
}

#[test]
fn test_resolve_by_prefix() {
    let mut planner = PlannerBuilder::new().in_memory().build().unwrap();
    let task = planner.add_task(Day::Wed, NewTask::default()).unwrap();

    let by_prefix = planner.resolve(&task.id[..8]).unwrap();
    assert_eq!(by_prefix.id, task.id);
    assert_eq!(by_prefix.day, Day::Wed);
    assert!(planner.resolve("").is_err());
    assert!(planner.resolve("not-a-task").is_err());
}

#[test]
fn test_export_then_import() {
    let (temp_dir, _db_path, mut planner) = create_test_planner();
    let task = planner.add_task(Day::Sun, NewTask::default()).unwrap();
    let export_path = temp_dir.path().join("planner.json");
    planner.export_to(&export_path).unwrap();

    planner.clear().unwrap();
    assert!(planner.state().is_empty());

    let count = planner.import_from(&export_path).unwrap();
    assert_eq!(count, 1);
    assert_eq!(planner.store().task(Day::Sun, &task.id), Some(&task));
}

#[test]
fn test_import_rejection_keeps_state() {
    let (temp_dir, _db_path, mut planner) = create_test_planner();
    let task = planner.add_task(Day::Sun, NewTask::default()).unwrap();
    let bad_path = temp_dir.path().join("bad.json");
    std::fs::write(&bad_path, "[1, 2, 3]").unwrap();

    let err = planner.import_from(&bad_path).unwrap_err();
    assert!(matches!(err, PlannerError::ImportRejected { .. }));
    assert_eq!(planner.store().task(Day::Sun, &task.id), Some(&task));

    let missing = temp_dir.path().join("missing.json");
    assert!(matches!(
        planner.import_from(&missing).unwrap_err(),
        PlannerError::FileSystem { .. }
    ));
}

#[test]
fn test_rescale_then_drag_uses_new_scale() {
    let mut planner = PlannerBuilder::new().in_memory().build().unwrap();
    let task = planner.add_task(Day::Mon, NewTask::default()).unwrap();

    let layout = planner.rescale(36.0 * 40.0);
    assert_eq!(layout.slot_height_px, 40.0);
    assert_eq!(
        layout.placement(&task.id).unwrap().geometry,
        Geometry::new(320.0, 80.0)
    );

    // 345px at 40px per slot rounds onto slot 9
    let geometry = planner
        .drag_task(&DragTask {
            task: TaskRef::new(Day::Mon, &task.id),
            delta_y: 25.0,
        })
        .unwrap();
    assert_eq!(geometry, Geometry::new(360.0, 80.0));
    assert_eq!(planner.layout().slot_height_px, 40.0);
}

#[test]
fn test_builder_rejects_bad_configuration() {
    let bad_grid = crate::grid::GridConfig {
        slot_minutes: 7,
        ..Default::default()
    };
    assert!(PlannerBuilder::new()
        .in_memory()
        .with_grid(bad_grid)
        .build()
        .is_err());
    assert!(PlannerBuilder::new()
        .in_memory()
        .with_slot_height(Some(0.0))
        .build()
        .is_err());
}

#[test]
fn test_interact_drives_a_drag_session() {
    let mut planner = PlannerBuilder::new().in_memory().build().unwrap();
    let task = planner.add_task(Day::Mon, NewTask::default()).unwrap();

    let (engine, store) = planner.interact();
    let mut session = engine.begin_drag(store, Day::Mon, &task.id).unwrap();
    session.move_by(engine.scale(), 15.0);
    let provisional = session.move_by(engine.scale(), 14.0);
    assert_eq!(provisional, Geometry::new(189.0, 40.0));
    assert_eq!(store.task(Day::Mon, &task.id).unwrap().start_min, 240);

    let committed = engine.commit_drag(store, &session).unwrap();
    assert_eq!(committed, Some(Geometry::new(180.0, 40.0)));
    assert_eq!(
        planner.store().task(Day::Mon, &task.id).unwrap().start_min,
        270
    );
}

#[test]
fn test_custom_rescale_floor() {
    let mut planner = PlannerBuilder::new()
        .in_memory()
        .with_min_slot_height(16.0)
        .build()
        .unwrap();
    planner.add_task(Day::Mon, NewTask::default()).unwrap();

    assert_eq!(planner.rescale(100.0).slot_height_px, 16.0);
    assert_eq!(planner.rescale(36.0 * 30.0).slot_height_px, 30.0);
}
