use std::path::{Path, PathBuf};

use tempfile::TempDir;
use weekgrid_core::{Planner, PlannerBuilder};

/// Helper function to create a test planner backed by a temporary database
pub fn create_test_planner() -> (TempDir, PathBuf, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = open_planner(&db_path, None);
    (temp_dir, db_path, planner)
}

/// Opens (or reopens) a planner on an existing database file
pub fn open_planner(db_path: &Path, slot_height_px: Option<f64>) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_slot_height(slot_height_px)
        .build()
        .expect("Failed to open planner")
}
