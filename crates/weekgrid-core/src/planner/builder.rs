//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Planner;
use crate::{
    db::Database,
    error::{FileSystemResultExt, PlannerError, Result},
    grid::{GridConfig, TimeScale, DEFAULT_SLOT_HEIGHT_PX, MIN_SLOT_HEIGHT_PX},
    layout::LayoutEngine,
    store::{MemoryBackend, StateBackend, TaskStore},
    viewport::ViewportRescaler,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
    grid: GridConfig,
    slot_height_px: f64,
    min_slot_height_px: f64,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            in_memory: false,
            grid: GridConfig::default(),
            slot_height_px: DEFAULT_SLOT_HEIGHT_PX,
            min_slot_height_px: MIN_SLOT_HEIGHT_PX,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/weekgrid/weekgrid.db` or
    /// `~/.local/share/weekgrid/weekgrid.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps the state in memory only; nothing is written to disk.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Sets the slot size and visible hours.
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the initial pixels per slot.
    pub fn with_slot_height(mut self, slot_height_px: Option<f64>) -> Self {
        if let Some(px) = slot_height_px {
            self.slot_height_px = px;
        }
        self
    }

    /// Sets the smallest slot height the viewport rescaler may produce.
    pub fn with_min_slot_height(mut self, min_slot_height_px: f64) -> Self {
        self.min_slot_height_px = min_slot_height_px;
        self
    }

    /// Builds the configured planner instance and loads its state.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the grid or slot height is invalid
    /// Returns `PlannerError::FileSystem` if the database directory cannot be created
    /// Returns `PlannerError::Database` if database initialization fails
    pub fn build(self) -> Result<Planner> {
        self.grid.validate()?;
        if !(self.slot_height_px.is_finite() && self.slot_height_px > 0.0) {
            return Err(PlannerError::invalid_input("slot_height")
                .with_reason(format!("{} is not a positive size", self.slot_height_px)));
        }

        let backend: Box<dyn StateBackend> = if self.in_memory {
            Box::new(MemoryBackend::new())
        } else {
            let db_path = match self.database_path {
                Some(path) => path,
                None => Self::default_database_path()?,
            };
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent).fs_context(parent)?;
            }
            debug!("Opening planner database at {}", db_path.display());
            Box::new(Database::new(&db_path)?)
        };

        let store = TaskStore::open(self.grid, backend);
        let engine = LayoutEngine::new(TimeScale::new(self.grid, self.slot_height_px));
        let rescaler = ViewportRescaler::new(self.min_slot_height_px);

        Ok(Planner::new(store, engine, rescaler))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("weekgrid")
            .place_data_file("weekgrid.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
