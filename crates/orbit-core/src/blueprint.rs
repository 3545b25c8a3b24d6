//! Blueprint loading.
//!
//! A blueprint is a JSON document listing the volumes an interior occupies:
//!
//! ```json
//! {"volumes": [{"x_start": 0, "x_end": 4, "y_start": 0, "y_end": 2, "z_start": 0, "z_end": 1}]}
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::error::{OrbitError, Result};
use crate::grid::{build_grid, OccupancyGrid};
use crate::volume::Volume;

/// A parsed blueprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub volumes: Vec<Volume>,
}

impl Blueprint {
    /// Reads and parses a blueprint file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| OrbitError::file_access(path, e))?;
        let blueprint: Blueprint =
            serde_json::from_str(&text).map_err(|e| OrbitError::parse(path, e))?;
        log::info!(
            "loaded blueprint '{}' with {} volumes",
            path.display(),
            blueprint.volumes.len()
        );
        Ok(blueprint)
    }

    /// Parses a blueprint from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the occupancy grid and bounding box of this blueprint.
    #[must_use]
    pub fn build_grid(&self) -> (OccupancyGrid, BoundingBox) {
        build_grid(&self.volumes)
    }
}
