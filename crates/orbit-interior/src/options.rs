//! Configuration options for interior construction.

use std::path::Path;

use glam::Vec3;
use orbit_core::{OrbitError, Result};
use serde::{Deserialize, Serialize};

/// Options controlling how an occupancy grid is turned into a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteriorOptions {
    /// World-space size of a cell along x.
    pub cell_width: f32,

    /// World-space size of a cell along y.
    pub cell_depth: f32,

    /// World-space height of a level.
    pub cell_height: f32,

    /// Whether to place floor and wall mesh instances.
    pub add_meshes: bool,

    /// Mesh assets used when `add_meshes` is set.
    pub assets: MeshAssets,
}

impl Default for InteriorOptions {
    fn default() -> Self {
        Self {
            cell_width: 1.0,
            cell_depth: 1.0,
            cell_height: 2.5,
            add_meshes: false,
            assets: MeshAssets::default(),
        }
    }
}

impl InteriorOptions {
    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| OrbitError::file_access(path, e))?;
        serde_json::from_str(&text).map_err(|e| OrbitError::parse(path, e))
    }

    /// Enables or disables mesh placement.
    #[must_use]
    pub fn with_meshes(mut self, add_meshes: bool) -> Self {
        self.add_meshes = add_meshes;
        self
    }

    /// Returns the cell size as (width, depth, height).
    #[must_use]
    pub fn cell_size(&self) -> Vec3 {
        Vec3::new(self.cell_width, self.cell_depth, self.cell_height)
    }
}

/// Paths of the mesh assets instanced into cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshAssets {
    pub floor: String,
    pub wall: String,
}

impl Default for MeshAssets {
    fn default() -> Self {
        Self {
            floor: "../../assets/environment/hallway_floor_00.glb".to_string(),
            wall: "../../assets/environment/hallway_wall_00.glb".to_string(),
        }
    }
}
