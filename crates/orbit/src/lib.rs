//! orbit-tools: content pipeline utilities for Project Orbit.
//!
//! The toolkit covers three jobs:
//!
//! - **Interiors**: a JSON blueprint of integer volumes is rasterized into a
//!   sparse occupancy grid, and a scene hierarchy of levels and cells is
//!   built from it, with floor and wall instances where a cell borders empty
//!   space.
//! - **Scene export**: objects linked from the asset library are described
//!   as `project_orbit_data` metadata instead of being exported as geometry.
//! - **Library collection**: third-party DLLs are gathered into debug and
//!   optimized folders with name lists for project files.
//!
//! # Quick Start
//!
//! ```no_run
//! use orbit::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::new(SessionConfig::with_blueprint("blueprint.json"));
//!     session.options_mut().add_meshes = true;
//!
//!     let interior = session.construct()?;
//!     println!("{} cells", interior.stats().cells);
//!
//!     let removed = session.delete()?;
//!     println!("removed {} nodes", removed.len());
//!     Ok(())
//! }
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

mod session;

pub use session::{Session, SessionConfig};

// Re-export core types
pub use orbit_core::{
    build_grid, wall_required, walls_for, Blueprint, BoundingBox, GridBuilder, IVec3, Mat4,
    NodeId, NodeKind, NormalizedVolume, OccupancyGrid, OrbitError, Quat, Result, SceneNode,
    SceneTree, Vec3, Volume, WallDirection, WallSet,
};

// Re-export interior construction
pub use orbit_interior::{
    build_from_blueprint, build_interior, Interior, InteriorOptions, InteriorStats, MeshAssets,
};

// Re-export scene export
pub use orbit_export::{
    asset_id_from_path, load_scene_objects, plan_export, ExportPlan, GltfTransform,
    LibraryOverride, LibraryReference, MaterialSlot, SceneObject, EXTRAS_KEY,
};

// Re-export library collection
pub use orbit_libs::{collect, CollectReport, CollectorConfig, LibraryLists};

/// Initializes logging for command-line use.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it twice is harmless.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
