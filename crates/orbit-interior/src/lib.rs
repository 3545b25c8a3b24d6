//! Interior construction for orbit-tools.
//!
//! Turns a blueprint's occupancy grid into an owned scene hierarchy of
//! levels and cells, optionally with floor and wall mesh instances placed
//! according to wall adjacency.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod options;

pub use builder::{
    build_from_blueprint, build_interior, level_name, wall_rotation, Interior, InteriorStats,
    CELL_NAME, FLOOR_NAME, ROOT_NAME,
};
pub use options::{InteriorOptions, MeshAssets};
