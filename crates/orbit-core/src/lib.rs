//! Core abstractions for orbit-tools.
//!
//! This crate provides the fundamental types used throughout orbit-tools:
//! - [`Volume`] and [`Blueprint`] for describing the space an interior occupies
//! - [`OccupancyGrid`], [`BoundingBox`] and [`GridBuilder`] for rasterizing it
//! - Wall adjacency queries ([`wall_required`], [`walls_for`])
//! - [`SceneTree`], an owned node hierarchy for constructed content
//! - The shared [`OrbitError`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod blueprint;
pub mod bounds;
pub mod error;
pub mod grid;
pub mod scene;
pub mod volume;
pub mod walls;

pub use blueprint::Blueprint;
pub use bounds::BoundingBox;
pub use error::{OrbitError, Result};
pub use grid::{build_grid, GridBuilder, OccupancyGrid};
pub use scene::{NodeId, NodeKind, SceneNode, SceneTree};
pub use volume::{NormalizedVolume, Volume};
pub use walls::{wall_required, walls_for, WallDirection, WallSet};

// Re-export glam types for convenience
pub use glam::{IVec3, Mat4, Quat, Vec3};
