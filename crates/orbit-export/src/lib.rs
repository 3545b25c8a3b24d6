//! Scene export metadata for orbit-tools.
//!
//! Decides which scene objects are exported as geometry and builds the
//! `project_orbit_data` block describing objects linked from the asset
//! library, in glTF axes.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod exporter;
pub mod gltf;
pub mod library;

pub use exporter::{
    plan_export, ExportPlan, LibraryObjectData, MaterialOverride, MeshRef, ProjectOrbitData,
    EXTRAS_KEY,
};
pub use gltf::{location_to_gltf, rotation_to_gltf, scale_to_gltf, GltfTransform};
pub use library::{
    asset_id_from_path, load_scene_objects, LibraryOverride, LibraryReference, MaterialSlot,
    SceneObject,
};
