//! Scene objects and their links into the asset library.
//!
//! Assets live in the library under `database/<asset id>/asset.blend`. An
//! object instancing such an asset carries a library override pointing at the
//! reference object inside that file.

use std::path::Path;

use glam::Mat4;
use orbit_core::{OrbitError, Result};
use serde::{Deserialize, Serialize};

const DATABASE_MARKER: &str = "database";
const ASSET_FILE: &str = "asset.blend";

/// Extracts the numeric asset id from a library file path.
///
/// `//database/42/asset.blend` yields 42. The separators around the id may be
/// either slash style.
pub fn asset_id_from_path(library_path: &str) -> Result<u64> {
    let invalid = || OrbitError::InvalidAssetPath(library_path.to_string());

    let start = library_path.find(DATABASE_MARKER).ok_or_else(invalid)? + DATABASE_MARKER.len();
    let rest = &library_path[start..];
    let end = rest.rfind(ASSET_FILE).ok_or_else(invalid)?;

    // drop the separators on either side of the id
    let mut id = rest[..end].chars();
    id.next();
    id.next_back();
    id.as_str().parse().map_err(|_| invalid())
}

/// A material slot: the material's name and the library it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSlot {
    pub name: String,
    #[serde(default)]
    pub library_path: Option<String>,
}

/// The library object an override instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryReference {
    pub node_name: String,
    pub library_path: String,
    #[serde(default)]
    pub material_slots: Vec<MaterialSlot>,
}

/// Override information for an object linked from the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryOverride {
    /// The referenced library object. `None` when the link is broken.
    #[serde(default)]
    pub reference: Option<LibraryReference>,

    /// Material slots of the overridden mesh data, present only when the mesh
    /// data itself is overridden.
    #[serde(default)]
    pub material_slots: Option<Vec<MaterialSlot>>,
}

/// An object in the scene being exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(rename = "type", default = "default_object_type")]
    pub object_type: String,
    #[serde(default = "identity")]
    pub world: Mat4,
    #[serde(default)]
    pub library_override: Option<LibraryOverride>,
}

fn default_object_type() -> String {
    "MESH".to_string()
}

fn identity() -> Mat4 {
    Mat4::IDENTITY
}

impl SceneObject {
    /// Creates a plain (non-linked) object.
    pub fn new(name: impl Into<String>, world: Mat4) -> Self {
        Self {
            name: name.into(),
            object_type: default_object_type(),
            world,
            library_override: None,
        }
    }

    /// Attaches a library override.
    #[must_use]
    pub fn with_override(mut self, library_override: LibraryOverride) -> Self {
        self.library_override = Some(library_override);
        self
    }

    /// Returns true if this object instances a library asset.
    #[must_use]
    pub fn is_library_override(&self) -> bool {
        self.library_override.is_some()
    }
}

/// Reads a JSON array of scene objects.
pub fn load_scene_objects(path: impl AsRef<Path>) -> Result<Vec<SceneObject>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| OrbitError::file_access(path, e))?;
    serde_json::from_str(&text).map_err(|e| OrbitError::parse(path, e))
}
