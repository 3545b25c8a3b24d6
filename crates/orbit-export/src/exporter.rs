//! Export planning for Project Orbit scenes.
//!
//! Objects instancing library assets are not written as geometry. Instead
//! they are listed in a `project_orbit_data` block stored in the scene extras,
//! so the game can load the referenced assets itself. Everything else is
//! exported as-is.

use std::path::Path;

use orbit_core::{OrbitError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::gltf::GltfTransform;
use crate::library::{
    asset_id_from_path, LibraryOverride, LibraryReference, MaterialSlot, SceneObject,
};

/// Key of the metadata block in the scene extras.
pub const EXTRAS_KEY: &str = "project_orbit_data";

/// Mesh an exported library object points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshRef {
    pub node_name: String,
    pub asset_id: u64,
}

/// A material replaced on an overridden library object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialOverride {
    pub original_name: String,
    pub replacement_name: String,
    pub asset_id: u64,
}

/// Metadata for one library object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryObjectData {
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub location: [f32; 3],
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
    pub mesh: MeshRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_materials_override: Option<Vec<MaterialOverride>>,
}

/// The metadata block stored in the scene extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectOrbitData {
    pub library_objects: Vec<LibraryObjectData>,
}

/// What to export and which metadata to attach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportPlan {
    /// Names of objects exported as geometry, in scene order.
    pub export_objects: Vec<String>,
    /// Metadata for library objects.
    pub data: ProjectOrbitData,
}

impl ExportPlan {
    /// Returns the scene extras carrying the metadata block.
    #[must_use]
    pub fn extras(&self) -> Value {
        json!({ EXTRAS_KEY: self.data })
    }

    /// Returns the whole plan as JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "export_objects": self.export_objects,
            "extras": self.extras(),
        })
    }

    /// Writes the plan as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(&self.to_json())?;
        std::fs::write(path, text).map_err(|e| OrbitError::file_access(path, e))?;
        log::info!("wrote export plan to '{}'", path.display());
        Ok(())
    }
}

/// Splits the scene into directly exported objects and library metadata.
///
/// Library objects whose reference is missing are logged and skipped.
pub fn plan_export(objects: &[SceneObject]) -> Result<ExportPlan> {
    let mut plan = ExportPlan::default();

    for object in objects {
        let Some(library_override) = &object.library_override else {
            plan.export_objects.push(object.name.clone());
            continue;
        };
        let Some(reference) = &library_override.reference else {
            log::warn!("Faulty object: {} has no library reference", object.name);
            continue;
        };
        plan.data
            .library_objects
            .push(library_object_data(object, reference, library_override)?);
    }

    log::info!(
        "export plan: {} objects, {} library objects",
        plan.export_objects.len(),
        plan.data.library_objects.len()
    );
    Ok(plan)
}

fn library_object_data(
    object: &SceneObject,
    reference: &LibraryReference,
    library_override: &LibraryOverride,
) -> Result<LibraryObjectData> {
    let transform = GltfTransform::from_world(&object.world);
    let materials = match &library_override.material_slots {
        Some(slots) => Some(material_overrides(object, reference, slots)?),
        None => None,
    };

    Ok(LibraryObjectData {
        name: object.name.clone(),
        object_type: object.object_type.clone(),
        location: transform.location,
        rotation: transform.rotation,
        scale: transform.scale,
        mesh: MeshRef {
            node_name: reference.node_name.clone(),
            asset_id: asset_id_from_path(&reference.library_path)?,
        },
        library_materials_override: materials,
    })
}

fn material_overrides(
    object: &SceneObject,
    reference: &LibraryReference,
    replacements: &[MaterialSlot],
) -> Result<Vec<MaterialOverride>> {
    if replacements.len() != reference.material_slots.len() {
        return Err(OrbitError::MaterialSlotMismatch {
            object: object.name.clone(),
            expected: reference.material_slots.len(),
            actual: replacements.len(),
        });
    }

    reference
        .material_slots
        .iter()
        .zip(replacements)
        .map(|(original, replacement)| -> Result<MaterialOverride> {
            let library_path =
                replacement
                    .library_path
                    .as_deref()
                    .ok_or_else(|| OrbitError::UnlinkedMaterial {
                        object: object.name.clone(),
                        material: replacement.name.clone(),
                    })?;
            Ok(MaterialOverride {
                original_name: original.name.clone(),
                replacement_name: replacement.name.clone(),
                asset_id: asset_id_from_path(library_path)?,
            })
        })
        .collect()
}
