//! Conversion from the authoring frame (Z-up) to glTF's frame (Y-up).

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Converts a location to glTF axes: `[x, z, -y]`.
#[must_use]
pub fn location_to_gltf(v: Vec3) -> [f32; 3] {
    [v.x, v.z, -v.y]
}

/// Converts a rotation to glTF axes, scalar first: `[w, x, z, -y]`.
#[must_use]
pub fn rotation_to_gltf(q: Quat) -> [f32; 4] {
    [q.w, q.x, q.z, -q.y]
}

/// Converts a scale to glTF axes: `[x, z, y]`.
#[must_use]
pub fn scale_to_gltf(s: Vec3) -> [f32; 3] {
    [s.x, s.z, s.y]
}

/// A world transform decomposed and expressed in glTF axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GltfTransform {
    pub location: [f32; 3],
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl GltfTransform {
    /// Decomposes a world matrix and converts every part.
    ///
    /// Scale is always the positive length of each basis axis. A mirrored
    /// basis (negative determinant) is negated before the rotation is taken,
    /// so mirroring shows up in the rotation rather than as a negative scale.
    #[must_use]
    pub fn from_world(world: &Mat4) -> Self {
        let basis = Mat3::from_mat4(*world);
        let scale = Vec3::new(
            basis.x_axis.length(),
            basis.y_axis.length(),
            basis.z_axis.length(),
        );
        let mut unit = Mat3::from_cols(
            basis.x_axis.normalize_or_zero(),
            basis.y_axis.normalize_or_zero(),
            basis.z_axis.normalize_or_zero(),
        );
        if unit.determinant() < 0.0 {
            unit = unit * -1.0;
        }
        let rotation = Quat::from_mat3(&unit);

        Self {
            location: location_to_gltf(world.w_axis.truncate()),
            rotation: rotation_to_gltf(rotation),
            scale: scale_to_gltf(scale),
        }
    }
}
