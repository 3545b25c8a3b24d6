//! Integer bounding box over blueprint volumes.

use std::ops::Range;

use glam::{I64Vec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::volume::NormalizedVolume;

/// Axis-aligned integer bounding box of a set of volumes.
///
/// The box starts out as the degenerate box at the origin and only ever
/// grows, so it always contains `(0,0,0)` even when no volume touches it.
/// `max` is exclusive in the same sense as a volume's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: IVec3,
    pub max: IVec3,
}

impl BoundingBox {
    /// Creates the zero-seeded box at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a box from explicit corners.
    pub fn from_min_max(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Grows the box to cover a normalized volume.
    pub fn expand(&mut self, volume: &NormalizedVolume) {
        self.min = self.min.min(volume.start);
        self.max = self.max.max(volume.end);
    }

    /// Returns the union of two boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns the size of the box along each axis.
    ///
    /// Widened to `i64` since a box may span the whole `i32` range.
    #[must_use]
    pub fn extent(&self) -> I64Vec3 {
        self.max.as_i64vec3() - self.min.as_i64vec3()
    }

    /// Returns true if the box has zero size on every axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn x_range(&self) -> Range<i32> {
        self.min.x..self.max.x
    }

    pub fn y_range(&self) -> Range<i32> {
        self.min.y..self.max.y
    }

    pub fn z_range(&self) -> Range<i32> {
        self.min.z..self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::Volume;

    #[test]
    fn test_new_is_degenerate_at_origin() {
        let bb = BoundingBox::new();
        assert_eq!(bb.min, IVec3::ZERO);
        assert_eq!(bb.max, IVec3::ZERO);
        assert!(bb.is_degenerate());
    }

    #[test]
    fn test_expand_keeps_origin_for_positive_input() {
        let mut bb = BoundingBox::new();
        let v = Volume::from_corners(IVec3::new(5, 6, 7), IVec3::new(8, 9, 10));
        bb.expand(&v.normalized());
        assert_eq!(bb.min, IVec3::ZERO);
        assert_eq!(bb.max, IVec3::new(8, 9, 10));
    }

    #[test]
    fn test_expand_keeps_origin_for_negative_input() {
        let mut bb = BoundingBox::new();
        let v = Volume::from_corners(IVec3::new(-4, -3, -2), IVec3::new(-2, -1, -1));
        bb.expand(&v.normalized());
        assert_eq!(bb.min, IVec3::new(-4, -3, -2));
        assert_eq!(bb.max, IVec3::ZERO);
    }

    #[test]
    fn test_extent_spanning_full_range() {
        let bb = BoundingBox::from_min_max(IVec3::splat(i32::MIN), IVec3::splat(i32::MAX));
        assert_eq!(bb.extent(), I64Vec3::splat(i64::from(u32::MAX)));
    }

    #[test]
    fn test_union_and_extent() {
        let a = BoundingBox::from_min_max(IVec3::new(-1, 0, 0), IVec3::new(2, 2, 1));
        let b = BoundingBox::from_min_max(IVec3::ZERO, IVec3::new(1, 5, 3));
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::from_min_max(IVec3::new(-1, 0, 0), IVec3::new(2, 5, 3)));
        assert_eq!(u.extent(), I64Vec3::new(3, 5, 3));
        assert_eq!(u.z_range(), 0..3);
    }
}
