//! Axis-aligned integer volumes as they appear in blueprints.

use std::ops::Range;

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned integer box marking a region as occupied.
///
/// Start and end may be given in either order on every axis; use
/// [`Volume::normalized`] to get a consistent `min..max` form. The end is
/// exclusive, so a volume with `start == end` on any axis covers no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Volume {
    pub x_start: i32,
    pub x_end: i32,
    pub y_start: i32,
    pub y_end: i32,
    pub z_start: i32,
    pub z_end: i32,
}

impl Volume {
    /// Creates a volume spanning the two corners `a` and `b`.
    pub fn from_corners(a: IVec3, b: IVec3) -> Self {
        Self {
            x_start: a.x,
            x_end: b.x,
            y_start: a.y,
            y_end: b.y,
            z_start: a.z,
            z_end: b.z,
        }
    }

    /// Returns this volume with `start <= end` on every axis.
    #[must_use]
    pub fn normalized(&self) -> NormalizedVolume {
        let a = IVec3::new(self.x_start, self.y_start, self.z_start);
        let b = IVec3::new(self.x_end, self.y_end, self.z_end);
        NormalizedVolume {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

/// A volume whose start is componentwise less than or equal to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedVolume {
    /// Inclusive lower corner.
    pub start: IVec3,
    /// Exclusive upper corner.
    pub end: IVec3,
}

impl NormalizedVolume {
    pub fn x_range(&self) -> Range<i32> {
        self.start.x..self.end.x
    }

    pub fn y_range(&self) -> Range<i32> {
        self.start.y..self.end.y
    }

    pub fn z_range(&self) -> Range<i32> {
        self.start.z..self.end.z
    }

    /// Returns the number of unit cells covered.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        // widened first so extreme corners cannot overflow; start <= end
        // holds, so every component is non-negative
        let size = self.end.as_i64vec3() - self.start.as_i64vec3();
        size.x.unsigned_abs() * size.y.unsigned_abs() * size.z.unsigned_abs()
    }

    /// Returns true if the volume covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Returns whether `cell` lies inside the half-open box.
    #[must_use]
    pub fn contains(&self, cell: IVec3) -> bool {
        cell.cmpge(self.start).all() && cell.cmplt(self.end).all()
    }

    /// Iterates every covered cell, x outermost.
    pub fn cells(&self) -> impl Iterator<Item = IVec3> {
        let (ys, zs) = (self.y_range(), self.z_range());
        self.x_range().flat_map(move |x| {
            let zs = zs.clone();
            ys.clone()
                .flat_map(move |y| zs.clone().map(move |z| IVec3::new(x, y, z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_swaps_inverted_axes() {
        let v = Volume {
            x_start: 3,
            x_end: -1,
            y_start: 0,
            y_end: 2,
            z_start: 5,
            z_end: 4,
        };
        let n = v.normalized();
        assert_eq!(n.start, IVec3::new(-1, 0, 4));
        assert_eq!(n.end, IVec3::new(3, 2, 5));
    }

    #[test]
    fn test_cell_count_and_iteration() {
        let n = Volume::from_corners(IVec3::ZERO, IVec3::new(2, 3, 1)).normalized();
        assert_eq!(n.cell_count(), 6);
        assert_eq!(n.cells().count(), 6);
        assert!(n.cells().all(|c| n.contains(c)));
    }

    #[test]
    fn test_zero_size_axis_is_empty() {
        let n = Volume::from_corners(IVec3::ZERO, IVec3::new(4, 0, 4)).normalized();
        assert!(n.is_empty());
        assert_eq!(n.cells().count(), 0);
    }

    #[test]
    fn test_cell_count_spanning_full_range() {
        let n = Volume::from_corners(IVec3::new(i32::MIN, 0, 0), IVec3::new(i32::MAX, 1, 1))
            .normalized();
        assert_eq!(n.cell_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_contains_is_end_exclusive() {
        let n = Volume::from_corners(IVec3::new(-2, -2, -2), IVec3::ZERO).normalized();
        assert!(n.contains(IVec3::new(-2, -2, -2)));
        assert!(n.contains(IVec3::new(-1, -1, -1)));
        assert!(!n.contains(IVec3::ZERO));
    }

    #[test]
    fn test_deserialize_blueprint_keys() {
        let json = r#"{"x_start":0,"x_end":2,"y_start":0,"y_end":1,"z_start":0,"z_end":1}"#;
        let v: Volume = serde_json::from_str(json).unwrap();
        assert_eq!(v, Volume::from_corners(IVec3::ZERO, IVec3::new(2, 1, 1)));
    }
}
