//! Wall adjacency over an occupancy grid.
//!
//! An occupied cell needs a wall on every horizontal side whose neighbour is
//! unoccupied. Top and bottom faces never get walls. All queries only read the
//! grid, so they can be issued for any number of cells in any order.

use std::fmt;

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::grid::OccupancyGrid;

/// One of the four horizontal directions a wall can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallDirection {
    /// Towards `-x`.
    NegX,
    /// Towards `+x`.
    PosX,
    /// Towards `-y`.
    NegY,
    /// Towards `+y`.
    PosY,
}

impl WallDirection {
    /// All directions, in the order walls are placed.
    pub const ALL: [WallDirection; 4] = [Self::NegX, Self::PosX, Self::PosY, Self::NegY];

    /// Returns the offset to the neighbouring cell.
    #[must_use]
    pub const fn offset(self) -> IVec3 {
        match self {
            Self::NegX => IVec3::new(-1, 0, 0),
            Self::PosX => IVec3::new(1, 0, 0),
            Self::NegY => IVec3::new(0, -1, 0),
            Self::PosY => IVec3::new(0, 1, 0),
        }
    }

    /// Returns the name given to a wall instance facing this way.
    #[must_use]
    pub const fn node_name(self) -> &'static str {
        match self {
            Self::NegX => "wall_right",
            Self::PosX => "wall_left",
            Self::NegY => "wall_down",
            Self::PosY => "wall_up",
        }
    }

    /// Returns the rotation about +z, in degrees, applied to the wall mesh.
    ///
    /// The wall mesh is authored facing `-x`.
    #[must_use]
    pub const fn yaw_degrees(self) -> f32 {
        match self {
            Self::NegX => 0.0,
            Self::PosX => 180.0,
            Self::NegY => 90.0,
            Self::PosY => -90.0,
        }
    }

    /// Returns the neighbouring cell in this direction.
    ///
    /// `None` when the neighbour lies outside the `i32` coordinate range.
    #[must_use]
    pub fn neighbour(self, cell: IVec3) -> Option<IVec3> {
        let offset = self.offset();
        Some(IVec3::new(
            cell.x.checked_add(offset.x)?,
            cell.y.checked_add(offset.y)?,
            cell.z,
        ))
    }

    const fn bit(self) -> u8 {
        match self {
            Self::NegX => 1,
            Self::PosX => 1 << 1,
            Self::NegY => 1 << 2,
            Self::PosY => 1 << 3,
        }
    }
}

impl fmt::Display for WallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NegX => "-x",
            Self::PosX => "+x",
            Self::NegY => "-y",
            Self::PosY => "+y",
        };
        f.write_str(s)
    }
}

/// Set of directions that need a wall for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WallSet(u8);

impl WallSet {
    /// The empty set.
    pub const NONE: WallSet = WallSet(0);

    /// Every horizontal direction.
    pub const ALL: WallSet = WallSet(0b1111);

    /// Adds a direction.
    pub fn insert(&mut self, dir: WallDirection) {
        self.0 |= dir.bit();
    }

    /// Returns whether the direction is in the set.
    #[must_use]
    pub fn contains(self, dir: WallDirection) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Returns the number of walls.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no wall is needed.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the directions in [`WallDirection::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = WallDirection> {
        WallDirection::ALL
            .into_iter()
            .filter(move |d| self.contains(*d))
    }
}

impl FromIterator<WallDirection> for WallSet {
    fn from_iter<I: IntoIterator<Item = WallDirection>>(iter: I) -> Self {
        let mut set = WallSet::NONE;
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

/// Returns whether `cell` needs a wall facing `dir`.
///
/// False for unoccupied cells. A neighbour past the edge of the coordinate
/// range counts as unoccupied.
#[must_use]
pub fn wall_required(grid: &OccupancyGrid, cell: IVec3, dir: WallDirection) -> bool {
    grid.is_occupied(cell)
        && !dir
            .neighbour(cell)
            .is_some_and(|neighbour| grid.is_occupied(neighbour))
}

/// Returns every direction in which `cell` needs a wall.
#[must_use]
pub fn walls_for(grid: &OccupancyGrid, cell: IVec3) -> WallSet {
    WallDirection::ALL
        .into_iter()
        .filter(|&dir| wall_required(grid, cell, dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::volume::Volume;

    fn grid_of(cells: &[(i32, i32, i32)]) -> OccupancyGrid {
        cells.iter().map(|&(x, y, z)| IVec3::new(x, y, z)).collect()
    }

    #[test]
    fn test_two_cell_example() {
        let (grid, _) = build_grid(&[Volume::from_corners(IVec3::ZERO, IVec3::new(2, 1, 1))]);
        let walls = walls_for(&grid, IVec3::ZERO);
        assert!(walls.contains(WallDirection::NegX));
        assert!(walls.contains(WallDirection::NegY));
        assert!(walls.contains(WallDirection::PosY));
        assert!(!walls.contains(WallDirection::PosX));
        assert_eq!(walls.len(), 3);
    }

    #[test]
    fn test_isolated_cell_has_four_walls() {
        let grid = grid_of(&[(0, 0, 0)]);
        assert_eq!(walls_for(&grid, IVec3::ZERO), WallSet::ALL);
    }

    #[test]
    fn test_surrounded_cell_has_no_walls() {
        let grid = grid_of(&[(0, 0, 0), (-1, 0, 0), (1, 0, 0), (0, -1, 0), (0, 1, 0)]);
        assert!(walls_for(&grid, IVec3::ZERO).is_empty());
    }

    #[test]
    fn test_vertical_neighbours_do_not_count() {
        let grid = grid_of(&[(0, 0, 0), (0, 0, 1), (0, 0, -1)]);
        assert_eq!(walls_for(&grid, IVec3::ZERO).len(), 4);
    }

    #[test]
    fn test_unoccupied_cell_needs_no_walls() {
        let grid = grid_of(&[(1, 0, 0)]);
        for dir in WallDirection::ALL {
            assert!(!wall_required(&grid, IVec3::ZERO, dir));
        }
        assert!(walls_for(&grid, IVec3::ZERO).is_empty());
    }

    #[test]
    fn test_cells_at_coordinate_limits() {
        let low = IVec3::new(i32::MIN, i32::MIN, 0);
        let high = IVec3::new(i32::MAX, i32::MAX, 0);
        let grid = grid_of(&[(i32::MIN, i32::MIN, 0), (i32::MAX, i32::MAX, 0)]);
        assert_eq!(walls_for(&grid, low), WallSet::ALL);
        assert_eq!(walls_for(&grid, high), WallSet::ALL);
        assert_eq!(WallDirection::NegX.neighbour(low), None);
        assert_eq!(WallDirection::PosY.neighbour(high), None);
        assert_eq!(
            WallDirection::PosX.neighbour(low),
            Some(IVec3::new(i32::MIN + 1, i32::MIN, 0))
        );
    }

    #[test]
    fn test_volume_at_min_coordinate() {
        let (grid, _) = build_grid(&[Volume::from_corners(
            IVec3::new(i32::MIN, 0, 0),
            IVec3::new(i32::MIN + 1, 1, 1),
        )]);
        let walls = walls_for(&grid, IVec3::new(i32::MIN, 0, 0));
        assert!(walls.contains(WallDirection::NegX));
        assert_eq!(walls.len(), 4);
    }

    #[test]
    fn test_wall_set_iter_order() {
        let set: WallSet = [WallDirection::NegY, WallDirection::NegX].into_iter().collect();
        let dirs: Vec<_> = set.iter().collect();
        assert_eq!(dirs, vec![WallDirection::NegX, WallDirection::NegY]);
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(WallDirection::NegX.node_name(), "wall_right");
        assert_eq!(WallDirection::PosY.to_string(), "+y");
        assert!((WallDirection::PosX.yaw_degrees() - 180.0).abs() < f32::EPSILON);
    }
}
