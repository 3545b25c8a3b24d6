//! Sparse occupancy grid construction.
//!
//! A blueprint is a list of [`Volume`]s. Rasterizing every volume into unit
//! cells gives an [`OccupancyGrid`]; the running min/max of the volumes gives
//! the [`BoundingBox`]. Both are built once per blueprint and not modified
//! afterwards.

use std::collections::HashSet;

use glam::IVec3;

use crate::bounds::BoundingBox;
use crate::volume::{NormalizedVolume, Volume};

/// Sparse set of occupied unit cells.
///
/// A cell is identified by the integer coordinate of its lower corner.
/// Occupancy is membership only: covering a cell twice has no extra effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: HashSet<IVec3>,
}

impl OccupancyGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the cell is occupied.
    #[must_use]
    pub fn is_occupied(&self, cell: IVec3) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates the occupied cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.cells.iter().copied()
    }

    /// Returns the occupied cells sorted by (z, x, y).
    ///
    /// This is the order the interior builder visits cells in.
    #[must_use]
    pub fn sorted_cells(&self) -> Vec<IVec3> {
        let mut cells: Vec<IVec3> = self.cells.iter().copied().collect();
        cells.sort_unstable_by_key(|c| (c.z, c.x, c.y));
        cells
    }

    /// Marks every cell of the volume as occupied.
    pub fn rasterize(&mut self, volume: &NormalizedVolume) {
        self.cells.extend(volume.cells());
    }

    /// Folds another grid into this one.
    pub fn merge(&mut self, mut other: OccupancyGrid) {
        // extend the larger set with the smaller one
        if other.cells.len() > self.cells.len() {
            std::mem::swap(&mut self.cells, &mut other.cells);
        }
        self.cells.extend(other.cells);
    }
}

impl FromIterator<IVec3> for OccupancyGrid {
    fn from_iter<I: IntoIterator<Item = IVec3>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<IVec3> for OccupancyGrid {
    fn extend<I: IntoIterator<Item = IVec3>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

/// Incremental builder for an occupancy grid and its bounding box.
///
/// Volumes can be added one at a time; [`GridBuilder::build`] returns the
/// same result regardless of the order they were added in.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    grid: OccupancyGrid,
    bounds: BoundingBox,
    volumes: usize,
}

impl GridBuilder {
    /// Creates a builder with an empty grid and a zero-seeded bounding box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes the volume, grows the bounding box and rasterizes it.
    pub fn add_volume(&mut self, volume: &Volume) -> &mut Self {
        let normalized = volume.normalized();
        self.bounds.expand(&normalized);
        self.grid.rasterize(&normalized);
        self.volumes += 1;
        self
    }

    /// Adds every volume from an iterator.
    pub fn add_volumes<'a>(&mut self, volumes: impl IntoIterator<Item = &'a Volume>) -> &mut Self {
        for volume in volumes {
            self.add_volume(volume);
        }
        self
    }

    /// Returns the number of volumes added so far.
    #[must_use]
    pub fn num_volumes(&self) -> usize {
        self.volumes
    }

    /// Consumes the builder and returns the finished grid and bounding box.
    #[must_use]
    pub fn build(self) -> (OccupancyGrid, BoundingBox) {
        log::debug!(
            "built occupancy grid: {} cells from {} volumes, bounds {:?}..{:?}",
            self.grid.len(),
            self.volumes,
            self.bounds.min,
            self.bounds.max
        );
        (self.grid, self.bounds)
    }

    /// Folds a partial result produced elsewhere into this builder.
    ///
    /// Partials are meant to be produced independently (one per volume, for
    /// instance) and merged only after all of them are complete.
    pub fn merge(&mut self, partial: GridBuilder) -> &mut Self {
        self.grid.merge(partial.grid);
        self.bounds = self.bounds.union(&partial.bounds);
        self.volumes += partial.volumes;
        self
    }
}

/// Builds the occupancy grid and bounding box of a list of volumes.
#[must_use]
pub fn build_grid(volumes: &[Volume]) -> (OccupancyGrid, BoundingBox) {
    let mut builder = GridBuilder::new();
    builder.add_volumes(volumes);
    builder.build()
}
