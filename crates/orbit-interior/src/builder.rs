//! Interior construction from an occupancy grid.
//!
//! The produced hierarchy is:
//!
//! ```text
//! interior_root            cell_width, cell_depth, cell_height
//! └── level {z}            floor_number        (one per z in the bounding box)
//!     └── cell             cell_x, cell_y      (one per occupied cell)
//!         ├── floor                            (with meshes)
//!         └── wall_*                           (with meshes, one per required wall)
//! ```

#![allow(clippy::cast_precision_loss)]

use std::collections::HashMap;

use glam::{IVec3, Quat, Vec3};
use orbit_core::{
    walls_for, Blueprint, BoundingBox, NodeId, OccupancyGrid, SceneNode, SceneTree, WallDirection,
};

use crate::options::InteriorOptions;

/// Name of the root node of a constructed interior.
pub const ROOT_NAME: &str = "interior_root";

/// Name of a cell node.
pub const CELL_NAME: &str = "cell";

/// Name of a floor mesh instance.
pub const FLOOR_NAME: &str = "floor";

/// Returns the name of the level node for `z`.
#[must_use]
pub fn level_name(z: i32) -> String {
    format!("level {z}")
}

/// Counts of what a construction produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteriorStats {
    pub levels: usize,
    pub cells: usize,
    pub floors: usize,
    pub walls: usize,
}

/// A constructed interior: the scene tree plus the grid it was built from.
///
/// Grid and bounding box are kept unchanged for the lifetime of the handle.
#[derive(Debug, Clone)]
pub struct Interior {
    tree: SceneTree,
    root: NodeId,
    grid: OccupancyGrid,
    bounds: BoundingBox,
    options: InteriorOptions,
    stats: InteriorStats,
}

impl Interior {
    #[must_use]
    pub fn tree(&self) -> &SceneTree {
        &self.tree
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[must_use]
    pub fn options(&self) -> &InteriorOptions {
        &self.options
    }

    #[must_use]
    pub fn stats(&self) -> InteriorStats {
        self.stats
    }

    /// Returns the level node for `z`, if `z` is inside the bounding box.
    #[must_use]
    pub fn level(&self, z: i32) -> Option<NodeId> {
        self.tree.find_children(self.root, &level_name(z)).next()
    }

    /// Returns the cell node for an occupied cell.
    #[must_use]
    pub fn cell(&self, cell: IVec3) -> Option<NodeId> {
        let level = self.level(cell.z)?;
        self.tree.find_children(level, CELL_NAME).find(|&id| {
            self.tree.get(id).is_some_and(|n| {
                n.property("cell_x") == Some(&cell.x.into())
                    && n.property("cell_y") == Some(&cell.y.into())
            })
        })
    }

    /// Returns a nested JSON view of the whole interior.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        self.tree.to_json(self.root).unwrap_or_default()
    }

    /// Tears the construction down children-first.
    ///
    /// Returns the names of the removed nodes in removal order.
    pub fn teardown(mut self) -> Vec<String> {
        self.tree
            .remove_subtree(self.root)
            .into_iter()
            .map(|n| n.name().to_string())
            .collect()
    }
}

/// Builds the scene hierarchy for a grid.
#[must_use]
pub fn build_interior(
    grid: OccupancyGrid,
    bounds: BoundingBox,
    options: &InteriorOptions,
) -> Interior {
    let mut tree = SceneTree::new();
    let mut stats = InteriorStats::default();

    let root = tree.add_root(
        SceneNode::new(ROOT_NAME)
            .with_property("cell_width", options.cell_width)
            .with_property("cell_depth", options.cell_depth)
            .with_property("cell_height", options.cell_height),
    );

    let mut levels = HashMap::new();
    for z in bounds.z_range() {
        let level = SceneNode::new(level_name(z))
            .with_location(Vec3::new(0.0, 0.0, z as f32 * options.cell_height))
            .with_property("floor_number", z);
        if let Some(id) = tree.add_child(root, level) {
            levels.insert(z, id);
            stats.levels += 1;
        }
    }

    for cell in grid.sorted_cells() {
        let Some(&level) = levels.get(&cell.z) else {
            log::warn!("cell {cell:?} lies outside the bounding box, skipping");
            continue;
        };
        let node = SceneNode::new(CELL_NAME)
            .with_location(Vec3::new(
                cell.x as f32 * options.cell_width,
                cell.y as f32 * options.cell_depth,
                0.0,
            ))
            .with_property("cell_x", cell.x)
            .with_property("cell_y", cell.y);
        let Some(cell_id) = tree.add_child(level, node) else {
            continue;
        };
        stats.cells += 1;

        if options.add_meshes {
            add_cell_meshes(&mut tree, cell_id, &grid, cell, options, &mut stats);
        }
    }

    log::info!(
        "constructed interior: {} levels, {} cells, {} floors, {} walls",
        stats.levels,
        stats.cells,
        stats.floors,
        stats.walls
    );

    Interior {
        tree,
        root,
        grid,
        bounds,
        options: options.clone(),
        stats,
    }
}

fn add_cell_meshes(
    tree: &mut SceneTree,
    cell_id: NodeId,
    grid: &OccupancyGrid,
    cell: IVec3,
    options: &InteriorOptions,
    stats: &mut InteriorStats,
) {
    if tree
        .add_child(cell_id, SceneNode::mesh(FLOOR_NAME, &options.assets.floor))
        .is_some()
    {
        stats.floors += 1;
    }

    for dir in walls_for(grid, cell).iter() {
        let wall = SceneNode::mesh(dir.node_name(), &options.assets.wall)
            .with_rotation(wall_rotation(dir));
        if tree.add_child(cell_id, wall).is_some() {
            stats.walls += 1;
        }
    }
}

/// Rotation of a wall mesh facing `dir`.
#[must_use]
pub fn wall_rotation(dir: WallDirection) -> Quat {
    Quat::from_rotation_z(dir.yaw_degrees().to_radians())
}

/// Builds the grid of a blueprint and constructs its interior.
#[must_use]
pub fn build_from_blueprint(blueprint: &Blueprint, options: &InteriorOptions) -> Interior {
    let (grid, bounds) = blueprint.build_grid();
    build_interior(grid, bounds, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::{build_grid, NodeKind, Volume};

    fn two_cells() -> (OccupancyGrid, BoundingBox) {
        build_grid(&[Volume::from_corners(IVec3::ZERO, IVec3::new(2, 1, 1))])
    }

    #[test]
    fn test_hierarchy_without_meshes() {
        let (grid, bounds) = two_cells();
        let interior = build_interior(grid, bounds, &InteriorOptions::default());
        let tree = interior.tree();

        let root = tree.get(interior.root()).unwrap();
        assert_eq!(root.name(), ROOT_NAME);
        assert!((root.property("cell_height").unwrap().as_f64().unwrap() - 2.5).abs() < 1e-6);

        assert_eq!(
            interior.stats(),
            InteriorStats {
                levels: 1,
                cells: 2,
                floors: 0,
                walls: 0
            }
        );
        let level = interior.level(0).unwrap();
        assert_eq!(tree.children(level).len(), 2);
        assert!(interior.level(1).is_none());
    }

    #[test]
    fn test_cell_placement_and_properties() {
        let (grid, bounds) = two_cells();
        let options = InteriorOptions {
            cell_width: 2.0,
            ..InteriorOptions::default()
        };
        let interior = build_interior(grid, bounds, &options);
        let cell = interior.cell(IVec3::new(1, 0, 0)).unwrap();
        let node = interior.tree().get(cell).unwrap();
        assert_eq!(node.location(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(node.property("cell_x"), Some(&1.into()));
        assert_eq!(node.property("cell_y"), Some(&0.into()));
    }

    #[test]
    fn test_meshes_follow_wall_adjacency() {
        let (grid, bounds) = two_cells();
        let options = InteriorOptions::default().with_meshes(true);
        let interior = build_interior(grid, bounds, &options);
        let tree = interior.tree();

        let cell = interior.cell(IVec3::ZERO).unwrap();
        let names: Vec<&str> = tree
            .children(cell)
            .iter()
            .map(|&c| tree.get(c).unwrap().name())
            .collect();
        assert_eq!(names, vec!["floor", "wall_right", "wall_up", "wall_down"]);

        let stats = interior.stats();
        assert_eq!(stats.floors, 2);
        assert_eq!(stats.walls, 6);

        let floor = tree.get(tree.children(cell)[0]).unwrap();
        assert!(matches!(floor.kind(), NodeKind::Mesh { asset } if asset.ends_with("hallway_floor_00.glb")));
    }

    #[test]
    fn test_empty_levels_are_created() {
        let (grid, bounds) = build_grid(&[Volume::from_corners(
            IVec3::new(0, 0, 2),
            IVec3::new(1, 1, 3),
        )]);
        let interior = build_interior(grid, bounds, &InteriorOptions::default());
        // zero-seeded bounds cover z = 0, 1, 2
        assert_eq!(interior.stats().levels, 3);
        assert!(interior.tree().children(interior.level(0).unwrap()).is_empty());
        let level2 = interior.tree().get(interior.level(2).unwrap()).unwrap();
        assert_eq!(level2.location(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(level2.property("floor_number"), Some(&2.into()));
    }

    #[test]
    fn test_wall_rotation() {
        let q = wall_rotation(WallDirection::PosX);
        let v = q * Vec3::NEG_X;
        assert!((v - Vec3::X).length() < 1e-5);
        let q = wall_rotation(WallDirection::PosY);
        let v = q * Vec3::NEG_X;
        assert!((v - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_teardown_removes_children_first() {
        let (grid, bounds) = two_cells();
        let interior = build_interior(grid, bounds, &InteriorOptions::default());
        let removed = interior.teardown();
        assert_eq!(removed, vec!["cell", "cell", "level 0", ROOT_NAME]);
    }

    #[test]
    fn test_empty_blueprint() {
        let interior = build_from_blueprint(&Blueprint::default(), &InteriorOptions::default());
        assert_eq!(interior.stats(), InteriorStats::default());
        assert_eq!(interior.tree().len(), 1);
    }
}
