//! Owned scene tree.
//!
//! Constructed content is organized as a tree of named nodes, each with a
//! local transform and a bag of custom properties. Nodes live in an arena and
//! are addressed by [`NodeId`]. Removing a node tears its whole subtree down
//! children-first, so no node ever outlives its parent's removal with a
//! dangling parent link.

use std::collections::BTreeMap;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Handle to a node in a [`SceneTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// A transform-only node used for grouping.
    Empty,
    /// An instance of a mesh asset.
    Mesh { asset: String },
}

/// A node in the scene tree.
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    kind: NodeKind,
    location: Vec3,
    rotation: Quat,
    properties: BTreeMap<String, Value>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Creates a detached empty node at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Empty,
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            properties: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Creates a detached mesh instance node.
    pub fn mesh(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Mesh {
                asset: asset.into(),
            },
            ..Self::new(name)
        }
    }

    /// Sets the local location.
    #[must_use]
    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }

    /// Sets the local rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets a custom property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the name of this node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name of this node.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn location(&self) -> Vec3 {
        self.location
    }

    pub fn set_location(&mut self, location: Vec3) {
        self.location = location;
    }

    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Returns the local transform matrix.
    #[must_use]
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.location)
    }

    /// Returns a custom property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Sets a custom property, returning the previous value.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    /// Returns all custom properties, sorted by key.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    /// Returns the parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed tree of [`SceneNode`]s.
#[derive(Debug, Clone, Default)]
pub struct SceneTree {
    nodes: Vec<Option<SceneNode>>,
    roots: Vec<NodeId>,
    live: usize,
}

impl SceneTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, mut node: SceneNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        node.children.clear();
        self.nodes.push(Some(node));
        self.live += 1;
        id
    }

    /// Adds a top-level node.
    pub fn add_root(&mut self, node: SceneNode) -> NodeId {
        let id = self.insert(node, None);
        self.roots.push(id);
        id
    }

    /// Adds a node under `parent`.
    ///
    /// Returns `None` if `parent` is not in the tree.
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> Option<NodeId> {
        if !self.contains(parent) {
            return None;
        }
        let id = self.insert(node, Some(parent));
        self.get_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Returns whether the node is present.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Gets a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Gets a mutable node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Returns the children of a node, or an empty slice if it does not exist.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(SceneNode::children).unwrap_or_default()
    }

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(SceneNode::parent)
    }

    /// Returns the top-level nodes.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterates all live nodes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|n| (NodeId(i), n)))
    }

    /// Finds the direct children of `parent` with the given name.
    pub fn find_children<'a>(
        &'a self,
        parent: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(parent)
            .iter()
            .copied()
            .filter(move |&c| self.get(c).is_some_and(|n| n.name == name))
    }

    /// Returns the first live node with the given name, in insertion order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.name == name).map(|(id, _)| id)
    }

    /// Returns the transform from node space to world space.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Option<Mat4> {
        let mut transform = self.get(id)?.local_transform();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            let node = self.get(parent)?;
            transform = node.local_transform() * transform;
            current = node.parent;
        }
        Some(transform)
    }

    /// Returns the world-space location of a node.
    #[must_use]
    pub fn world_location(&self, id: NodeId) -> Option<Vec3> {
        self.world_transform(id)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Removes a node and all of its descendants.
    ///
    /// Nodes are removed in post-order: every child before its parent.
    /// Returns the removed nodes in removal order; empty if `id` is not in
    /// the tree.
    pub fn remove_subtree(&mut self, id: NodeId) -> Vec<SceneNode> {
        let Some(parent) = self.get(id).map(SceneNode::parent) else {
            return Vec::new();
        };

        match parent {
            Some(parent) => {
                if let Some(p) = self.get_mut(parent) {
                    p.children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }

        let mut removed = Vec::new();
        let mut stack = vec![(id, false)];
        while let Some((current, visited)) = stack.pop() {
            if visited {
                if let Some(node) = self.nodes.get_mut(current.0).and_then(Option::take) {
                    self.live -= 1;
                    removed.push(node);
                }
                continue;
            }
            stack.push((current, true));
            for &child in self.children(current).iter().rev() {
                stack.push((child, false));
            }
        }

        log::debug!("removed {} scene nodes", removed.len());
        removed
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.live = 0;
    }

    /// Returns a nested JSON view of the subtree rooted at `id`.
    #[must_use]
    pub fn to_json(&self, id: NodeId) -> Option<Value> {
        let node = self.get(id)?;
        let children: Vec<Value> = node
            .children
            .iter()
            .filter_map(|&c| self.to_json(c))
            .collect();
        let mut value = json!({
            "name": node.name,
            "kind": node.kind,
            "location": node.location.to_array(),
            "rotation": node.rotation.to_array(),
            "properties": node.properties,
        });
        if !children.is_empty() {
            value["children"] = Value::Array(children);
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SceneTree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = SceneTree::new();
        let root = tree.add_root(SceneNode::new("root"));
        let a = tree.add_child(root, SceneNode::new("a")).unwrap();
        let b = tree.add_child(root, SceneNode::new("b")).unwrap();
        let a1 = tree.add_child(a, SceneNode::new("a1")).unwrap();
        (tree, root, a, b, a1)
    }

    #[test]
    fn test_tree_creation() {
        let (tree, root, a, b, a1) = sample();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots(), &[root]);
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.parent(a1), Some(a));
        assert_eq!(tree.find_by_name("b"), Some(b));
    }

    #[test]
    fn test_add_child_to_missing_parent() {
        let (mut tree, _, a, _, _) = sample();
        tree.remove_subtree(a);
        assert!(tree.add_child(a, SceneNode::new("orphan")).is_none());
    }

    #[test]
    fn test_remove_subtree_is_post_order() {
        let (mut tree, root, ..) = sample();
        let removed: Vec<String> = tree
            .remove_subtree(root)
            .iter()
            .map(|n| n.name().to_string())
            .collect();
        assert_eq!(removed, vec!["a1", "a", "b", "root"]);
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn test_remove_inner_subtree_detaches_from_parent() {
        let (mut tree, root, a, b, a1) = sample();
        let removed = tree.remove_subtree(a);
        assert_eq!(removed.len(), 2);
        assert!(!tree.contains(a1));
        assert_eq!(tree.children(root), &[b]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let (mut tree, _, a, ..) = sample();
        tree.remove_subtree(a);
        assert!(tree.remove_subtree(a).is_empty());
    }

    #[test]
    fn test_world_location_accumulates() {
        let mut tree = SceneTree::new();
        let root = tree.add_root(SceneNode::new("root").with_location(Vec3::new(1.0, 0.0, 0.0)));
        let level = tree
            .add_child(root, SceneNode::new("level").with_location(Vec3::new(0.0, 0.0, 2.5)))
            .unwrap();
        let cell = tree
            .add_child(level, SceneNode::new("cell").with_location(Vec3::new(2.0, 3.0, 0.0)))
            .unwrap();
        let world = tree.world_location(cell).unwrap();
        assert!((world - Vec3::new(3.0, 3.0, 2.5)).length() < 1e-6);
    }

    #[test]
    fn test_properties_and_json() {
        let mut tree = SceneTree::new();
        let root = tree.add_root(
            SceneNode::new("root")
                .with_property("cell_width", 1.0)
                .with_property("floor_number", 3),
        );
        tree.add_child(root, SceneNode::mesh("floor", "floor.glb"));
        let node = tree.get(root).unwrap();
        assert_eq!(node.property("floor_number"), Some(&json!(3)));

        let value = tree.to_json(root).unwrap();
        assert_eq!(value["name"], "root");
        assert_eq!(value["children"][0]["kind"]["type"], "mesh");
        assert_eq!(value["children"][0]["kind"]["asset"], "floor.glb");
    }
}
