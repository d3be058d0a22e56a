//! Composite map component hierarchy.
//!
//! Two node kinds behind one capability set: a [`Leaf`] is a single named
//! point of interest, a [`Composite`] owns an ordered sequence of children.
//! Both are drawn recursively and searched by name through [`MapComponent`].
//!
//! Ownership is exclusive: children are owned values inside their parent's
//! vector, so no node is ever shared between two composites and cycles are
//! unrepresentable.

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::render::{ComponentKind, RenderRecord, RenderSink};

/// A single named point of interest with a fixed local offset. Terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: String,
    offset_x: i64,
    offset_y: i64,
}

impl Leaf {
    pub fn new(name: impl Into<String>, offset_x: i64, offset_y: i64) -> Self {
        Self {
            name: name.into(),
            offset_x,
            offset_y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.offset_x, self.offset_y)
    }
}

/// A group of components with a fixed local offset.
///
/// Children keep insertion order, which is meaningful: it determines both
/// draw order and search order. They can only be appended, never removed or
/// reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composite {
    offset_x: i64,
    offset_y: i64,
    children: Vec<MapComponent>,
}

impl Composite {
    pub fn new(offset_x: i64, offset_y: i64) -> Self {
        Self {
            offset_x,
            offset_y,
            children: Vec::new(),
        }
    }

    /// Appends a child. Repeated calls append duplicates, which is allowed.
    pub fn add_child(&mut self, child: impl Into<MapComponent>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[MapComponent] {
        &self.children
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "composite ({}, {})", self.offset_x, self.offset_y)
    }
}

/// Tree node: either a single point of interest or a group of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapComponent {
    Leaf(Leaf),
    Composite(Composite),
}

impl From<Leaf> for MapComponent {
    fn from(leaf: Leaf) -> Self {
        MapComponent::Leaf(leaf)
    }
}

impl From<Composite> for MapComponent {
    fn from(composite: Composite) -> Self {
        MapComponent::Composite(composite)
    }
}

impl MapComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            MapComponent::Leaf(_) => ComponentKind::Leaf,
            MapComponent::Composite(_) => ComponentKind::Composite,
        }
    }

    /// Local displacement relative to the parent, fixed at construction.
    pub fn offset(&self) -> (i64, i64) {
        match self {
            MapComponent::Leaf(leaf) => (leaf.offset_x, leaf.offset_y),
            MapComponent::Composite(composite) => (composite.offset_x, composite.offset_y),
        }
    }

    /// Only leaves carry a name; composites are not addressable by name.
    pub fn name(&self) -> Option<&str> {
        match self {
            MapComponent::Leaf(leaf) => Some(&leaf.name),
            MapComponent::Composite(_) => None,
        }
    }

    fn children(&self) -> &[MapComponent] {
        match self {
            MapComponent::Leaf(_) => &[],
            MapComponent::Composite(composite) => &composite.children,
        }
    }

    /// Renders this node and all descendants, emitting one record per node.
    ///
    /// The record position is `origin + local_offset`; children are drawn in
    /// insertion order with the just-computed absolute position as their new
    /// origin, so offsets compose additively down the tree.
    #[instrument(level = "trace", skip(self, sink))]
    pub fn draw(&self, origin_x: i64, origin_y: i64, sink: &mut dyn RenderSink) {
        let (offset_x, offset_y) = self.offset();
        let x = origin_x + offset_x;
        let y = origin_y + offset_y;
        sink.record(RenderRecord {
            kind: self.kind(),
            name: self.name().map(str::to_string),
            x,
            y,
        });
        for child in self.children() {
            child.draw(x, y, sink);
        }
    }

    /// Finds the first node in this subtree whose name matches.
    ///
    /// Depth-first, children in insertion order. A leaf matches on its own
    /// name; a composite has no name and never matches itself, only its
    /// descendants. Absence is a normal outcome, not an error.
    #[instrument(level = "trace", skip(self))]
    pub fn find_child(&self, name: &str) -> Option<&MapComponent> {
        match self {
            MapComponent::Leaf(leaf) if leaf.name == name => Some(self),
            MapComponent::Leaf(_) => None,
            MapComponent::Composite(composite) => composite
                .children
                .iter()
                .find_map(|child| child.find_child(name)),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.node_count())
            .sum::<usize>()
    }

    /// Collects the names of all leaves in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<String> {
        match self {
            MapComponent::Leaf(leaf) => vec![leaf.name.clone()],
            MapComponent::Composite(composite) => {
                let mut names = Vec::new();
                for child in &composite.children {
                    names.extend(child.leaf_names());
                }
                names
            }
        }
    }

    /// Pre-order iterator yielding each node with its absolute position for
    /// the given origin.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self, origin_x: i64, origin_y: i64) -> PreorderIter<'_> {
        PreorderIter::new(self, origin_x, origin_y)
    }
}

impl fmt::Display for MapComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapComponent::Leaf(leaf) => leaf.fmt(f),
            MapComponent::Composite(composite) => composite.fmt(f),
        }
    }
}

/// Pre-order traversal carrying the accumulated origin on an explicit stack.
pub struct PreorderIter<'a> {
    stack: Vec<(&'a MapComponent, i64, i64)>,
}

impl<'a> PreorderIter<'a> {
    fn new(root: &'a MapComponent, origin_x: i64, origin_y: i64) -> Self {
        Self {
            stack: vec![(root, origin_x, origin_y)],
        }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = (i64, i64, &'a MapComponent);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, origin_x, origin_y) = self.stack.pop()?;
        let (offset_x, offset_y) = node.offset();
        let x = origin_x + offset_x;
        let y = origin_y + offset_y;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack.push((child, x, y));
        }
        Some((x, y, node))
    }
}

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for MapComponent {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.to_string()).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordBuffer;
    use crate::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    //        root (0,0)
    //        /         \
    // a (1,2)           b (10,20)
    //                      |
    //                   deep (5,5)
    fn small_map() -> MapComponent {
        let mut b = Composite::new(10, 20);
        b.add_child(Leaf::new("deep", 5, 5));

        let mut root = Composite::new(0, 0);
        root.add_child(Leaf::new("a", 1, 2));
        root.add_child(b);
        root.into()
    }

    #[test]
    fn test_depth_and_node_count() {
        let map = small_map();
        assert_eq!(map.depth(), 3);
        assert_eq!(map.node_count(), 4);
    }

    #[test]
    fn test_leaf_names_in_preorder() {
        let map = small_map();
        assert_eq!(map.leaf_names(), vec!["a", "deep"]);
    }

    #[test]
    fn test_draw_accumulates_offsets() {
        let map = small_map();
        let mut buffer = RecordBuffer::new();
        map.draw(100, 200, &mut buffer);

        let positions: Vec<_> = buffer.records().iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(positions, vec![(100, 200), (101, 202), (110, 220), (115, 225)]);
    }

    #[test]
    fn test_iter_matches_draw_order() {
        let map = small_map();
        let mut buffer = RecordBuffer::new();
        map.draw(0, 0, &mut buffer);

        let from_iter: Vec<_> = map.iter(0, 0).map(|(x, y, _)| (x, y)).collect();
        let from_draw: Vec<_> = buffer.records().iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(from_iter, from_draw);
    }

    #[test]
    fn test_find_child_descends_into_nested_composite() {
        let map = small_map();
        let found = map.find_child("deep").expect("leaf should be found");
        assert_eq!(found.kind(), ComponentKind::Leaf);
        assert_eq!(found.name(), Some("deep"));
    }

    #[test]
    fn test_tree_string_contains_all_nodes() {
        let map = small_map();
        let rendered = map.to_tree_string().to_string();
        assert!(rendered.contains("composite (0, 0)"));
        assert!(rendered.contains("a (1, 2)"));
        assert!(rendered.contains("deep (5, 5)"));
    }
}
