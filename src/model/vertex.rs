//! Vertex types of a rooted tree: internal vertices and leaves.
//!
//! Both variants carry a value, a [Color] and a depth. The depth is fixed at
//! construction. Dispatch to a [TreeVisitor] goes through [`TreeNode::accept`],
//! which calls the visitor method matching the concrete variant.

use crate::model::tree::VertexIndex;
use crate::visitor::TreeVisitor;
use std::fmt;

/// Identifier of a vertex in the input, numbered `1..=N` in input order.
pub type VertexId = usize;

// =#========================================================================#=
// COLOR
// =#========================================================================#=
/// Binary color of a vertex, encoded as `0` (red) or `1` (green) in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Encoded as `0`
    Red,
    /// Encoded as `1`
    Green,
}

impl Color {
    /// Returns the input encoding of this color.
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Green => 1,
        }
    }

    /// Returns `true` if this color is [Color::Red].
    pub fn is_red(&self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` if this color is [Color::Green].
    pub fn is_green(&self) -> bool {
        matches!(self, Color::Green)
    }
}

impl TryFrom<i64> for Color {
    type Error = i64;

    /// Converts an input code into a color, returning the code itself if it
    /// is neither `0` nor `1`.
    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Color::Red),
            1 => Ok(Color::Green),
            other => Err(other),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
        }
    }
}

// =#========================================================================#=
// TREE NODE (trait)
// =#========================================================================T=
/// Common contract of every vertex in a [RootedTree](crate::model::RootedTree).
///
/// New aggregates are added by implementing [TreeVisitor]; the vertex types
/// never change for that.
pub trait TreeNode {
    /// Value attached to this vertex in the input.
    fn value(&self) -> i64;

    /// Color of this vertex.
    fn color(&self) -> Color;

    /// Distance (edge count) from the root; the root has depth `0`.
    fn depth(&self) -> usize;

    /// Calls the method of `visitor` matching the concrete variant of this vertex.
    fn accept(&self, visitor: &mut dyn TreeVisitor);
}

/// Kind of a vertex, as decided once during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Vertex with children
    Internal,
    /// Vertex without children
    Leaf,
}

// =#========================================================================#=
// INTERNAL VERTEX
// =#========================================================================#=
/// Vertex that owns a collection of children (by arena index).
///
/// The order of `children` carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalVertex {
    /// Index of this vertex in the tree arena
    index: VertexIndex,
    /// Identifier of this vertex in the input
    id: VertexId,
    /// Index of the parent vertex; `None` for the root
    parent: Option<VertexIndex>,
    value: i64,
    color: Color,
    depth: usize,
    /// Indices of the child vertices
    children: Vec<VertexIndex>,
}

impl InternalVertex {
    pub(crate) fn new(
        index: VertexIndex,
        id: VertexId,
        parent: Option<VertexIndex>,
        value: i64,
        color: Color,
        depth: usize,
    ) -> Self {
        Self {
            index,
            id,
            parent,
            value,
            color,
            depth,
            children: Vec::new(),
        }
    }

    /// Returns the index of this vertex in the tree arena.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the input identifier of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        self.parent
    }

    /// Returns the indices of the children of this vertex.
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    pub(crate) fn add_child(&mut self, child: VertexIndex) {
        self.children.push(child);
    }
}

impl TreeNode for InternalVertex {
    fn value(&self) -> i64 {
        self.value
    }

    fn color(&self) -> Color {
        self.color
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn accept(&self, visitor: &mut dyn TreeVisitor) {
        visitor.visit_internal(self);
    }
}

// =#========================================================================#=
// LEAF VERTEX
// =#========================================================================#=
/// Vertex without children.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafVertex {
    /// Index of this vertex in the tree arena
    index: VertexIndex,
    /// Identifier of this vertex in the input
    id: VertexId,
    /// Index of the parent vertex; `None` if the leaf is the whole tree
    parent: Option<VertexIndex>,
    value: i64,
    color: Color,
    depth: usize,
}

impl LeafVertex {
    pub(crate) fn new(
        index: VertexIndex,
        id: VertexId,
        parent: Option<VertexIndex>,
        value: i64,
        color: Color,
        depth: usize,
    ) -> Self {
        Self {
            index,
            id,
            parent,
            value,
            color,
            depth,
        }
    }

    /// Returns the index of this vertex in the tree arena.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the input identifier of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the index of the parent, or `None` if this leaf is the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        self.parent
    }
}

impl TreeNode for LeafVertex {
    fn value(&self) -> i64 {
        self.value
    }

    fn color(&self) -> Color {
        self.color
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn accept(&self, visitor: &mut dyn TreeVisitor) {
        visitor.visit_leaf(self);
    }
}

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// A vertex stored in the arena of a [RootedTree](crate::model::RootedTree).
///
/// # Invariants
/// - `index` is the position of the vertex in the arena
/// - `depth` equals the depth of the parent plus one; the root has depth `0`
/// - A leaf never has children; an internal vertex may have any number
#[derive(Debug, Clone, PartialEq)]
pub enum Vertex {
    /// Vertex with children
    Internal(InternalVertex),
    /// Vertex without children
    Leaf(LeafVertex),
}

impl Vertex {
    /// Returns the index of this vertex in the tree arena.
    pub fn index(&self) -> VertexIndex {
        match self {
            Vertex::Internal(internal) => internal.index(),
            Vertex::Leaf(leaf) => leaf.index(),
        }
    }

    /// Returns the input identifier of this vertex.
    pub fn id(&self) -> VertexId {
        match self {
            Vertex::Internal(internal) => internal.id(),
            Vertex::Leaf(leaf) => leaf.id(),
        }
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        match self {
            Vertex::Internal(internal) => internal.parent(),
            Vertex::Leaf(leaf) => leaf.parent(),
        }
    }

    /// Returns the children of this vertex; empty for a leaf.
    pub fn children(&self) -> &[VertexIndex] {
        match self {
            Vertex::Internal(internal) => internal.children(),
            Vertex::Leaf(_) => &[],
        }
    }

    /// Returns the kind of this vertex.
    pub fn kind(&self) -> VertexKind {
        match self {
            Vertex::Internal(_) => VertexKind::Internal,
            Vertex::Leaf(_) => VertexKind::Leaf,
        }
    }

    /// Returns `true` if this vertex is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Vertex::Leaf(_))
    }

    /// Returns `true` if this vertex is an internal vertex.
    pub fn is_internal(&self) -> bool {
        matches!(self, Vertex::Internal(_))
    }

    /// Returns `true` if this vertex has no parent.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

impl TreeNode for Vertex {
    fn value(&self) -> i64 {
        match self {
            Vertex::Internal(internal) => internal.value(),
            Vertex::Leaf(leaf) => leaf.value(),
        }
    }

    fn color(&self) -> Color {
        match self {
            Vertex::Internal(internal) => internal.color(),
            Vertex::Leaf(leaf) => leaf.color(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Vertex::Internal(internal) => internal.depth(),
            Vertex::Leaf(leaf) => leaf.depth(),
        }
    }

    fn accept(&self, visitor: &mut dyn TreeVisitor) {
        match self {
            Vertex::Internal(internal) => internal.accept(visitor),
            Vertex::Leaf(leaf) => leaf.accept(visitor),
        }
    }
}
