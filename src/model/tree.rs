//! Rooted tree representation.
//!
//! Provides the core data structures for a rooted tree:
//! - [RootedTree]: arena of [Vertex] values with a designated root
//! - [VertexIndex]: index of a vertex in the arena
//! - [FlatVertex]: flat `(id, parent, depth, kind)` record of a vertex

use crate::model::vertex::{Color, InternalVertex, LeafVertex, TreeNode, Vertex, VertexId, VertexKind};
use std::fmt;

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: VertexIndex = usize::MAX;

// =$========================================================================$=
// ROOTED TREE
// =$========================================================================$=
/// A rooted tree represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex]. An internal vertex owns its children through their indices,
/// and every index shows up in the child list of exactly one parent.
/// Walking, building and dropping the tree therefore never recurses, which
/// matters for deep, path-shaped trees.
///
/// # Construction
/// Add the root with [`add_root`](Self::add_root), then attach vertices
/// top-down with [`add_child`](Self::add_child). Depths are derived from the
/// parent and never change afterwards. Test validity with
/// [`is_valid`](Self::is_valid).
///
/// # Example
/// ```
/// use treevis::model::{Color, RootedTree, VertexKind};
///
/// let mut tree = RootedTree::with_capacity(3);
/// let root = tree.add_root(VertexKind::Internal, 1, 10, Color::Red);
/// tree.add_child(root, VertexKind::Leaf, 2, 1, Color::Green);
/// tree.add_child(root, VertexKind::Leaf, 3, 2, Color::Red);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.num_leaves(), 2);
/// assert_eq!(tree.height(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RootedTree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree
    root_index: VertexIndex,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl RootedTree {
    /// Creates an empty tree with room for `num_vertices` vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        RootedTree {
            vertices: Vec::with_capacity(num_vertices),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds the root at depth `0`, returning its index.
    ///
    /// # Panics
    /// Panics if a root has already been added.
    pub fn add_root(&mut self, kind: VertexKind, id: VertexId, value: i64, color: Color) -> VertexIndex {
        assert!(!self.is_root_set(), "Root already set");
        let index = self.push(kind, id, None, value, color, 0);
        self.root_index = index;
        index
    }

    /// Adds a vertex as child of `parent`, one level deeper than its parent,
    /// returning the index of the new vertex.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds or a leaf.
    pub fn add_child(
        &mut self,
        parent: VertexIndex,
        kind: VertexKind,
        id: VertexId,
        value: i64,
        color: Color,
    ) -> VertexIndex {
        let depth = self[parent].depth() + 1;
        let index = self.vertices.len();
        match &mut self.vertices[parent] {
            Vertex::Internal(internal) => internal.add_child(index),
            Vertex::Leaf(_) => panic!("Cannot attach child to leaf vertex {parent}"),
        }

        self.push(kind, id, Some(parent), value, color, depth)
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn root(&self) -> &Vertex {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> VertexIndex {
        self.root_index
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self[index]
    }

    /// Returns all vertices in arena order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices in this tree.
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_internal()).count()
    }

    /// Returns the height of this tree, i.e. the largest depth of any vertex.
    pub fn height(&self) -> usize {
        self.vertices.iter().map(|v| v.depth()).max().unwrap_or(0)
    }

    /// Flattens the tree into [FlatVertex] records in pre-order.
    ///
    /// The parent is given by its input identifier, so the records can be
    /// compared against the edge list the tree was built from.
    pub fn flatten(&self) -> Vec<FlatVertex> {
        self.pre_order_iter()
            .map(|vertex| FlatVertex {
                id: vertex.id(),
                parent: vertex.parent().map(|parent| self[parent].id()),
                depth: vertex.depth(),
                kind: vertex.kind(),
            })
            .collect()
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is set, within bounds and the root has no parent and depth `0`
    /// - All vertex indices match their position in the arena
    /// - Every non-root vertex has a valid internal parent that lists it
    ///   exactly once as child, and is one level deeper than that parent
    ///   (checked via back references, in linear time)
    /// - All child indices point back to the correct parent
    /// - There is exactly one root
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if !self.is_root_set() || self.root_index >= self.vertices.len() {
            return false;
        }

        let root = &self.vertices[self.root_index];
        if !root.is_root() || root.depth() != 0 {
            return false;
        }

        let mut num_roots = 0;
        let mut child_refs = vec![0usize; self.vertices.len()];

        for (index, vertex) in self.vertices.iter().enumerate() {
            if vertex.index() != index {
                return false;
            }

            match vertex.parent() {
                None => num_roots += 1,
                Some(parent_index) => {
                    if parent_index >= self.vertices.len() {
                        return false;
                    }

                    let parent = &self.vertices[parent_index];
                    if !parent.is_internal() || parent.depth() + 1 != vertex.depth() {
                        return false;
                    }
                }
            }

            for &child in vertex.children() {
                if child >= self.vertices.len() || self.vertices[child].parent() != Some(index) {
                    return false;
                }
                child_refs[child] += 1;
            }
        }

        // Each non-root vertex is listed exactly once, by its parent
        num_roots == 1
            && child_refs
                .iter()
                .enumerate()
                .all(|(index, &refs)| refs == usize::from(index != self.root_index))
    }
}

// ============================================================================
// Construction helpers (private)
// ============================================================================
impl RootedTree {
    fn push(
        &mut self,
        kind: VertexKind,
        id: VertexId,
        parent: Option<VertexIndex>,
        value: i64,
        color: Color,
        depth: usize,
    ) -> VertexIndex {
        let index = self.vertices.len();
        let vertex = match kind {
            VertexKind::Internal => Vertex::Internal(InternalVertex::new(index, id, parent, value, color, depth)),
            VertexKind::Leaf => Vertex::Leaf(LeafVertex::new(index, id, parent, value, color, depth)),
        };
        self.vertices.push(vertex);
        index
    }
}

impl std::ops::Index<VertexIndex> for RootedTree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// =$========================================================================$=
// FLAT VERTEX
// =$========================================================================$=
/// Flat record of a vertex: its input identifier, the identifier of its
/// parent (if any), its depth and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlatVertex {
    pub id: VertexId,
    pub parent: Option<VertexId>,
    pub depth: usize,
    pub kind: VertexKind,
}

// =$========================================================================$=
// PRINTING
// =$========================================================================$=
/// Visual representation of the tree.
///
/// # Example Output
/// ```text
/// Tree with 5 vertices (3 leaves):
/// [1] Internal (value: 4, red, depth 0)
///   ├─ [2] Leaf (value: 7, green, depth 1)
///   └─ [3] Internal (value: 2, red, depth 1)
///      ├─ [4] Leaf (value: 5, red, depth 2)
///      └─ [5] Leaf (value: 12, green, depth 2)
/// ```
impl fmt::Display for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Tree with {} vertices ({} leaves):",
            self.num_vertices(),
            self.num_leaves()
        )?;

        if !self.is_root_set() {
            return write!(f, "\n(No root set)");
        }

        // (index, prefix, is_last)
        let mut stack: Vec<(VertexIndex, String, bool)> = vec![(self.root_index, String::new(), true)];
        while let Some((index, prefix, is_last)) = stack.pop() {
            let vertex = &self[index];
            let connector = if vertex.is_root() {
                ""
            } else if is_last {
                "└─ "
            } else {
                "├─ "
            };
            let kind = if vertex.is_leaf() { "Leaf" } else { "Internal" };
            write!(
                f,
                "\n{}{}[{}] {} (value: {}, {}, depth {})",
                prefix,
                connector,
                vertex.id(),
                kind,
                vertex.value(),
                vertex.color(),
                vertex.depth()
            )?;

            let child_prefix = if vertex.is_root() {
                "  ".to_string()
            } else {
                format!("{}{}", prefix, if is_last { "   " } else { "│  " })
            };

            // Push in reverse so that children print in stored order
            let children = vertex.children();
            for (position, &child) in children.iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), position + 1 == children.len()));
            }
        }

        Ok(())
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl RootedTree {
    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// # Example
    /// ```
    /// use treevis::model::{Color, RootedTree, VertexKind};
    ///
    /// let mut tree = RootedTree::with_capacity(2);
    /// let root = tree.add_root(VertexKind::Internal, 1, 3, Color::Green);
    /// tree.add_child(root, VertexKind::Leaf, 2, 4, Color::Red);
    ///
    /// let ids: Vec<_> = tree.pre_order_iter().map(|v| v.id()).collect();
    /// assert_eq!(ids, vec![1, 2]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Uses a stack instead of recursion. Each vertex is visited before any of
/// its descendants.
pub struct PreOrderIter<'a> {
    tree: &'a RootedTree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a RootedTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        // Reverse, so the first child is processed first
        self.stack.extend(vertex.children().iter().rev());

        Some(vertex)
    }
}
