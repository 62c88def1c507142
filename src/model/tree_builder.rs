//! Reconstruction of a [RootedTree] from a [TreeInput].
//!
//! The undirected edge list is turned into an [AdjacencyMap], then the tree
//! is expanded top-down from vertex `1`, which is always the root.
//!
//! # Classification
//! A vertex is classified once, when it is attached:
//! - with `N == 1`, the sole vertex is a leaf
//! - otherwise the root is always internal
//! - any other vertex is a leaf iff it has exactly one neighbor
//!
//! # Expansion
//! ```text
//! stack = [(root, 1)]
//! while (parent, id) = stack.pop():
//!     for each neighbor of id not attached yet:
//!         attach neighbor as child of parent, at parent depth + 1
//!         if neighbor is internal: stack.push((child, neighbor))
//! ```
//! The set of attached vertex identifiers is local to one build. It stops
//! the expansion from walking back to a parent, since every neighbor set
//! contains the parent as well.

use crate::model::tree::{RootedTree, VertexIndex};
use crate::model::tree_input::TreeInput;
use crate::model::vertex::{VertexId, VertexKind};
use std::collections::BTreeSet;

// =#========================================================================#=
// ADJACENCY MAP
// =#========================================================================#=
/// Undirected adjacency of the input graph: vertex identifier to the set of
/// its neighbor identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMap {
    /// Neighbor sets, where index `i` holds the neighbors of vertex `i + 1`
    neighbors: Vec<BTreeSet<VertexId>>,
}

impl AdjacencyMap {
    /// Builds the adjacency of `node_count` vertices from undirected edges.
    ///
    /// Each edge `(u, v)` registers `v` as neighbor of `u` and `u` as
    /// neighbor of `v`. Repeated edges collapse into one neighbor entry.
    ///
    /// # Panics
    /// Panics if an endpoint is not in `1..=node_count`.
    pub fn from_edges(node_count: usize, edges: &[(VertexId, VertexId)]) -> Self {
        let mut neighbors = vec![BTreeSet::new(); node_count];
        for &(u, v) in edges {
            neighbors[u - 1].insert(v);
            neighbors[v - 1].insert(u);
        }
        Self { neighbors }
    }

    /// Returns the neighbors of vertex `id`.
    pub fn neighbors(&self, id: VertexId) -> &BTreeSet<VertexId> {
        &self.neighbors[id - 1]
    }

    /// Returns the number of neighbors of vertex `id`.
    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.neighbors.len()
    }
}

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================#=
/// Builds a [RootedTree] rooted at vertex `1` from a validated [TreeInput].
///
/// # Example
/// ```
/// use treevis::model::{TreeBuilder, TreeInput};
///
/// // Star with center 1
/// let input = TreeInput::new(4, vec![10, 1, 2, 3], vec![0, 1, 0, 1], vec![(1, 2), (1, 3), (1, 4)])?;
/// let tree = TreeBuilder::new(&input).build();
///
/// assert_eq!(tree.num_internal(), 1);
/// assert_eq!(tree.num_leaves(), 3);
/// assert!(tree.root().is_internal());
/// # Ok::<(), treevis::parser::InputError>(())
/// ```
pub struct TreeBuilder<'a> {
    input: &'a TreeInput,
    /// Vertex identifiers already attached to the tree (index `id`)
    attached: Vec<bool>,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder for the given input.
    pub fn new(input: &'a TreeInput) -> Self {
        Self {
            input,
            attached: vec![false; input.node_count() + 1],
        }
    }

    /// Builds the rooted tree, consuming the builder.
    pub fn build(mut self) -> RootedTree {
        let node_count = self.input.node_count();
        log::debug!("building tree with {} vertices", node_count);

        let mut tree = RootedTree::with_capacity(node_count);
        if node_count == 1 {
            tree.add_root(VertexKind::Leaf, 1, self.input.value_of(1), self.input.color_of(1));
            return tree;
        }

        let adjacency = AdjacencyMap::from_edges(node_count, self.input.edges());
        let root = tree.add_root(VertexKind::Internal, 1, self.input.value_of(1), self.input.color_of(1));
        self.attached[1] = true;

        let mut stack: Vec<(VertexIndex, VertexId)> = vec![(root, 1)];
        while let Some((parent, parent_id)) = stack.pop() {
            for &id in adjacency.neighbors(parent_id) {
                if self.attached[id] {
                    continue;
                }
                self.attached[id] = true;

                let kind = classify(adjacency.degree(id));
                let child = tree.add_child(parent, kind, id, self.input.value_of(id), self.input.color_of(id));
                log::trace!("attached vertex {} as {:?} child of vertex {}", id, kind, parent_id);

                if kind == VertexKind::Internal {
                    stack.push((child, id));
                }
            }
        }

        if tree.num_vertices() < node_count {
            log::debug!(
                "{} of {} vertices not reachable from vertex 1",
                node_count - tree.num_vertices(),
                node_count
            );
        }
        log::debug!(
            "built tree with {} internal vertices, {} leaves and height {}",
            tree.num_internal(),
            tree.num_leaves(),
            tree.height()
        );
        debug_assert!(tree.is_valid());

        tree
    }
}

/// Builds the rooted tree for `input`; shorthand for [`TreeBuilder::build`].
pub fn build_tree(input: &TreeInput) -> RootedTree {
    TreeBuilder::new(input).build()
}

/// Kind of a non-root vertex with `degree` neighbors, for trees with more
/// than one vertex.
fn classify(degree: usize) -> VertexKind {
    if degree == 1 {
        VertexKind::Leaf
    } else {
        VertexKind::Internal
    }
}
