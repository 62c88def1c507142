//! Single-pass traversal dispatching every vertex to several visitors.

use crate::model::{RootedTree, TreeNode, VertexIndex};
use crate::visitor::{DepthParityVisitor, LeafSumVisitor, RedProductVisitor, TreeVisitor};
use std::fmt;

// =#========================================================================#=
// TRAVERSAL DRIVER
// =#========================================================================#=
/// Walks `tree` once in pre-order and dispatches every vertex to every
/// visitor, in the order the visitors are given.
///
/// All visitors see a vertex before any of them sees its first child. A
/// visited set local to this call makes sure no vertex is dispatched twice,
/// even if it were reachable along two paths. The walk uses an explicit
/// stack, so deep trees do not grow the call stack.
///
/// # Returns
/// The number of vertices dispatched.
///
/// # Example
/// ```
/// use treevis::model::{TreeBuilder, TreeInput};
/// use treevis::visitor::{LeafSumVisitor, TreeVisitor, accept_visitors};
///
/// let input = TreeInput::new(3, vec![5, 6, 7], vec![0, 0, 0], vec![(1, 2), (1, 3)])?;
/// let tree = TreeBuilder::new(&input).build();
///
/// let mut leaf_sum = LeafSumVisitor::new();
/// accept_visitors(&tree, &mut [&mut leaf_sum]);
/// assert_eq!(leaf_sum.result(), 13);
/// # Ok::<(), treevis::parser::InputError>(())
/// ```
pub fn accept_visitors(tree: &RootedTree, visitors: &mut [&mut dyn TreeVisitor]) -> usize {
    if !tree.is_root_set() {
        return 0;
    }

    let mut visited = vec![false; tree.num_vertices()];
    let mut num_dispatched = 0;
    let mut stack: Vec<VertexIndex> = vec![tree.root_index()];

    while let Some(index) = stack.pop() {
        if visited[index] {
            continue;
        }
        visited[index] = true;

        let vertex = &tree[index];
        for visitor in visitors.iter_mut() {
            vertex.accept(&mut **visitor);
        }
        num_dispatched += 1;

        // Reverse, so the first child is processed first
        stack.extend(vertex.children().iter().rev().filter(|&&child| !visited[child]));
    }

    log::debug!(
        "dispatched {} vertices to {} visitors",
        num_dispatched,
        visitors.len()
    );
    num_dispatched
}

/// Computes leaf-sum, red-product and depth-parity of `tree` in one traversal.
///
/// Fresh visitors are created for every call, so repeated calls on the same
/// tree give identical results.
pub fn evaluate(tree: &RootedTree) -> Aggregates {
    let mut leaf_sum = LeafSumVisitor::new();
    let mut red_product = RedProductVisitor::new();
    let mut depth_parity = DepthParityVisitor::new();

    accept_visitors(tree, &mut [&mut leaf_sum, &mut red_product, &mut depth_parity]);

    Aggregates {
        leaf_sum: leaf_sum.result(),
        red_product: red_product.result(),
        depth_parity: depth_parity.result(),
    }
}

// =#========================================================================#=
// AGGREGATES
// =#========================================================================#=
/// Results of the three standard visitors.
///
/// Displayed as three lines in the order leaf-sum, red-product, depth-parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aggregates {
    /// Result of [LeafSumVisitor]
    pub leaf_sum: i64,
    /// Result of [RedProductVisitor]
    pub red_product: i64,
    /// Result of [DepthParityVisitor]
    pub depth_parity: i64,
}

impl fmt::Display for Aggregates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.leaf_sum)?;
        writeln!(f, "{}", self.red_product)?;
        write!(f, "{}", self.depth_parity)
    }
}
