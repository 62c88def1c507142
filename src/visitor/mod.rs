//! Visitor protocol over the vertices of a [RootedTree](crate::model::RootedTree).
//!
//! A [TreeVisitor] has one method per vertex kind plus a result accessor.
//! Vertices dispatch to the matching method via
//! [`TreeNode::accept`](crate::model::TreeNode::accept), so a new aggregate
//! is a new visitor and never a change to the vertex types.
//!
//! Visitors do not walk the tree themselves; the order in which vertices
//! arrive is decided by the [traversal] driver. The provided visitors only
//! compute commutative aggregates, so any order that reaches every vertex
//! once gives the same results:
//!
//! | Visitor | Internal vertices | Leaves | Result |
//! |---------|-------------------|--------|--------|
//! | [LeafSumVisitor] | ignored | sum of values | sum |
//! | [RedProductVisitor] | product of red values | product of red values | product mod `1_000_000_007` |
//! | [DepthParityVisitor] | sum of values at even depth | sum of green values | absolute difference |

pub mod depth_parity;
pub mod leaf_sum;
pub mod red_product;
pub mod traversal;

pub use depth_parity::DepthParityVisitor;
pub use leaf_sum::LeafSumVisitor;
pub use red_product::{RED_PRODUCT_MODULUS, RedProductVisitor};
pub use traversal::{Aggregates, accept_visitors, evaluate};

use crate::model::{InternalVertex, LeafVertex};

// =#========================================================================#=
// TREE VISITOR (trait)
// =#========================================================================T=
/// Stateful aggregator invoked once per vertex during a traversal.
///
/// Implementors keep their running state private: it is changed only by the
/// two visit methods and read only through [`result`](Self::result).
pub trait TreeVisitor {
    /// Called for each internal vertex.
    fn visit_internal(&mut self, node: &InternalVertex);

    /// Called for each leaf.
    fn visit_leaf(&mut self, leaf: &LeafVertex);

    /// Returns the aggregate over all vertices visited so far.
    fn result(&self) -> i64;
}
