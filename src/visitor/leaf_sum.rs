//! Sum of the values of all leaves.

use crate::model::{InternalVertex, LeafVertex, TreeNode};
use crate::visitor::TreeVisitor;

/// Accumulates the values of all leaves; internal vertices are ignored.
///
/// The sum wraps around on `i64` overflow.
#[derive(Debug, Default, Clone)]
pub struct LeafSumVisitor {
    sum: i64,
}

impl LeafSumVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeVisitor for LeafSumVisitor {
    fn visit_internal(&mut self, _node: &InternalVertex) {}

    fn visit_leaf(&mut self, leaf: &LeafVertex) {
        self.sum = self.sum.wrapping_add(leaf.value());
    }

    fn result(&self) -> i64 {
        self.sum
    }
}
