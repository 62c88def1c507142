//! Difference between internal vertices at even depth and green leaves.

use crate::model::{InternalVertex, LeafVertex, TreeNode};
use crate::visitor::TreeVisitor;

/// Computes `|a - b|`, where `a` is the sum of the values of internal
/// vertices at even depth (the root included, at depth `0`) and `b` the sum
/// of the values of green leaves.
///
/// Note that a single-vertex tree consists of one leaf, so its root counts
/// towards `b` (if green) and never towards `a`.
///
/// Sums, difference and absolute value wrap around on `i64` overflow, so
/// a difference of exactly `i64::MIN` is returned as `i64::MIN`.
#[derive(Debug, Default, Clone)]
pub struct DepthParityVisitor {
    even_depth_internal_sum: i64,
    green_leaf_sum: i64,
}

impl DepthParityVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeVisitor for DepthParityVisitor {
    fn visit_internal(&mut self, node: &InternalVertex) {
        if node.depth() % 2 == 0 {
            self.even_depth_internal_sum = self.even_depth_internal_sum.wrapping_add(node.value());
        }
    }

    fn visit_leaf(&mut self, leaf: &LeafVertex) {
        if leaf.color().is_green() {
            self.green_leaf_sum = self.green_leaf_sum.wrapping_add(leaf.value());
        }
    }

    fn result(&self) -> i64 {
        self.even_depth_internal_sum
            .wrapping_sub(self.green_leaf_sum)
            .wrapping_abs()
    }
}
