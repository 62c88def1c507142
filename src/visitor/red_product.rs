//! Product of the values of all red vertices, modulo [RED_PRODUCT_MODULUS].

use crate::model::{InternalVertex, LeafVertex, TreeNode};
use crate::visitor::TreeVisitor;

/// Modulus applied after every multiplication.
pub const RED_PRODUCT_MODULUS: i64 = 1_000_000_007;

/// Multiplies the values of all red vertices, internal and leaf alike.
///
/// The running product starts at `1`, so a tree without red vertices yields
/// `1`. After every multiplication the product is reduced to
/// `[0, RED_PRODUCT_MODULUS)` (Euclidean remainder, so negative values
/// stay in range too). The intermediate product is computed in 128 bits.
#[derive(Debug, Clone)]
pub struct RedProductVisitor {
    product: i64,
}

impl RedProductVisitor {
    pub fn new() -> Self {
        Self { product: 1 }
    }

    fn multiply(&mut self, value: i64) {
        let product = i128::from(self.product) * i128::from(value);
        self.product = product.rem_euclid(i128::from(RED_PRODUCT_MODULUS)) as i64;
    }
}

impl Default for RedProductVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeVisitor for RedProductVisitor {
    fn visit_internal(&mut self, node: &InternalVertex) {
        if node.color().is_red() {
            self.multiply(node.value());
        }
    }

    fn visit_leaf(&mut self, leaf: &LeafVertex) {
        if leaf.color().is_red() {
            self.multiply(leaf.value());
        }
    }

    fn result(&self) -> i64 {
        self.product
    }
}
