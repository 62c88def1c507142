//! Treevis reconstructs a rooted tree from a vertex and edge list and
//! computes several aggregates over it in a single traversal.
//!
//! Core functionality provided:
//! - Tree builder: turns vertex values, vertex colors and undirected edges
//!   into a [RootedTree](model::RootedTree) rooted at vertex `1`, assigning
//!   depths and classifying each vertex as leaf or internal vertex.
//!   See [crate::model] for details.
//! - Visitor protocol: [TreeVisitor](visitor::TreeVisitor) with one method
//!   per vertex kind. Three visitors are provided:
//!   - leaf-sum: sum of the values of all leaves
//!   - red-product: product of the values of red vertices modulo `1_000_000_007`
//!   - depth-parity: `|internal vertices at even depth - green leaves|`
//! - Traversal driver: dispatches every vertex to every visitor in one
//!   pre-order pass. See [crate::visitor].
//! - Input parser: reads the whitespace-separated input format and
//!   validates it before any tree is built. See [crate::parser].
//!
//! Limitations:
//! - The edges are trusted to form a tree; cycles or disconnected parts
//!   are not reported (unreachable vertices are simply not part of the tree)
//!
//! # Usage patterns
//! 1. Quick API: [evaluate_str] / [evaluate_reader] parse, build and
//!    traverse in one call.
//! 2. Step by step: build a [TreeInput](model::TreeInput), then a tree with
//!    [TreeBuilder](model::TreeBuilder), and run your own visitors with
//!    [accept_visitors](visitor::accept_visitors).
//!
//! ## Example Quick API
//! ```
//! use treevis::evaluate_str;
//!
//! let aggregates = evaluate_str("5\n4 7 2 5 12\n0 1 0 0 1\n1 2\n1 3\n3 4\n3 5\n")?;
//! assert_eq!(aggregates.leaf_sum, 24);
//! assert_eq!(aggregates.red_product, 40);
//! assert_eq!(aggregates.depth_parity, 15);
//! # Ok::<(), treevis::parser::InputError>(())
//! ```
//!
//! ## Example Step by Step
//! ```
//! use treevis::model::{TreeBuilder, TreeInput};
//! use treevis::visitor::{RedProductVisitor, TreeVisitor, accept_visitors};
//!
//! let input = TreeInput::new(2, vec![6, 7], vec![0, 0], vec![(1, 2)])?;
//! let tree = TreeBuilder::new(&input).build();
//!
//! let mut red_product = RedProductVisitor::new();
//! accept_visitors(&tree, &mut [&mut red_product]);
//! assert_eq!(red_product.result(), 42);
//! # Ok::<(), treevis::parser::InputError>(())
//! ```

pub mod model;
pub mod parser;
pub mod visitor;

use crate::model::{TreeBuilder, TreeInput};
use crate::parser::{ByteParser, InputError, InputParser};
use crate::visitor::Aggregates;
use std::io::Read;

// ============================================================================
// Quick Input API
// ============================================================================
/// Parses a string in the input format into a validated [TreeInput].
///
/// See [parser::input_parser] for the format.
pub fn parse_input_str<S: AsRef<str>>(input: S) -> Result<TreeInput, InputError> {
    InputParser::new(ByteParser::for_str(input.as_ref())).parse()
}

/// Reads `reader` to its end and parses it into a validated [TreeInput].
pub fn parse_input_reader<R: Read>(reader: R) -> Result<TreeInput, InputError> {
    InputParser::new(ByteParser::from_reader(reader)?).parse()
}

// ============================================================================
// Quick Evaluation API
// ============================================================================
/// Builds the rooted tree of `input` and computes all three [Aggregates].
pub fn evaluate_input(input: &TreeInput) -> Aggregates {
    let tree = TreeBuilder::new(input).build();
    visitor::evaluate(&tree)
}

/// Parses, builds and evaluates a string in the input format.
pub fn evaluate_str<S: AsRef<str>>(input: S) -> Result<Aggregates, InputError> {
    Ok(evaluate_input(&parse_input_str(input)?))
}

/// Parses, builds and evaluates everything readable from `reader`.
pub fn evaluate_reader<R: Read>(reader: R) -> Result<Aggregates, InputError> {
    Ok(evaluate_input(&parse_input_reader(reader)?))
}
