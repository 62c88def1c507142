//! Data model for rooted trees reconstructed from edge lists.
//!
//! # Tree representation
//! Trees are represented by [RootedTree], which uses the arena pattern to
//! store [Vertex] values. Each vertex is either an [InternalVertex] or a
//! [LeafVertex], referenced by [VertexIndex]. All vertices implement
//! [TreeNode], the contract used for visitor dispatch.
//!
//! # Building trees
//! A [TreeInput] holds the validated vertex values, colors and undirected
//! edges. [TreeBuilder] turns it into a [RootedTree] rooted at vertex `1`:
//!
//! | Input vertex | Kind |
//! |--------------|------|
//! | sole vertex (`N == 1`) | Leaf |
//! | vertex `1` (`N > 1`) | Internal |
//! | exactly one neighbor | Leaf |
//! | otherwise | Internal |

pub mod tree;
pub mod tree_builder;
pub mod tree_input;
pub mod vertex;

pub use tree::FlatVertex;
pub use tree::RootedTree;
pub use tree::VertexIndex;
pub use tree_builder::AdjacencyMap;
pub use tree_builder::TreeBuilder;
pub use tree_builder::build_tree;
pub use tree_input::TreeInput;
pub use vertex::Color;
pub use vertex::InternalVertex;
pub use vertex::LeafVertex;
pub use vertex::TreeNode;
pub use vertex::Vertex;
pub use vertex::VertexId;
pub use vertex::VertexKind;
