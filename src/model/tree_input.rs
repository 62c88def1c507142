//! Validated description of an unrooted tree: vertex values, vertex colors
//! and undirected edges.

use crate::model::vertex::{Color, VertexId};
use crate::parser::input_error::{InputError, InputErrorType};

// =#========================================================================#=
// TREE INPUT
// =#========================================================================#=
/// Vertex count, per-vertex values and colors, and undirected edges of a tree.
///
/// Vertices are numbered `1..=N`; vertex `i` has value `values()[i - 1]` and
/// color `colors()[i - 1]`.
///
/// # Invariants
/// Enforced by [`TreeInput::new`]:
/// - `node_count >= 1`
/// - exactly `node_count` values and colors, each color `0` or `1`
/// - exactly `node_count - 1` edges with distinct endpoints in `1..=node_count`
///
/// Whether the edges actually form a connected acyclic graph is *not*
/// checked; the builder trusts the input on that.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeInput {
    node_count: usize,
    values: Vec<i64>,
    colors: Vec<Color>,
    edges: Vec<(VertexId, VertexId)>,
}

impl TreeInput {
    /// Validates raw input and creates a [TreeInput].
    ///
    /// # Arguments
    /// * `node_count` - Number of vertices `N`
    /// * `values` - Value of each vertex, in vertex order
    /// * `colors` - Color code of each vertex, `0` (red) or `1` (green)
    /// * `edges` - Undirected edges as pairs of vertex identifiers
    ///
    /// # Errors
    /// Returns an [InputError] describing the first violated invariant.
    ///
    /// # Example
    /// ```
    /// use treevis::model::TreeInput;
    ///
    /// let input = TreeInput::new(3, vec![1, 2, 3], vec![0, 1, 0], vec![(1, 2), (1, 3)]).unwrap();
    /// assert_eq!(input.node_count(), 3);
    ///
    /// assert!(TreeInput::new(3, vec![1, 2, 3], vec![0, 1, 0], vec![(1, 2), (1, 4)]).is_err());
    /// ```
    pub fn new(
        node_count: usize,
        values: Vec<i64>,
        colors: Vec<i64>,
        edges: Vec<(i64, i64)>,
    ) -> Result<Self, InputError> {
        if node_count == 0 {
            return Err(InputError::without_context(InputErrorType::EmptyTree));
        }

        if values.len() != node_count {
            return Err(InputError::without_context(InputErrorType::ValueCountMismatch {
                expected: node_count,
                found: values.len(),
            }));
        }

        if colors.len() != node_count {
            return Err(InputError::without_context(InputErrorType::ColorCountMismatch {
                expected: node_count,
                found: colors.len(),
            }));
        }

        let colors = colors
            .into_iter()
            .enumerate()
            .map(|(i, code)| {
                Color::try_from(code).map_err(|code| {
                    InputError::without_context(InputErrorType::InvalidColor { vertex: i + 1, code })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if edges.len() != node_count - 1 {
            return Err(InputError::without_context(InputErrorType::EdgeCountMismatch {
                expected: node_count - 1,
                found: edges.len(),
            }));
        }

        let edges = edges
            .into_iter()
            .enumerate()
            .map(|(i, (u, v))| {
                let edge = i + 1;
                let u = to_vertex_id(u, node_count, edge)?;
                let v = to_vertex_id(v, node_count, edge)?;
                if u == v {
                    return Err(InputError::without_context(InputErrorType::SelfLoop { edge, vertex: u }));
                }
                Ok((u, v))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            node_count,
            values,
            colors,
            edges,
        })
    }

    /// Returns the number of vertices.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the values of all vertices, in vertex order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the colors of all vertices, in vertex order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the undirected edges.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Returns value of vertex `id`.
    ///
    /// # Panics
    /// Panics if `id` is not in `1..=N`.
    pub fn value_of(&self, id: VertexId) -> i64 {
        self.values[id - 1]
    }

    /// Returns color of vertex `id`.
    ///
    /// # Panics
    /// Panics if `id` is not in `1..=N`.
    pub fn color_of(&self, id: VertexId) -> Color {
        self.colors[id - 1]
    }
}

fn to_vertex_id(endpoint: i64, node_count: usize, edge: usize) -> Result<VertexId, InputError> {
    match usize::try_from(endpoint) {
        Ok(id) if (1..=node_count).contains(&id) => Ok(id),
        _ => Err(InputError::without_context(InputErrorType::EdgeOutOfRange { edge, endpoint })),
    }
}
