//! Parser for the tree input format.
//!
//! # Format
//! Whitespace-separated integer tokens; line breaks carry no meaning:
//! * `N` - number of vertices
//! * `N` values, one per vertex in vertex order
//! * `N` colors, `0` (red) or `1` (green)
//! * `N - 1` edges, each as two vertex identifiers `u v` in `1..=N`
//!
//! For example, a tree of five vertices:
//! ```text
//! 5
//! 4 7 2 5 12
//! 0 1 0 0 1
//! 1 2
//! 1 3
//! 3 4
//! 3 5
//! ```
//!
//! Any deviation (missing or extra tokens, non-integer tokens, invalid
//! colors or endpoints) is reported as [InputError]; no partial input is
//! ever returned.

use crate::model::TreeInput;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::input_error::InputError;

// =#========================================================================#=
// INPUT PARSER
// =#========================================================================$=
/// Parser turning a byte stream into a validated [TreeInput].
///
/// # Example
/// ```
/// use treevis::parser::{ByteParser, InputParser};
///
/// let byte_parser = ByteParser::for_str("3\n1 2 3\n0 1 1\n1 2\n2 3\n");
/// let input = InputParser::new(byte_parser).parse()?;
///
/// assert_eq!(input.node_count(), 3);
/// assert_eq!(input.edges(), &[(1, 2), (2, 3)]);
/// # Ok::<(), treevis::parser::InputError>(())
/// ```
pub struct InputParser<S: ByteSource> {
    byte_parser: ByteParser<S>,
}

impl<S: ByteSource> InputParser<S> {
    /// Creates a parser reading from `byte_parser`.
    pub fn new(byte_parser: ByteParser<S>) -> Self {
        Self { byte_parser }
    }

    /// Parses the complete input, consuming the parser.
    ///
    /// # Errors
    /// Returns an [InputError] if the input ends early, contains a token
    /// that is not an integer, has tokens left after the last edge, or
    /// violates one of the invariants of [TreeInput].
    pub fn parse(mut self) -> Result<TreeInput, InputError> {
        let node_count = self.expect_count()?;

        let mut values = Vec::new();
        for id in 1..=node_count {
            values.push(self.expect_integer(|| format!("value of vertex {id}"))?);
        }

        let mut colors = Vec::new();
        for id in 1..=node_count {
            colors.push(self.expect_integer(|| format!("color of vertex {id}"))?);
        }

        let mut edges = Vec::new();
        for edge in 1..node_count {
            let u = self.expect_integer(|| format!("first endpoint of edge {edge}"))?;
            let v = self.expect_integer(|| format!("second endpoint of edge {edge}"))?;
            edges.push((u, v));
        }

        self.byte_parser.skip_whitespace();
        if !self.byte_parser.is_eof() {
            return Err(InputError::trailing_input(&mut self.byte_parser));
        }

        log::debug!("parsed input with {} vertices and {} edges", node_count, edges.len());
        TreeInput::new(node_count, values, colors, edges)
    }

    /// Reads the vertex count, which must be a non-negative integer.
    fn expect_count(&mut self) -> Result<usize, InputError> {
        self.byte_parser.skip_whitespace();
        let start = self.byte_parser.position();
        let count = self.expect_integer(|| "number of vertices".to_string())?;

        usize::try_from(count).map_err(|_| {
            self.byte_parser.set_position(start);
            InputError::invalid_integer(&mut self.byte_parser, count.to_string())
        })
    }

    /// Reads the next integer, describing it with `expected` if the input ends.
    fn expect_integer<F: FnOnce() -> String>(&mut self, expected: F) -> Result<i64, InputError> {
        match self.byte_parser.parse_integer()? {
            Some(number) => Ok(number),
            None => Err(InputError::unexpected_eof(&mut self.byte_parser, expected())),
        }
    }
}

