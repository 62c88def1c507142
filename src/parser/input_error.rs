//! Error types for reading and validating tree input.
//!
//! This module provides [InputError] and [InputErrorType] for representing
//! and reporting malformed input: wrong token counts, non-integer tokens,
//! invalid colors and edge endpoints out of range. All of them are detected
//! before any tree is constructed.

use crate::model::vertex::VertexId;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// INPUT ERROR TYPE
// =#========================================================================#=
/// Kinds of malformed input.
#[derive(PartialEq, Debug, Clone)]
pub enum InputErrorType {
    IoError(String),
    /// Input ended while the given item was still expected
    UnexpectedEOF(String),
    /// Token that is not a (64-bit) integer
    InvalidInteger(String),
    /// Further tokens after the last edge
    TrailingInput,
    /// Vertex count of zero
    EmptyTree,
    ValueCountMismatch { expected: usize, found: usize },
    ColorCountMismatch { expected: usize, found: usize },
    /// Color code other than `0` (red) or `1` (green)
    InvalidColor { vertex: VertexId, code: i64 },
    EdgeCountMismatch { expected: usize, found: usize },
    /// Edge (1-based position in edge list) with endpoint outside `1..=N`
    EdgeOutOfRange { edge: usize, endpoint: i64 },
    /// Edge (1-based position in edge list) joining a vertex with itself
    SelfLoop { edge: usize, vertex: VertexId },
}

// =#========================================================================#=
// INPUT ERROR
// =#========================================================================$=
/// Input error with contextual information (position and surrounding bytes).
///
/// Errors raised while validating already tokenized input carry no context
/// and position `0`.
#[derive(Debug)]
pub struct InputError {
    kind: InputErrorType,
    position: usize,
    context: String,
}

impl InputError {
    /// Create an InputError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: InputErrorType, parser: &mut ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEOF
    pub fn unexpected_eof<S: ByteSource>(parser: &mut ByteParser<S>, expected: String) -> Self {
        Self::from_parser(InputErrorType::UnexpectedEOF(expected), parser)
    }

    /// Convenience constructor for InvalidInteger
    pub fn invalid_integer<S: ByteSource>(parser: &mut ByteParser<S>, token: String) -> Self {
        Self::from_parser(InputErrorType::InvalidInteger(token), parser)
    }

    /// Convenience constructor for TrailingInput
    pub fn trailing_input<S: ByteSource>(parser: &mut ByteParser<S>) -> Self {
        Self::from_parser(InputErrorType::TrailingInput, parser)
    }

    /// Create an InputError without parser context (for validation errors)
    pub fn without_context(kind: InputErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &InputErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            InputErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
            InputErrorType::UnexpectedEOF(expected) => {
                write!(f, "Unexpected end of input, expected {expected}")?
            }
            InputErrorType::InvalidInteger(token) => write!(f, "Invalid integer '{token}'")?,
            InputErrorType::TrailingInput => write!(f, "Unexpected input after last edge")?,
            InputErrorType::EmptyTree => write!(f, "Tree must have at least one vertex")?,
            InputErrorType::ValueCountMismatch { expected, found } => {
                write!(f, "Expected {expected} values, found {found}")?
            }
            InputErrorType::ColorCountMismatch { expected, found } => {
                write!(f, "Expected {expected} colors, found {found}")?
            }
            InputErrorType::InvalidColor { vertex, code } => {
                write!(f, "Invalid color {code} of vertex {vertex} - must be 0 or 1")?
            }
            InputErrorType::EdgeCountMismatch { expected, found } => {
                write!(f, "Expected {expected} edges, found {found}")?
            }
            InputErrorType::EdgeOutOfRange { edge, endpoint } => {
                write!(f, "Endpoint {endpoint} of edge {edge} is not a vertex")?
            }
            InputErrorType::SelfLoop { edge, vertex } => {
                write!(f, "Edge {edge} joins vertex {vertex} with itself")?
            }
        }

        if !self.context.is_empty() || self.position > 0 {
            write!(f, " at position {}", self.position)?;
        }

        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} bytes): {}", self.context.len(), self.context)?;
        }

        Ok(())
    }
}

impl Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::without_context(InputErrorType::IoError(err.to_string()))
    }
}
