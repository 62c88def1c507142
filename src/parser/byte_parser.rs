//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] for reading whitespace-separated
//! integer tokens, with support for peeking, consuming and context
//! extraction for error reporting. Used as the foundation of the
//! [InputParser](crate::parser::InputParser).

use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::input_error::InputError;
use std::io::Read;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser for ASCII text with support for peeking and consuming.
///
/// # Example
/// ```
/// use treevis::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  42\n-7 ");
/// assert_eq!(parser.parse_integer().unwrap(), Some(42));
/// assert_eq!(parser.parse_integer().unwrap(), Some(-7));
/// assert_eq!(parser.parse_integer().unwrap(), None);
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a string by copying it into a Vec.
    ///
    /// # Arguments
    /// * `input` - The string to parse
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` by reading `reader` to its end.
    ///
    /// # Errors
    /// Returns an error if reading fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        Ok(Self::new(InMemoryByteSource::from_reader(reader)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    ///
    /// # Arguments
    /// * `source` - The byte source to parse
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&mut self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive whitespace characters.
    ///
    /// Whitespace includes: space (' '), tab ('\t'), newline ('\n'), and carriage return ('\r').
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Parses the next whitespace-delimited token as signed 64-bit integer.
    ///
    /// Leading whitespace is skipped. A token is everything up to the next
    /// whitespace or EOF; an optional leading `+` or `-` is accepted.
    ///
    /// # Returns
    /// * `Ok(Some(i64))` - The parsed integer
    /// * `Ok(None)` - If only whitespace was left (EOF)
    ///
    /// # Errors
    /// Returns an error if the token is not an integer or does not fit into
    /// 64 bits. The error points at the start of the offending token.
    pub fn parse_integer(&mut self) -> Result<Option<i64>, InputError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Ok(None);
        }

        let start = self.position();
        let mut token = String::new();
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                break;
            }
            token.push(b as char);
            self.next_byte();
        }

        match token.parse::<i64>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                self.set_position(start);
                Err(InputError::invalid_integer(self, token))
            }
        }
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&mut self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current parser position in the input.
    ///
    /// Useful for error messages and tracking parser state.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Sets the position in the byte stream.
    ///
    /// # Arguments
    /// * `pos` - The byte offset to seek to
    pub fn set_position(&mut self, pos: usize) {
        self.source.set_position(pos);
    }

    /// Returns up to `k` bytes from the current position for error context.
    pub fn get_context(&mut self, k: usize) -> Vec<u8> {
        self.source.get_context(k)
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&mut self, k: usize) -> String {
        let context_bytes = self.get_context(k);
        String::from_utf8_lossy(&context_bytes).into_owned()
    }
}

#[inline(always)]
fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}
