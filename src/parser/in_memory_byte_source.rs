//! In-memory implementation of byte source for parser.

use crate::parser::byte_source::ByteSource;
use std::io::Read;

// =#========================================================================#=
// IN MEMORY BYTE SOURCE
// =#========================================================================$=
/// An in-memory byte source that owns its data.
///
/// Input is read once and completely before parsing starts, so standard
/// input or a file are consumed with [`from_reader`](Self::from_reader).
pub struct InMemoryByteSource {
    /// The owned byte data being parsed
    input: Vec<u8>,
    /// Current position in the byte slice
    pos: usize,
}

impl InMemoryByteSource {
    /// Creates a new in-memory byte source from a Vec of bytes.
    ///
    /// # Arguments
    /// * `bytes` - The byte vector to parse
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            input: bytes,
            pos: 0,
        }
    }

    /// Reads `reader` to its end and creates a byte source from the contents.
    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<InMemoryByteSource> {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        Ok(Self::from_vec(contents))
    }
}

impl ByteSource for InMemoryByteSource {
    #[inline(always)]
    fn peek(&mut self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline(always)]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn get_context(&mut self, k: usize) -> Vec<u8> {
        let start = self.pos.min(self.input.len());
        let end = (start + k).min(self.input.len());
        self.input[start..end].to_vec()
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn is_eof(&mut self) -> bool {
        self.pos >= self.input.len()
    }
}
