//! Byte source abstraction for the input parser.
//!
//! This module provides the [ByteSource] trait, implemented by
//! [InMemoryByteSource](crate::parser::in_memory_byte_source::InMemoryByteSource).

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================T=
/// Trait defining the interface for byte sources used by
/// [ByteParser](crate::parser::ByteParser).
pub trait ByteSource {
    /// Peek at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn peek(&mut self) -> Option<u8>;

    /// Get the current byte and advance the position (consume it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn next_byte(&mut self) -> Option<u8>;

    /// Returns up to `k` bytes from the current position for error context.
    fn get_context(&mut self, k: usize) -> Vec<u8>;

    /// Returns the current position in the byte stream.
    fn position(&self) -> usize;

    /// Sets the position in the byte stream.
    ///
    /// # Arguments
    /// * `pos` - The byte offset to seek to
    fn set_position(&mut self, pos: usize);

    /// Check if at end of data.
    fn is_eof(&mut self) -> bool;
}
