//! Reading tree input from bytes.
//!
//! [ByteParser] reads integer tokens from a [ByteSource](byte_source::ByteSource);
//! [InputParser] assembles them into a validated
//! [TreeInput](crate::model::TreeInput). Every problem is reported as
//! [InputError].
pub mod byte_parser;
pub mod byte_source;
pub mod in_memory_byte_source;
pub mod input_error;
pub mod input_parser;

pub use byte_parser::ByteParser;
pub use byte_source::ByteSource;
pub use in_memory_byte_source::InMemoryByteSource;
pub use input_error::{InputError, InputErrorType};
pub use input_parser::InputParser;
