//! Binary codec for the `.aco` wire format.
//!
//! The codec follows a layered structure:
//! - `layout`: version tags, record sizes, field conventions (source of truth)
//! - `reader`: bounds-checked cursor access over the input buffer
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `writer`: canonical version-2 serialization
//! - `error`: explicit, actionable errors
//!
//! Decode and encode are pure transforms over in-memory buffers; sources
//! and sinks live with the caller.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use parser::decode;
pub use writer::encode;
