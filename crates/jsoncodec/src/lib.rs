//! An embeddable JSON codec: parse UTF-8 text into an owned [`Value`] tree
//! and serialize the tree back to canonical JSON text.
//!
//! The crate is `no_std` (plus `alloc`), so it embeds anywhere an allocator
//! exists. Ownership of parsed trees follows ordinary Rust semantics: moving
//! a value into an [`ObjectMap`] or [`Array`] transfers ownership, accessors
//! hand out borrows, and dropping a container releases its whole subtree.
//!
//! Scan and parse failures report a half-open byte [`Span`] into the
//! original input, down to the exact byte for UTF-8 violations (truncated
//! sequences, overlong encodings, surrogate-range codepoints).
//!
//! ```
//! use jsoncodec::{emit_to_string, parse_str};
//!
//! let value = parse_str(r#"{"active":true,"tags":[null,false]}"#)?;
//! assert!(value.as_object()?.get("active")?.as_bool()?);
//! assert_eq!(
//!     emit_to_string(&value)?,
//!     r#"{"active":true,"tags":[null,false]}"#
//! );
//! # Ok::<(), jsoncodec::Error>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod array;
mod emit;
mod error;
mod map;
mod options;
mod parser;
mod primitive;
mod scanner;
mod value;

pub use array::Array;
pub use emit::{emit, emit_to_sink, emit_to_string, BufferSink, CountingSink, Sink};
pub use error::{Error, Span};
pub use map::{Iter as ObjectIter, ObjectMap};
pub use options::ParseOptions;
pub use parser::{parse, parse_str, parse_with};
pub use value::{Value, ValueKind};
