//! Serializer: walks a [`Value`] tree and writes escaped JSON text.
//!
//! Emission is two-pass by design: the first pass walks the tree with a
//! [`CountingSink`] to compute the exact output length, the second fills a
//! [`BufferSink`] of that size. The bounded second pass failing with
//! [`Error::SinkOverflow`] would mean the two walks disagreed; it is a
//! consistency check, not an expected outcome.
//!
//! Canonical form:
//! - `null`, `true`, `false` literals;
//! - numbers in fixed (non-exponential) notation with six fractional
//!   digits, so `1` emits as `1.000000` — a deliberate, lossy canonical
//!   choice carried over from the original format;
//! - strings re-escape `\b \f \n \r \t \\ \" \/` and pass every other byte
//!   through verbatim (no `\uXXXX` re-encoding);
//! - objects in ascending byte-lexicographic key order, arrays in index
//!   order.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::value::Value;

/// Destination for emitted bytes.
///
/// Implementations receive the output as a series of small chunks in emission
/// order. A sink may fail, aborting the walk.
pub trait Sink {
    /// Accepts the next chunk of output.
    ///
    /// # Errors
    ///
    /// Implementation-defined; [`BufferSink`] fails with
    /// [`Error::SinkOverflow`] when the chunk does not fit.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

/// First-pass sink: counts bytes without storing them.
#[derive(Debug, Default)]
pub struct CountingSink {
    written: usize,
}

impl CountingSink {
    /// Creates a sink with a zero count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes accepted so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl Sink for CountingSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.written += bytes.len();
        Ok(())
    }
}

/// Second-pass sink: fills a fixed-capacity buffer and fails on overflow.
#[derive(Debug)]
pub struct BufferSink {
    buffer: Vec<u8>,
    capacity: usize,
}

impl BufferSink {
    /// Creates a sink that accepts at most `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Consumes the sink, returning the filled buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Sink for BufferSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if self.buffer.len() + bytes.len() > self.capacity {
            return Err(Error::SinkOverflow);
        }
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }
}

/// Serializes `value` into freshly allocated bytes.
///
/// # Errors
///
/// [`Error::NonFiniteNumber`] if the tree contains a NaN or infinity.
///
/// # Examples
///
/// ```
/// use jsoncodec::{emit, parse};
///
/// let value = parse(b"{\"foo\":true}")?;
/// assert_eq!(emit(&value)?, b"{\"foo\":true}");
/// # Ok::<(), jsoncodec::Error>(())
/// ```
pub fn emit(value: &Value) -> Result<Vec<u8>, Error> {
    let mut counter = CountingSink::new();
    emit_to_sink(value, &mut counter)?;

    let mut sink = BufferSink::with_capacity(counter.written());
    emit_to_sink(value, &mut sink)?;
    Ok(sink.into_bytes())
}

/// Serializes `value` into a `String`.
///
/// # Errors
///
/// Same as [`emit`].
pub fn emit_to_string(value: &Value) -> Result<String, Error> {
    let bytes = emit(value)?;
    // SAFETY: emission only writes string payloads (already valid UTF-8),
    // ASCII escapes and ASCII literals.
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

/// Walks `value` once, writing its serialized form into `sink`.
///
/// # Errors
///
/// [`Error::NonFiniteNumber`] for NaN/infinite numbers, plus anything the
/// sink returns.
pub fn emit_to_sink<S: Sink>(value: &Value, sink: &mut S) -> Result<(), Error> {
    match value {
        Value::Null => sink.write(b"null"),
        Value::Bool(true) => sink.write(b"true"),
        Value::Bool(false) => sink.write(b"false"),
        Value::Number(number) => write_number(*number, sink),
        Value::String(text) => write_string(text, sink),
        Value::Array(array) => {
            sink.write(b"[")?;
            for (index, element) in array.iter().enumerate() {
                if index > 0 {
                    sink.write(b",")?;
                }
                emit_to_sink(element, sink)?;
            }
            sink.write(b"]")
        }
        Value::Object(map) => {
            sink.write(b"{")?;
            for (index, (key, element)) in map.iter().enumerate() {
                if index > 0 {
                    sink.write(b",")?;
                }
                write_string(key, sink)?;
                sink.write(b":")?;
                emit_to_sink(element, sink)?;
            }
            sink.write(b"}")
        }
    }
}

/// Fixed-notation formatting with six fractional digits.
fn write_number<S: Sink>(number: f64, sink: &mut S) -> Result<(), Error> {
    if !number.is_finite() {
        return Err(Error::NonFiniteNumber);
    }
    let text = format!("{number:.6}");
    sink.write(text.as_bytes())
}

/// Writes `text` quoted, escaping the eight single-character escapes and
/// passing all other bytes through verbatim.
fn write_string<S: Sink>(text: &str, sink: &mut S) -> Result<(), Error> {
    sink.write(b"\"")?;
    let bytes = text.as_bytes();
    let mut plain = 0; // start of the current run of unescaped bytes
    for (index, &byte) in bytes.iter().enumerate() {
        let escape: &[u8] = match byte {
            0x08 => b"\\b",
            0x0C => b"\\f",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            b'\\' => b"\\\\",
            b'"' => b"\\\"",
            b'/' => b"\\/",
            _ => continue,
        };
        if plain < index {
            sink.write(&bytes[plain..index])?;
        }
        sink.write(escape)?;
        plain = index + 1;
    }
    if plain < bytes.len() {
        sink.write(&bytes[plain..])?;
    }
    sink.write(b"\"")
}
