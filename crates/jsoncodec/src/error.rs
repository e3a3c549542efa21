//! Error taxonomy shared by the scanner, parser, containers and emitter.
//!
//! Scan and parse failures carry a [`Span`]: a half-open byte range
//! `[begin, end)` into the original input, so callers can highlight the
//! offending region.

use bstr::BStr;
use core::fmt;
use thiserror::Error;

use crate::value::ValueKind;

/// A half-open byte range `[begin, end)` into the scanned input.
///
/// An empty span (`begin == end`) marks a single position, e.g. the offset at
/// which a missing closing quote was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte covered by the span.
    pub begin: usize,
    /// Offset one past the last byte covered by the span.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `[begin, end)`.
    #[must_use]
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Creates an empty span marking a single position.
    #[must_use]
    pub fn at(position: usize) -> Self {
        Self {
            begin: position,
            end: position,
        }
    }

    /// Number of bytes covered by the span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Returns `true` if the span marks a position rather than a byte range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    /// Returns the input bytes covered by the span, as a byte string suitable
    /// for display. Out-of-range spans (e.g. a position past end of input)
    /// yield an empty byte string.
    #[must_use]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a BStr {
        input
            .get(self.begin..self.end.min(input.len()))
            .unwrap_or_default()
            .into()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bytes {}..{}", self.begin, self.end)
    }
}

/// All failure kinds reported by this crate.
///
/// Scan and parse variants carry the [`Span`] of the offending bytes;
/// container and emitter variants describe the failed operation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// End of input reached inside a string literal.
    #[error("unterminated string literal ({span})")]
    UnterminatedString {
        /// Position at which the closing quote was expected.
        span: Span,
    },

    /// A UTF-8 continuation byte appeared without a preceding lead byte.
    #[error("continuation byte without a lead byte ({span})")]
    BareContinuationByte {
        /// The stray continuation byte.
        span: Span,
    },

    /// A multi-byte UTF-8 sequence ended before all continuation bytes.
    #[error("truncated {expected}-byte UTF-8 sequence ({span})")]
    TruncatedSequence {
        /// Declared length of the sequence, from its lead byte.
        expected: u8,
        /// Position that should have held a continuation byte.
        span: Span,
    },

    /// A UTF-8 sequence encoded a codepoint below the minimum for its length.
    #[error("overlong UTF-8 encoding ({span})")]
    OverlongEncoding {
        /// The complete offending sequence.
        span: Span,
    },

    /// A three-byte UTF-8 sequence decoded into the UTF-16 surrogate range.
    #[error("UTF-16 surrogate codepoint in UTF-8 input ({span})")]
    SurrogateCodepoint {
        /// The complete offending sequence.
        span: Span,
    },

    /// A sequence decoded above the maximum codepoint U+10FFFF.
    #[error("codepoint beyond U+10FFFF ({span})")]
    CodepointOutOfRange {
        /// The complete offending sequence.
        span: Span,
    },

    /// An unescaped control byte appeared inside a string literal.
    #[error("unescaped control byte in string literal ({span})")]
    ControlByteInString {
        /// Position of the control byte.
        span: Span,
    },

    /// A byte that cannot begin any symbol, or a malformed keyword.
    #[error("unexpected byte ({span})")]
    UnexpectedByte {
        /// The offending byte.
        span: Span,
    },

    /// A number literal violating the JSON number grammar.
    #[error("malformed number literal ({span})")]
    InvalidNumber {
        /// The offending literal, up to the first invalid byte.
        span: Span,
    },

    /// A symbol that cannot begin or continue the expected production.
    #[error("unexpected symbol ({span})")]
    UnexpectedSymbol {
        /// The offending symbol.
        span: Span,
    },

    /// Non-whitespace content after a complete top-level value.
    #[error("trailing content after value ({span})")]
    TrailingInput {
        /// The first trailing symbol.
        span: Span,
    },

    /// A backslash followed by an unknown escape letter, or a `\u` escape
    /// with fewer than four hex digits.
    #[error("invalid escape sequence ({span})")]
    InvalidEscape {
        /// The offending escape sequence.
        span: Span,
    },

    /// A `\uXXXX` escape in the surrogate range without its pair.
    #[error("unpaired surrogate escape ({span})")]
    UnpairedSurrogateEscape {
        /// The offending escape sequence.
        span: Span,
    },

    /// Object/array nesting exceeded [`ParseOptions::max_depth`].
    ///
    /// [`ParseOptions::max_depth`]: crate::ParseOptions::max_depth
    #[error("nesting depth limit exceeded ({span})")]
    DepthLimitExceeded {
        /// The opening bracket that crossed the limit.
        span: Span,
    },

    /// A typed accessor was invoked against a value of a different kind.
    #[error("wrong value kind: expected {expected}, found {actual}")]
    WrongType {
        /// The kind the accessor requires.
        expected: ValueKind,
        /// The kind actually present.
        actual: ValueKind,
    },

    /// Object lookup miss.
    #[error("key not found")]
    KeyNotFound,

    /// Array access at or past the array length.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The array length.
        len: usize,
    },

    /// The bounded emission sink would overflow its buffer.
    #[error("emission sink overflow")]
    SinkOverflow,

    /// A NaN or infinite number cannot be serialized as JSON.
    #[error("non-finite number cannot be emitted")]
    NonFiniteNumber,
}

impl Error {
    /// The input span of a scan or parse failure, if this error carries one.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnterminatedString { span }
            | Self::BareContinuationByte { span }
            | Self::TruncatedSequence { span, .. }
            | Self::OverlongEncoding { span }
            | Self::SurrogateCodepoint { span }
            | Self::CodepointOutOfRange { span }
            | Self::ControlByteInString { span }
            | Self::UnexpectedByte { span }
            | Self::InvalidNumber { span }
            | Self::UnexpectedSymbol { span }
            | Self::TrailingInput { span }
            | Self::InvalidEscape { span }
            | Self::UnpairedSurrogateEscape { span }
            | Self::DepthLimitExceeded { span } => Some(*span),
            Self::WrongType { .. }
            | Self::KeyNotFound
            | Self::IndexOutOfBounds { .. }
            | Self::SinkOverflow
            | Self::NonFiniteNumber => None,
        }
    }
}
