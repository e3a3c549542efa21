//! Recursive-descent parser over the symbol stream.
//!
//! Grammar (RFC 8259):
//!
//! ```text
//! value   := object | array | string | number | "true" | "false" | "null"
//! object  := "{" (member ("," member)*)? "}"
//! member  := string ":" value
//! array   := "[" (value ("," value)*)? "]"
//! ```
//!
//! The top-level entry parses exactly one value and then requires end of
//! input; trailing non-whitespace content is [`Error::TrailingInput`].
//! Partially built trees are plain owned values, so any error exit drops
//! them without leaks.
//!
//! String payloads are built by re-interpreting the scanned span: the eight
//! single-character escapes map to their byte, `\uXXXX` escapes decode to
//! UTF-8 (UTF-16 surrogate pairs combine; unpaired halves are
//! [`Error::UnpairedSurrogateEscape`]), and all other bytes pass through
//! unchanged. Numbers convert with standard floating-point semantics;
//! overflow saturates per IEEE-754 and raises no error here.

use alloc::string::String;
use alloc::vec::Vec;

use crate::array::Array;
use crate::error::{Error, Span};
use crate::map::ObjectMap;
use crate::options::ParseOptions;
use crate::scanner::{Scanner, Symbol};
use crate::value::Value;

/// Parses exactly one JSON value from `input` with default options.
///
/// # Errors
///
/// Any scan or parse error, with the span of the offending bytes.
///
/// # Examples
///
/// ```
/// use jsoncodec::{parse, Value};
///
/// assert_eq!(parse(b"true")?, Value::Bool(true));
/// assert!(parse(b"true}").is_err()); // trailing content
/// # Ok::<(), jsoncodec::Error>(())
/// ```
pub fn parse(input: &[u8]) -> Result<Value, Error> {
    parse_with(input, ParseOptions::default())
}

/// Parses exactly one JSON value from a string slice.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(text: &str) -> Result<Value, Error> {
    parse(text.as_bytes())
}

/// Parses exactly one JSON value with explicit [`ParseOptions`].
///
/// # Errors
///
/// Same as [`parse`], plus [`Error::DepthLimitExceeded`] when nesting
/// crosses `options.max_depth`.
pub fn parse_with(input: &[u8], options: ParseOptions) -> Result<Value, Error> {
    let mut parser = Parser {
        input,
        scanner: Scanner::new(input),
        depth_left: options.max_depth,
    };
    let value = parser.parse_value()?;
    let (symbol, span) = parser.scanner.next_symbol()?;
    if symbol == Symbol::End {
        Ok(value)
    } else {
        Err(Error::TrailingInput { span })
    }
}

struct Parser<'a> {
    input: &'a [u8],
    scanner: Scanner<'a>,
    depth_left: usize,
}

impl Parser<'_> {
    fn parse_value(&mut self) -> Result<Value, Error> {
        let (symbol, span) = self.scanner.next_symbol()?;
        self.parse_value_at(symbol, span)
    }

    fn parse_value_at(&mut self, symbol: Symbol, span: Span) -> Result<Value, Error> {
        match symbol {
            Symbol::Null => Ok(Value::Null),
            Symbol::True => Ok(Value::Bool(true)),
            Symbol::False => Ok(Value::Bool(false)),
            Symbol::Number => self.number_payload(span).map(Value::Number),
            Symbol::String => self.string_payload(span).map(Value::String),
            Symbol::ObjectOpen => self.parse_object(span),
            Symbol::ArrayOpen => self.parse_array(span),
            _ => Err(Error::UnexpectedSymbol { span }),
        }
    }

    fn enter(&mut self, open: Span) -> Result<(), Error> {
        if self.depth_left == 0 {
            return Err(Error::DepthLimitExceeded { span: open });
        }
        self.depth_left -= 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth_left += 1;
    }

    /// `object := "{" (member ("," member)*)? "}"`, opening brace consumed.
    fn parse_object(&mut self, open: Span) -> Result<Value, Error> {
        self.enter(open)?;
        let mut map = ObjectMap::new();

        let (mut symbol, mut span) = self.scanner.next_symbol()?;
        if symbol == Symbol::ObjectClose {
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            if symbol != Symbol::String {
                return Err(Error::UnexpectedSymbol { span });
            }
            let key = self.string_payload(span)?;

            let (colon, colon_span) = self.scanner.next_symbol()?;
            if colon != Symbol::Colon {
                return Err(Error::UnexpectedSymbol { span: colon_span });
            }

            let value = self.parse_value()?;
            // Duplicate keys follow container semantics: the later member
            // replaces (and drops) the earlier one.
            map.put(key, value);

            let (next, next_span) = self.scanner.next_symbol()?;
            match next {
                Symbol::ObjectClose => {
                    self.leave();
                    return Ok(Value::Object(map));
                }
                Symbol::Comma => (symbol, span) = self.scanner.next_symbol()?,
                _ => return Err(Error::UnexpectedSymbol { span: next_span }),
            }
        }
    }

    /// `array := "[" (value ("," value)*)? "]"`, opening bracket consumed.
    fn parse_array(&mut self, open: Span) -> Result<Value, Error> {
        self.enter(open)?;
        let mut values = Vec::new();

        let (symbol, span) = self.scanner.next_symbol()?;
        if symbol == Symbol::ArrayClose {
            self.leave();
            return Ok(Value::Array(Array::from(values)));
        }
        values.push(self.parse_value_at(symbol, span)?);

        loop {
            let (next, next_span) = self.scanner.next_symbol()?;
            match next {
                Symbol::ArrayClose => {
                    self.leave();
                    return Ok(Value::Array(Array::from(values)));
                }
                Symbol::Comma => values.push(self.parse_value()?),
                _ => return Err(Error::UnexpectedSymbol { span: next_span }),
            }
        }
    }

    /// Converts a scanned number span with standard float conversion.
    fn number_payload(&self, span: Span) -> Result<f64, Error> {
        let bytes = &self.input[span.begin..span.end];
        // The scanner only emits ASCII spans for numbers.
        let text = core::str::from_utf8(bytes).map_err(|_| Error::InvalidNumber { span })?;
        text.parse::<f64>()
            .map_err(|_| Error::InvalidNumber { span })
    }

    /// Unescapes the body of a scanned string literal (span covers both
    /// quotes).
    fn string_payload(&self, span: Span) -> Result<String, Error> {
        unescape(self.input, span)
    }
}

/// Re-interprets the scanned literal at `span` into its string payload.
fn unescape(input: &[u8], span: Span) -> Result<String, Error> {
    let begin = span.begin + 1;
    let end = span.end - 1;
    let mut out: Vec<u8> = Vec::with_capacity(end - begin);

    let mut i = begin;
    while i < end {
        let byte = input[i];
        if byte != b'\\' {
            out.push(byte);
            i += 1;
            continue;
        }
        if i + 1 >= end {
            // Unreachable for scanner-produced spans (an escaped closing
            // quote would not have terminated the literal), but cheap to
            // report instead of indexing past the body.
            return Err(Error::InvalidEscape {
                span: Span::new(i, end),
            });
        }
        let escape = Span::new(i, i + 2);
        let letter = input[i + 1];
        i += 2;
        match letter {
            b'"' => out.push(b'"'),
            b'\\' => out.push(b'\\'),
            b'/' => out.push(b'/'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'u' => i = unescape_unicode(input, escape.begin, i, end, &mut out)?,
            _ => return Err(Error::InvalidEscape { span: escape }),
        }
    }

    // SAFETY: the scanner validated every non-escape byte run as UTF-8, and
    // escapes only ever append ASCII bytes or `char::encode_utf8` output.
    Ok(unsafe { String::from_utf8_unchecked(out) })
}

/// Decodes a `\uXXXX` escape whose `\u` prefix starts at `escape_begin` and
/// whose hex digits start at `i`. Returns the offset past the consumed
/// escape(s).
fn unescape_unicode(
    input: &[u8],
    escape_begin: usize,
    i: usize,
    end: usize,
    out: &mut Vec<u8>,
) -> Result<usize, Error> {
    let first = hex4(input, escape_begin, i, end)?;
    let mut next = i + 4;

    let codepoint = match first {
        // High surrogate: must combine with an immediately following low
        // surrogate escape.
        0xD800..=0xDBFF => {
            let unpaired = Error::UnpairedSurrogateEscape {
                span: Span::new(escape_begin, next),
            };
            if next + 2 > end || input[next] != b'\\' || input[next + 1] != b'u' {
                return Err(unpaired);
            }
            let low = hex4(input, next, next + 2, end)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(unpaired);
            }
            next += 6;
            0x1_0000 + ((first - 0xD800) << 10) + (low - 0xDC00)
        }
        0xDC00..=0xDFFF => {
            return Err(Error::UnpairedSurrogateEscape {
                span: Span::new(escape_begin, next),
            });
        }
        _ => first,
    };

    let ch = char::from_u32(codepoint).ok_or(Error::InvalidEscape {
        span: Span::new(escape_begin, next),
    })?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    Ok(next)
}

/// Reads four hex digits at `i`, erroring with the span of the escape.
fn hex4(input: &[u8], escape_begin: usize, i: usize, end: usize) -> Result<u32, Error> {
    if i + 4 > end {
        return Err(Error::InvalidEscape {
            span: Span::new(escape_begin, end),
        });
    }
    let mut value = 0u32;
    for offset in 0..4 {
        let digit = char::from(input[i + offset])
            .to_digit(16)
            .ok_or(Error::InvalidEscape {
                span: Span::new(escape_begin, i + offset + 1),
            })?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
