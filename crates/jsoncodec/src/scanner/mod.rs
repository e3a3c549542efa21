//! Symbol scanner: turns classified primitives into composite symbols.
//!
//! The scanner skips whitespace runs, then decodes one symbol per call:
//! structural punctuation, a string literal, a number literal, one of the
//! `true`/`false`/`null` keywords, or end of input. Every symbol carries the
//! half-open byte [`Span`] it occupies.
//!
//! String bodies are validated as UTF-8 while scanning: bare continuation
//! bytes, truncated sequences, overlong encodings, surrogate-range
//! codepoints and codepoints beyond U+10FFFF each raise a distinct error
//! kind with a span pinned to the offending byte(s). Escape *syntax*
//! (a backslash and the byte after it) passes through unvalidated; deciding
//! whether an escape is meaningful is the parser's job.

use crate::error::{Error, Span};
use crate::primitive::{Primitive, PrimitiveCursor, Scanned};

/// A composite lexical symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string literal; the span covers both quotes.
    String,
    /// A number literal.
    Number,
    /// The keyword `true`.
    True,
    /// The keyword `false`.
    False,
    /// The keyword `null`.
    Null,
    /// End of input.
    End,
}

/// Scanner over a byte slice, yielding one symbol per [`Scanner::next_symbol`]
/// call.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    cursor: PrimitiveCursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: PrimitiveCursor::new(input),
        }
    }

    /// Scans the next symbol, skipping any leading whitespace.
    pub(crate) fn next_symbol(&mut self) -> Result<(Symbol, Span), Error> {
        while self.cursor.peek().primitive == Primitive::Whitespace {
            self.cursor.next();
        }

        let first = self.cursor.next();
        let single = |symbol| Ok((symbol, Span::new(first.position, first.position + 1)));
        match first.primitive {
            Primitive::End => Ok((Symbol::End, Span::at(first.position))),
            Primitive::ObjectOpen => single(Symbol::ObjectOpen),
            Primitive::ObjectClose => single(Symbol::ObjectClose),
            Primitive::ArrayOpen => single(Symbol::ArrayOpen),
            Primitive::ArrayClose => single(Symbol::ArrayClose),
            Primitive::Colon => single(Symbol::Colon),
            Primitive::Comma => single(Symbol::Comma),
            Primitive::Quote => self.scan_string(first.position),
            Primitive::Digit | Primitive::Minus => self.scan_number(first),
            Primitive::Letter | Primitive::Exponent => self.scan_keyword(first),
            _ => Err(Error::UnexpectedByte {
                span: Span::new(first.position, first.position + 1),
            }),
        }
    }

    /// Scans a string body after its opening quote at `open`.
    ///
    /// The returned span covers the whole literal including both quotes.
    fn scan_string(&mut self, open: usize) -> Result<(Symbol, Span), Error> {
        loop {
            let scanned = self.cursor.next();
            match scanned.primitive {
                Primitive::End => {
                    return Err(Error::UnterminatedString {
                        span: Span::at(scanned.position),
                    });
                }
                Primitive::Quote => {
                    return Ok((Symbol::String, Span::new(open, scanned.position + 1)));
                }
                Primitive::Backslash => self.scan_escaped_byte()?,
                Primitive::Control => {
                    return Err(Error::ControlByteInString {
                        span: Span::at(scanned.position),
                    });
                }
                Primitive::Continuation => {
                    return Err(Error::BareContinuationByte {
                        span: Span::new(scanned.position, scanned.position + 1),
                    });
                }
                Primitive::Lead2 | Primitive::Lead3 | Primitive::Lead4 => {
                    self.check_sequence(scanned)?;
                }
                Primitive::Invalid => {
                    return Err(Error::CodepointOutOfRange {
                        span: Span::new(scanned.position, scanned.position + 1),
                    });
                }
                // Regular string content, whitespace included.
                _ => {}
            }
        }
    }

    /// Consumes the single byte following a backslash.
    ///
    /// Any byte is accepted here as long as it is structurally sound: a quote
    /// after a backslash must not terminate the literal, but control bytes
    /// and broken UTF-8 are still rejected with their usual error kinds.
    fn scan_escaped_byte(&mut self) -> Result<(), Error> {
        let scanned = self.cursor.next();
        match scanned.primitive {
            Primitive::End => Err(Error::UnterminatedString {
                span: Span::at(scanned.position),
            }),
            Primitive::Control => Err(Error::ControlByteInString {
                span: Span::at(scanned.position),
            }),
            Primitive::Continuation => Err(Error::BareContinuationByte {
                span: Span::new(scanned.position, scanned.position + 1),
            }),
            Primitive::Lead2 | Primitive::Lead3 | Primitive::Lead4 => self.check_sequence(scanned),
            Primitive::Invalid => Err(Error::CodepointOutOfRange {
                span: Span::new(scanned.position, scanned.position + 1),
            }),
            _ => Ok(()),
        }
    }

    /// Validates the continuation bytes of a multi-byte sequence whose lead
    /// byte has already been consumed, then checks the decoded codepoint for
    /// overlong, surrogate and out-of-range violations.
    fn check_sequence(&mut self, lead: Scanned) -> Result<(), Error> {
        let (length, mut codepoint) = match lead.primitive {
            Primitive::Lead2 => (2u8, u32::from(lead.byte & 0x1F)),
            Primitive::Lead3 => (3, u32::from(lead.byte & 0x0F)),
            Primitive::Lead4 => (4, u32::from(lead.byte & 0x07)),
            _ => unreachable!("check_sequence called on a non-lead primitive"),
        };

        for _ in 1..length {
            let scanned = self.cursor.next();
            if scanned.primitive != Primitive::Continuation {
                // Report the position that should have held a continuation
                // byte; empty span when the input ended there.
                let span = if scanned.primitive == Primitive::End {
                    Span::at(scanned.position)
                } else {
                    Span::new(scanned.position, scanned.position + 1)
                };
                return Err(Error::TruncatedSequence {
                    expected: length,
                    span,
                });
            }
            codepoint = (codepoint << 6) | u32::from(scanned.byte & 0x3F);
        }

        let span = Span::new(lead.position, lead.position + usize::from(length));
        let minimum = match length {
            2 => 0x80,
            3 => 0x800,
            _ => 0x1_0000,
        };
        if codepoint < minimum {
            return Err(Error::OverlongEncoding { span });
        }
        if length == 3 && (0xD800..=0xDFFF).contains(&codepoint) {
            return Err(Error::SurrogateCodepoint { span });
        }
        if codepoint > 0x10_FFFF {
            return Err(Error::CodepointOutOfRange { span });
        }
        Ok(())
    }

    /// Scans a number literal whose first byte (`-` or a digit) is `first`.
    ///
    /// Grammar: `-? digit+ ( "." digit+ )? ( ("e"|"E") ("+"|"-")? digit+ )?`.
    fn scan_number(&mut self, first: Scanned) -> Result<(Symbol, Span), Error> {
        let begin = first.position;

        if first.primitive == Primitive::Minus {
            self.require_digit(begin)?;
        }
        self.skip_digits();

        if self.cursor.peek().primitive == Primitive::Dot {
            self.cursor.next();
            self.require_digit(begin)?;
            self.skip_digits();
        }

        if self.cursor.peek().primitive == Primitive::Exponent {
            self.cursor.next();
            let sign = self.cursor.peek();
            if matches!(sign.primitive, Primitive::Plus | Primitive::Minus) {
                self.cursor.next();
            }
            self.require_digit(begin)?;
            self.skip_digits();
        }

        Ok((Symbol::Number, Span::new(begin, self.cursor.offset())))
    }

    /// Consumes one mandatory digit, erroring over the whole literal so far.
    fn require_digit(&mut self, begin: usize) -> Result<(), Error> {
        let scanned = self.cursor.peek();
        if scanned.primitive == Primitive::Digit {
            self.cursor.next();
            Ok(())
        } else {
            Err(Error::InvalidNumber {
                span: Span::new(begin, scanned.position),
            })
        }
    }

    fn skip_digits(&mut self) {
        while self.cursor.peek().primitive == Primitive::Digit {
            self.cursor.next();
        }
    }

    /// Scans one of the `true`/`false`/`null` keywords starting at `first`.
    fn scan_keyword(&mut self, first: Scanned) -> Result<(Symbol, Span), Error> {
        let (rest, symbol): (&[u8], Symbol) = match first.byte {
            b't' => (b"rue", Symbol::True),
            b'f' => (b"alse", Symbol::False),
            b'n' => (b"ull", Symbol::Null),
            _ => {
                return Err(Error::UnexpectedByte {
                    span: Span::new(first.position, first.position + 1),
                });
            }
        };
        for &expected in rest {
            let scanned = self.cursor.peek();
            if scanned.primitive == Primitive::End || scanned.byte != expected {
                let span = if scanned.primitive == Primitive::End {
                    Span::at(scanned.position)
                } else {
                    Span::new(scanned.position, scanned.position + 1)
                };
                return Err(Error::UnexpectedByte { span });
            }
            self.cursor.next();
        }
        Ok((symbol, Span::new(first.position, self.cursor.offset())))
    }
}
