//! Byte-level primitive classification.
//!
//! [`classify`] is a pure, total function mapping each of the 256 byte values
//! to one lexical primitive. The scanner drives all of its branching off
//! these classes, including UTF-8 structural validation: multi-byte lead
//! bytes declare how many [`Primitive::Continuation`] bytes must follow.

/// The lexical class of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Primitive {
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
    /// `0`–`9`
    Digit,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `.`
    Dot,
    /// `e` or `E`
    Exponent,
    /// `"`
    Quote,
    /// `\`
    Backslash,
    /// `/`
    Slash,
    /// Any other ASCII letter (`true`/`false`/`null` and escape letters).
    Letter,
    /// Space, tab, line feed, carriage return.
    Whitespace,
    /// Any other byte below 0x20.
    Control,
    /// Any remaining 7-bit byte (printable punctuation, DEL).
    Ascii,
    /// Lead byte of a 2-byte UTF-8 sequence (0xC0–0xDF).
    Lead2,
    /// Lead byte of a 3-byte UTF-8 sequence (0xE0–0xEF).
    Lead3,
    /// Lead byte of a 4-byte UTF-8 sequence (0xF0–0xF7).
    Lead4,
    /// UTF-8 continuation byte (0x80–0xBF).
    Continuation,
    /// 0xF8–0xFF, never valid anywhere in UTF-8.
    Invalid,
    /// Past the end of input.
    End,
}

/// Classifies one byte. Total over all 256 values.
pub(crate) fn classify(byte: u8) -> Primitive {
    match byte {
        b'{' => Primitive::ObjectOpen,
        b'}' => Primitive::ObjectClose,
        b'[' => Primitive::ArrayOpen,
        b']' => Primitive::ArrayClose,
        b':' => Primitive::Colon,
        b',' => Primitive::Comma,
        b'0'..=b'9' => Primitive::Digit,
        b'-' => Primitive::Minus,
        b'+' => Primitive::Plus,
        b'.' => Primitive::Dot,
        b'e' | b'E' => Primitive::Exponent,
        b'"' => Primitive::Quote,
        b'\\' => Primitive::Backslash,
        b'/' => Primitive::Slash,
        b' ' | b'\t' | b'\n' | b'\r' => Primitive::Whitespace,
        0x00..=0x1F => Primitive::Control,
        b'A'..=b'Z' | b'a'..=b'z' => Primitive::Letter,
        0x20..=0x7F => Primitive::Ascii,
        0x80..=0xBF => Primitive::Continuation,
        0xC0..=0xDF => Primitive::Lead2,
        0xE0..=0xEF => Primitive::Lead3,
        0xF0..=0xF7 => Primitive::Lead4,
        0xF8..=0xFF => Primitive::Invalid,
    }
}

/// One classified byte together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scanned {
    pub primitive: Primitive,
    /// The raw byte value; 0 for [`Primitive::End`].
    pub byte: u8,
    /// Byte offset of the classified byte. For [`Primitive::End`] this is the
    /// input length, i.e. the position at which a byte was expected.
    pub position: usize,
}

/// A cursor over the input bytes yielding classified primitives.
///
/// `peek` inspects the next primitive without advancing; `next` consumes it.
/// Past the end of input both yield [`Primitive::End`] indefinitely.
#[derive(Debug)]
pub(crate) struct PrimitiveCursor<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> PrimitiveCursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Current byte offset into the input.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    fn scan(&self) -> Scanned {
        match self.input.get(self.offset) {
            Some(&byte) => Scanned {
                primitive: classify(byte),
                byte,
                position: self.offset,
            },
            None => Scanned {
                primitive: Primitive::End,
                byte: 0,
                position: self.input.len(),
            },
        }
    }

    /// Classifies the next byte without consuming it.
    pub(crate) fn peek(&self) -> Scanned {
        self.scan()
    }

    /// Classifies and consumes the next byte.
    pub(crate) fn next(&mut self) -> Scanned {
        let scanned = self.scan();
        if scanned.primitive != Primitive::End {
            self.offset += 1;
        }
        scanned
    }
}
