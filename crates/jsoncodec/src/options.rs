/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use jsoncodec::{parse_with, ParseOptions};
///
/// let options = ParseOptions { max_depth: 4 };
/// assert!(parse_with(b"[[[[null]]]]", options).is_ok());
/// assert!(parse_with(b"[[[[[null]]]]]", options).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Maximum object/array nesting depth.
    ///
    /// The grammar itself imposes no limit, but parsing recurses once per
    /// nesting level, so adversarial input could otherwise exhaust the
    /// stack. Crossing the limit reports
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) with
    /// the span of the offending opening bracket.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}
