use std::fmt;

/// A half-open range of UTF-16 code-unit offsets into the source text.
///
/// Characters outside the Basic Multilingual Plane count as two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan {
    /// Offset of the first code unit.
    pub start:  usize,
    /// Number of code units covered.
    pub length: usize,
}

impl TextSpan {
    /// Creates a span from a start offset and a length.
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Creates a span covering `start..end`.
    ///
    /// An `end` before `start` yields an empty span at `start`.
    ///
    /// # Example
    /// ```
    /// use minicalc::text::TextSpan;
    ///
    /// let span = TextSpan::from_bounds(2, 5);
    /// assert_eq!(span, TextSpan::new(2, 3));
    /// assert_eq!(span.end(), 5);
    /// ```
    #[must_use]
    pub const fn from_bounds(start: usize, end: usize) -> Self {
        Self { start,
               length: end.saturating_sub(start) }
    }

    /// Offset one past the last covered code unit.
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.length
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}
