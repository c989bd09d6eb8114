//! Byte ranges into curriculum source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the source a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Converts a 1-based line and column, as reported by `serde_json`, into
    /// a single-byte span.
    ///
    /// Positions past the end of `source` are clamped to its length. Line 0
    /// (used by `serde_json` for errors without a position) maps to the
    /// start of the source.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gitlook_content::Span;
    /// let source = "{\n  \"modules\": ]\n}";
    /// let span = Span::from_line_column(source, 2, 14);
    /// assert_eq!(&source[span.start()..span.end()], "]");
    /// ```
    pub fn from_line_column(source: &str, line: usize, column: usize) -> Self {
        if line == 0 {
            return Self::new(0..0);
        }

        let line_start = source
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum::<usize>();
        let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let end = source[offset..]
            .chars()
            .next()
            .map_or(offset, |c| offset + c.len_utf8());

        Self::new(offset..end)
    }

    /// Finds the first quoted occurrence of `value` at or after byte `from`.
    ///
    /// The span covers the string literal including its quotes.
    pub fn find_string(source: &str, value: &str, from: usize) -> Option<Self> {
        let needle = format!("\"{value}\"");
        let from = from.min(source.len());
        source
            .get(from..)?
            .find(&needle)
            .map(|pos| Self::new(from + pos..from + pos + needle.len()))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
