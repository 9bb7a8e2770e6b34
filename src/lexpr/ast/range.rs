//! Position and location tracking for source code locations
//!
//! This module defines the data structures for representing positions and locations in the
//! Lexpr source, as well as utilities for converting byte offsets to line/column positions.
//!
//! ## Types
//!
//! - [`Position`] - A 1-based line:column position in source code
//! - [`Range`] - A source code range with start/end positions and byte span
//! - [`SourceLocation`] - Utility for converting byte offsets to positions
//!
//! ## Key Design
//!
//! - **1-based**: lines and columns both start at 1, which is what error messages report
//! - **Columns count chars**: a multi-byte UTF-8 character advances the column by one
//! - **Byte ranges preserved**: Stores both byte spans and line:column positions
//! - **Efficient conversion**: O(log n) binary search for the line lookup
//!
//! ## Usage
//!
//! 1. The logos lexer produces `(RawToken, std::ops::Range<usize>)` pairs (byte offsets)
//! 2. Base tokenization converts byte ranges to `Range` using [`SourceLocation::byte_range_to_range`]
//! 3. Tokens and AST atoms store these `Range` values for error reporting

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// A 1-based line and column in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Represents a location in source code (start and end positions)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Smallest range covering both `self` and `other`.
    pub fn join(&self, other: &Range) -> Range {
        let (span_start, start) = if other.start < self.start {
            (other.span.start, other.start)
        } else {
            (self.span.start, self.start)
        };
        let (span_end, end) = if other.end > self.end {
            (other.span.end, other.end)
        } else {
            (self.span.end, self.end)
        };
        Range::new(span_start..span_end, start, end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(0..0, Position::default(), Position::default())
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a 1-based line/column position
    ///
    /// Offsets past the end clamp to the position just after the last character.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line + 1, column + 1)
    }

    pub fn byte_range_to_range(&self, range: &ByteRange<usize>) -> Range {
        Range::new(
            range.clone(),
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_comparison() {
        let pos1 = Position::new(1, 5);
        let pos2 = Position::new(1, 5);
        let pos3 = Position::new(2, 3);

        assert_eq!(pos1, pos2);
        assert_ne!(pos1, pos3);
        assert!(pos1 < pos3);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn test_range_join() {
        let left = Range::new(0..3, Position::new(1, 1), Position::new(1, 4));
        let right = Range::new(8..11, Position::new(1, 9), Position::new(1, 12));

        let joined = left.join(&right);
        assert_eq!(joined.span, 0..11);
        assert_eq!(joined.start, Position::new(1, 1));
        assert_eq!(joined.end, Position::new(1, 12));
        assert_eq!(right.join(&left), joined);
    }

    #[test]
    fn test_byte_to_position_is_one_based() {
        let loc = SourceLocation::new("ab\ncd");

        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(1), Position::new(1, 2));
        assert_eq!(loc.byte_to_position(3), Position::new(2, 1));
        assert_eq!(loc.byte_to_position(4), Position::new(2, 2));
    }

    #[test]
    fn test_columns_count_characters() {
        // "é" is two bytes
        let loc = SourceLocation::new("é x");
        assert_eq!(loc.byte_to_position(3), Position::new(1, 3));
    }
}
