//! Source positions reported by lexers and attached to diagnostics.
//!
//! A [`Position`] is the pair of 1-based counters a character-at-a-time
//! lexer maintains while it reads: the current line and the number of the
//! current character on that line.
//!
//! # Examples
//!
//! ```rust
//! # use slr::Position;
//! let start = Position::new(1, 1);
//! let later = Position::new(2, 4);
//! assert!(start < later);
//! assert_eq!(later.to_string(), "2:4");
//! ```

use std::fmt;

/// A 1-based line/column position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
