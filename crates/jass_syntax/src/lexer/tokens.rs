//! Token types for the JASS lexer.
//!
//! The lexer uses **registry-backed IDs** for token kinds: every token carries a [`TokenId`] from
//! `jass_core::lang::tokens`, so the parser and analyzer never compare spellings.
//!
//! ## Notes
//! - Tokens are immutable once produced. The only tokens created outside the lexer are recovery placeholders,
//!   built through [`Token::placeholder`].
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use jass_core::lang::tokens::TokenId;

// ============================================================================
// SPANS AND TOKENS
// ============================================================================

/// Byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// A token with its kind, raw image and source location.
///
/// ## Notes
/// - `end` is the position of the token's *last* character (inclusive), so a one-character token starts and ends
///   on the same column.
/// - `inserted_in_recovery` marks zero-width placeholders synthesized by the parser. Consumers must check it
///   before trusting the image or position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenId,
    pub image: String,
    pub span: Span,
    pub start: Position,
    pub end: Position,
    pub inserted_in_recovery: bool,
}

impl Token {
    /// Construct a new lexed token.
    pub fn new(kind: TokenId, image: impl Into<String>, span: Span, start: Position, end: Position) -> Self {
        Self {
            kind,
            image: image.into(),
            span,
            start,
            end,
            inserted_in_recovery: false,
        }
    }

    /// Build a recovery placeholder of `kind` positioned right before `at`.
    ///
    /// The placeholder has an empty image, a zero-width span at `at`'s start offset and copies `at`'s start
    /// position.
    pub fn placeholder(kind: TokenId, at: &Token) -> Self {
        Self::placeholder_at(kind, at.span.start, at.start)
    }

    /// Build a recovery placeholder at an explicit offset/position (used at end of input).
    pub fn placeholder_at(kind: TokenId, offset: usize, position: Position) -> Self {
        Self {
            kind,
            image: String::new(),
            span: Span::new(offset, offset),
            start: position,
            end: position,
            inserted_in_recovery: true,
        }
    }

    /// Number of characters in the image.
    pub fn char_len(&self) -> usize {
        self.image.chars().count()
    }

    /// Return `true` if the token's first and last characters sit on different lines.
    pub fn spans_lines(&self) -> bool {
        self.start.line != self.end.line
    }
}
