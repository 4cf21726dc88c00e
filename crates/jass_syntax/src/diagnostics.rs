//! Lexical and syntax error records.
//!
//! Both error types are plain data: the lexer and parser accumulate them in lists and keep going. They implement
//! `std::error::Error` (via `thiserror`) so callers can render them uniformly.

use crate::lexer::{Position, Span, Token};
use jass_core::lang::messages::{self, MessageId};
use thiserror::Error;

/// An unmatched run of characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {line}:{column}")]
pub struct LexError {
    pub message: String,
    pub span: Span,
    /// 1-based line of the first unmatched character.
    pub line: usize,
    /// 1-based column (in characters) of the first unmatched character.
    pub column: usize,
    /// Length of the run in characters.
    pub length: usize,
}

impl LexError {
    pub fn unexpected_character(span: Span, start: Position, length: usize) -> Self {
        Self {
            message: messages::render(MessageId::UnexpectedCharacter, &[]),
            span,
            line: start.line,
            column: start.column,
            length,
        }
    }
}

/// Which recovery situation produced a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// A specific token was expected and something else was found.
    MismatchToken,
    /// None of a rule's alternatives can start at the current token.
    NoViableAlt,
    /// Tokens remain that no top-level declaration can consume.
    NotAllInputParsed,
    /// A repetition that needs at least one item found none.
    EarlyExit,
}

impl SyntaxErrorKind {
    pub fn message_id(self) -> MessageId {
        match self {
            SyntaxErrorKind::MismatchToken => MessageId::MismatchToken,
            SyntaxErrorKind::NoViableAlt => MessageId::NoViableAlt,
            SyntaxErrorKind::NotAllInputParsed => MessageId::NotAllInputParsed,
            SyntaxErrorKind::EarlyExit => MessageId::EarlyExit,
        }
    }
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(messages::key(self.message_id()))
    }
}

/// A grammar mismatch, recorded against the offending token.
///
/// ## Notes
/// - At end of input the offending token is a zero-width placeholder positioned after the last real token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub token: Token,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, message: String, token: Token) -> Self {
        Self { kind, message, token }
    }

    pub fn span(&self) -> Span {
        self.token.span
    }
}
