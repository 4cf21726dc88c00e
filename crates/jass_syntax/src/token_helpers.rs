//! Small helper APIs for working with `Token` / `TokenId`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites, and to keep the
//! "is this a recovery placeholder?" check in one obvious place.

use crate::lexer::Token;
use jass_core::lang::tokens::{self, TokenId};

impl Token {
    /// Return `true` if this token is of kind `kind`.
    pub fn is(&self, kind: TokenId) -> bool {
        self.kind == kind
    }

    /// Return `true` if this token came from the source text (not a recovery placeholder).
    pub fn is_real(&self) -> bool {
        !self.inserted_in_recovery
    }

    /// Return `true` if this is a reserved word.
    pub fn is_keyword(&self) -> bool {
        tokens::is_keyword(self.kind)
    }

    /// Return `true` if this token belongs to a skipped group (whitespace, comment).
    pub fn is_trivia(&self) -> bool {
        tokens::is_skipped(self.kind)
    }

    /// Human-facing description used in "found ..." messages.
    pub fn describe(&self) -> String {
        match self.kind {
            _ if self.inserted_in_recovery => "end of input".to_string(),
            TokenId::Linebreak => "line break".to_string(),
            _ => format!("'{}'", self.image),
        }
    }
}

/// Human-facing description of an expected token kind (`'endif'`, `'('`, `identifier`).
pub fn describe_expected(kind: TokenId) -> String {
    match kind {
        TokenId::Identifier
        | TokenId::Integer
        | TokenId::Real
        | TokenId::Idliteral
        | TokenId::Stringliteral => tokens::as_str(kind).to_string(),
        TokenId::Linebreak => "line break".to_string(),
        _ => format!("'{}'", tokens::label(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Position, Span};

    #[test]
    fn test_describe() {
        let token = Token::new(TokenId::Then, "then", Span::new(0, 4), Position::new(1, 1), Position::new(1, 4));
        assert_eq!(token.describe(), "'then'");
        assert!(token.is_keyword());
        assert!(token.is_real());
        let eof = Token::placeholder_at(TokenId::Endif, 4, Position::new(1, 5));
        assert_eq!(eof.describe(), "end of input");
        assert!(!eof.is_real());
    }

    #[test]
    fn test_describe_expected() {
        assert_eq!(describe_expected(TokenId::Endfunction), "'endfunction'");
        assert_eq!(describe_expected(TokenId::Lparen), "'('");
        assert_eq!(describe_expected(TokenId::Identifier), "identifier");
        assert_eq!(describe_expected(TokenId::Linebreak), "line break");
    }
}
