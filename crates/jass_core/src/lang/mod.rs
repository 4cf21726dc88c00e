//! JASS language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: the token-type catalog, the highlight legend and
//! the diagnostic messages.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer, parser and analyzer. Callers work
//! with **stable IDs** (`TokenId`, `Category`, `MessageId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no CST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   highlighting, the CLI `legend` command).
//!
//! ## Examples
//! ```rust
//! use jass_core::lang::tokens::{self, TokenId};
//!
//! assert_eq!(tokens::keyword_from_str("endfunction"), Some(TokenId::Endfunction));
//! assert_eq!(tokens::as_str(TokenId::Lparen), "lparen");
//! ```

pub mod legend;
pub mod messages;
pub mod tokens;
