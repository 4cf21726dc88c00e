//! Shared syntax frontend for the JASS language: lexer, concrete syntax tree, parser, syntax diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI, the analyzer and the language server.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not classify tokens for highlighting and does not run
//!   semantic checks. Those live in the analyzer of the `jass` crate.
//! - Vocabulary identity (token kinds, their order and patterns) comes from `jass_core::lang` registries.
//! - Neither the lexer nor the parser fails: both always return a best-effort result plus a list of errors.
//!
//! ## Examples
//! ```rust
//! use jass_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("type unit extends handle\n");
//! let parsed = parser::parse(&lexed.tokens);
//! assert!(parsed.errors.is_empty());
//! assert_eq!(parsed.root.child_nodes().count(), 1);
//! ```
//!
//! ## See also
//! - `jass_core::lang` for the token catalog and highlighting legend.

pub mod cst;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
