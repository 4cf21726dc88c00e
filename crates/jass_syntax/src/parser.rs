//! Parser for the JASS scripting language
//!
//! Converts a token stream into a concrete syntax tree. The parser is recursive descent with one method per
//! grammar rule, and it never gives up: on a mismatch it records a [`SyntaxError`], then deletes a stray token,
//! inserts a placeholder or skips the rest of the line, and keeps building the tree.
//!
//! ## Examples
//!
//! ```rust
//! use jass_syntax::{lexer, parser};
//!
//! let source = "function Foo takes nothing returns nothing\nendfunction\n";
//! let tokens = lexer::lex(source).tokens;
//! let parsed = parser::parse(&tokens);
//! assert!(parsed.errors.is_empty());
//! assert_eq!(parsed.root.child_nodes().count(), 1);
//! ```

use crate::cst::{CstNode, Key, Label, Rule};
use crate::diagnostics::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{Position, Token};
use crate::token_helpers::describe_expected;
use jass_core::lang::messages::{self, MessageId};
use jass_core::lang::tokens::TokenId;
use std::collections::HashSet;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
