#![forbid(unsafe_code)]
//! JASS tooling: analysis, pipeline, CLI and language server.
//!
//! The syntax frontend (lexer, CST, parser) lives in `jass_syntax`; the shared vocabulary (token catalog, highlight
//! legend, messages) lives in `jass_core`. This crate adds the single-pass analyzer and the surfaces built on it.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug in a static table (a token pattern that fails to compile, a
//!   missing registry entry), use `.expect("...")` with a clear explanation.
//!
//! The lex → parse → analyze pipeline itself never fails: every run ends with a tree and a list of diagnostics.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lsp;
pub mod pipeline;

pub use analysis::{Analysis, Analyzer, analyze};
pub use config::Config;
pub use error::{Error, Result};
pub use jass_syntax::{cst, lexer, parser};
pub use pipeline::{DocumentAnalysis, analyze_source};
