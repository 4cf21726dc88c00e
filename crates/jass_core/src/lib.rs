//! Provide the canonical language vocabulary shared by the JASS lexer, parser, analyzer and language server.
//!
//! This crate is intentionally small and dependency-free. It contains the closed enumerations that every consumer
//! must agree on:
//! - the ordered token-type catalog the lexer is built from,
//! - the semantic highlighting legend editor themes key off,
//! - the diagnostic message catalog.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no syntax-tree types.
//! - Orderings inside the registries are part of the contract (lexer priority, legend indices).

pub mod lang;
