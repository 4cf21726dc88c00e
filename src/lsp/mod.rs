//! JASS Language Server Protocol (LSP) implementation
//!
//! Provides IDE features:
//! - Real-time diagnostics (lexical, syntax and semantic)
//! - Semantic tokens for highlighting
//! - Document symbols (functions, globals blocks, types)
//! - Folding ranges

pub mod backend;
pub mod diagnostics;
pub mod features;

pub use backend::JassLanguageServer;
