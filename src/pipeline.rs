//! The lex → parse → analyze pipeline for one document.
//!
//! Each run owns its token list, tree and result buffers. Nothing is shared between runs, so independent
//! documents can be processed concurrently by the caller.

use jass_syntax::cst::CstNode;
use jass_syntax::diagnostics::{LexError, SyntaxError};
use jass_syntax::lexer::{Lexer, Token};
use jass_syntax::parser;

use jass_core::lang::messages::MessageId;

use crate::analysis::{Analysis, Analyzer, Diagnostic, Point, Range};
use crate::config::Config;

/// Everything produced for one version of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAnalysis {
    /// The full token stream, trivia included.
    pub tokens: Vec<Token>,
    pub root: CstNode,
    pub lex_errors: Vec<LexError>,
    pub syntax_errors: Vec<SyntaxError>,
    pub analysis: Analysis,
    pub config: Config,
}

impl DocumentAnalysis {
    /// Lex, syntax and semantic diagnostics merged and sorted by position.
    ///
    /// Channels switched off in the configuration are left out.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        if self.config.report_lex_errors {
            out.extend(self.lex_errors.iter().map(lex_diagnostic));
        }
        if self.config.report_syntax_errors {
            out.extend(self.syntax_errors.iter().map(syntax_diagnostic));
        }
        out.extend(self.analysis.diagnostics.iter().cloned());
        out.sort_by_key(|d| d.range.start);
        out
    }

    /// Return `true` if any merged diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics().iter().any(Diagnostic::is_error)
    }
}

fn lex_diagnostic(error: &LexError) -> Diagnostic {
    let start = Point::new(error.line.saturating_sub(1), error.column.saturating_sub(1));
    let end = Point::new(start.line, start.column + error.length);
    Diagnostic::error(MessageId::UnexpectedCharacter, Range::new(start, end), error.message.clone())
}

fn syntax_diagnostic(error: &SyntaxError) -> Diagnostic {
    Diagnostic::error(error.kind.message_id(), Range::of(&error.token), error.message.clone())
}

/// Run the whole pipeline over `source`.
#[tracing::instrument(skip_all, fields(len = source.len()))]
pub fn analyze_source(source: &str, config: &Config) -> DocumentAnalysis {
    let lexed = Lexer::new(source).with_trivia(true).tokenize();
    let parsed = parser::parse_with_config(&lexed.tokens, config.parser);
    let analysis = Analyzer::new(config).analyze_with_trivia(&parsed.root, &lexed.tokens);

    tracing::debug!(
        tokens = lexed.tokens.len(),
        lex_errors = lexed.errors.len(),
        syntax_errors = parsed.errors.len(),
        semantic = analysis.diagnostics.len(),
        "pipeline finished"
    );

    DocumentAnalysis {
        tokens: lexed.tokens,
        root: parsed.root,
        lex_errors: lexed.errors,
        syntax_errors: parsed.errors,
        analysis,
        config: *config,
    }
}
