//! Single-pass analysis over the JASS CST.
//!
//! One traversal produces four outputs at once:
//! - classification events for semantic highlighting,
//! - semantic diagnostics (array misuse, duplicate names, misplaced `local`/`constant`, ...),
//! - document symbols (functions, globals blocks, types),
//! - folding ranges.
//!
//! Every rule has exactly one handler. Handlers take an explicit [`Context`] accumulator and return a small
//! rule-specific summary to their parent; siblings never see each other's summaries. [`visit`] is the tag-based
//! dispatcher used wherever a parent does not need the child's summary.
//!
//! ## Notes
//! - Recovery placeholders are never classified and never anchor a diagnostic, symbol or folding range.
//! - Positions in the output are 0-based (line, column in characters), as editors expect.
//! - Analysis never fails. A broken CST simply yields fewer results.
//!
//! ## Examples
//! ```rust
//! use jass::analysis;
//! use jass_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("type unit extends handle\n");
//! let parsed = parser::parse(&lexed.tokens);
//! let analysis = analysis::analyze(&parsed.root);
//!
//! assert_eq!(analysis.symbols[0].name, "unit");
//! assert!(analysis.diagnostics.is_empty());
//! ```

mod context;
mod decl;
mod expr;
mod stmts;

use std::fmt;

use jass_core::lang::legend::{self, Category};
use jass_core::lang::messages::MessageId;
use jass_core::lang::tokens::TokenId;
use jass_syntax::cst::{CstNode, Rule};
use jass_syntax::lexer::{Position, Token};

use crate::config::Config;
pub use context::Context;

/// Identifies what a diagnostic is about. Shared with lex and syntax errors so consumers can filter uniformly.
pub type DiagnosticKind = MessageId;

// ============================================================================
// OUTPUT RECORDS
// ============================================================================

/// A 0-based line/column pair. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

impl Point {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Convert a 1-based lexer position.
    pub fn from_position(position: Position) -> Self {
        Self {
            line: position.line.saturating_sub(1),
            column: position.column.saturating_sub(1),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Half-open range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Range {
    pub start: Point,
    pub end: Point,
}

impl Range {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The range covered by `token`. A zero-width token gives an empty range at its start.
    pub fn of(token: &Token) -> Self {
        let start = Point::from_position(token.start);
        if token.image.is_empty() {
            return Self { start, end: start };
        }
        // `token.end` is the inclusive last character, so its 1-based column is the exclusive 0-based end.
        let end = Point::new(token.end.line.saturating_sub(1), token.end.column);
        Self { start, end }
    }

    /// From the start of `first` to the end of `last`.
    pub fn between(first: &Token, last: &Token) -> Self {
        Self {
            start: Self::of(first).start,
            end: Self::of(last).end,
        }
    }
}

/// One highlighting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub line: usize,
    pub column: usize,
    /// Length in characters.
    pub length: usize,
    pub category: Category,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} len={} {}",
            self.line + 1,
            self.column + 1,
            self.length,
            legend::as_str(self.category)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A lexical, syntax or semantic finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub range: Range,
    pub message: String,
    /// Other locations involved, e.g. every occurrence of a duplicated name.
    pub related: Vec<Range>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, range: Range, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub fn warning(kind: DiagnosticKind, range: Range, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(kind, range, message)
        }
    }

    pub fn with_related(mut self, related: Vec<Range>) -> Self {
        self.related = related;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.range.start, self.severity, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Globals,
    Type,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Globals => "globals",
            SymbolKind::Type => "type",
        }
    }
}

/// A document outline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Extra information shown next to the name (the base type of a `type` declaration).
    pub detail: Option<String>,
    pub range: Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldingKind {
    Region,
}

/// A collapsible line region, both ends inclusive and 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldingRange {
    pub start_line: usize,
    pub end_line: usize,
    pub kind: FoldingKind,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Sorted by position.
    pub classifications: Vec<Classification>,
    /// In emission order.
    pub diagnostics: Vec<Diagnostic>,
    pub symbols: Vec<Symbol>,
    pub folding_ranges: Vec<FoldingRange>,
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Runs the visitor with a given configuration.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    highlight_comments: bool,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            highlight_comments: true,
        }
    }
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        Self {
            highlight_comments: config.highlight_comments,
        }
    }

    /// Analyze a CST.
    pub fn analyze(&self, root: &CstNode) -> Analysis {
        self.analyze_with_trivia(root, &[])
    }

    /// Analyze a CST and classify the comment tokens found in `tokens`.
    ///
    /// Comments never reach the CST, so highlighting them needs the lexer's trivia-preserving stream.
    #[tracing::instrument(skip_all, fields(rule = root.rule.as_str(), trivia = tokens.len()))]
    pub fn analyze_with_trivia(&self, root: &CstNode, tokens: &[Token]) -> Analysis {
        let mut cx = Context::new();
        visit(&mut cx, root);
        if self.highlight_comments {
            cx.mark_all(tokens.iter().filter(|t| t.is(TokenId::Comment)), Category::Comment);
        }
        let analysis = cx.finish();
        tracing::debug!(
            classifications = analysis.classifications.len(),
            diagnostics = analysis.diagnostics.len(),
            symbols = analysis.symbols.len(),
            "analyzed"
        );
        analysis
    }
}

/// Analyze a CST with the default configuration.
pub fn analyze(root: &CstNode) -> Analysis {
    Analyzer::default().analyze(root)
}

/// Dispatch `node` to the handler for its rule, discarding the handler's summary.
pub fn visit(cx: &mut Context, node: &CstNode) {
    match node.rule {
        Rule::Jass => decl::jass(cx, node),
        Rule::JassConstant => decl::jass_constant(cx, node),
        Rule::TypeDeclare => {
            decl::type_declare(cx, node);
        }
        Rule::NativeDeclare => decl::native_declare(cx, node),
        Rule::FunctionDeclare => decl::function_declare(cx, node),
        Rule::FunctionHead => {
            decl::function_head(cx, node, decl::Flavor::User);
        }
        Rule::GlobalsDeclare => decl::globals_declare(cx, node),
        Rule::VariableDeclare => {
            decl::variable_declare(cx, node);
        }
        Rule::Typedname => {
            decl::typedname(cx, node);
        }
        Rule::Statement => stmts::statement(cx, node),
        Rule::SetStatement => stmts::set_statement(cx, node),
        Rule::CallStatement => stmts::call_statement(cx, node),
        Rule::LoopStatement => stmts::loop_statement(cx, node),
        Rule::ExitwhenStatement => stmts::exitwhen_statement(cx, node),
        Rule::ReturnStatement => stmts::return_statement(cx, node),
        Rule::IfStatement => stmts::if_statement(cx, node),
        Rule::ElseifStatement => stmts::elseif_statement(cx, node),
        Rule::ElseStatement => stmts::else_statement(cx, node),
        Rule::Expression => expr::expression(cx, node),
        Rule::Addition => expr::addition(cx, node),
        Rule::Multiplication => expr::multiplication(cx, node),
        Rule::Primary => expr::primary(cx, node),
        Rule::FunctionCall => expr::function_call(cx, node),
        Rule::Arrayaccess => expr::arrayaccess(cx, node),
    }
}

/// Visit every child node stored under `rule`.
fn visit_all(cx: &mut Context, node: &CstNode, rule: Rule) {
    for child in node.nodes(rule) {
        visit(cx, child);
    }
}

#[cfg(test)]
mod tests;
