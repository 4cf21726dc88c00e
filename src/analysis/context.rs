//! The accumulator threaded through every rule handler.

use std::collections::HashMap;

use jass_core::lang::legend::Category;
use jass_core::lang::messages::{self, MessageId};
use jass_syntax::lexer::Token;

use super::{Analysis, Classification, Diagnostic, FoldingKind, FoldingRange, Range, Severity, Symbol, SymbolKind};

/// Output buffers for one analysis run.
#[derive(Debug, Default)]
pub struct Context {
    classifications: Vec<Classification>,
    diagnostics: Vec<Diagnostic>,
    symbols: Vec<Symbol>,
    folding_ranges: Vec<FoldingRange>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `token` if it is present and real. Returns the token back only in that case.
    pub fn mark<'t>(&mut self, token: Option<&'t Token>, category: Category) -> Option<&'t Token> {
        let token = token.filter(|t| t.is_real())?;
        self.classifications.push(Classification {
            line: token.start.line.saturating_sub(1),
            column: token.start.column.saturating_sub(1),
            length: token.char_len(),
            category,
        });
        Some(token)
    }

    pub fn mark_all<'t>(&mut self, tokens: impl IntoIterator<Item = &'t Token>, category: Category) {
        for token in tokens {
            self.mark(Some(token), category);
        }
    }

    /// Record a diagnostic anchored on `token`. Placeholders are ignored.
    pub fn report(
        &mut self,
        id: MessageId,
        severity: Severity,
        token: &Token,
        args: &[(&str, &str)],
        related: Vec<Range>,
    ) {
        if !token.is_real() {
            return;
        }
        let message = messages::render(id, args);
        let diagnostic = match severity {
            Severity::Error => Diagnostic::error(id, Range::of(token), message),
            Severity::Warning => Diagnostic::warning(id, Range::of(token), message),
        };
        self.diagnostics.push(diagnostic.with_related(related));
    }

    /// Record a symbol together with the folding region for the same block.
    pub fn add_block(&mut self, name: &str, kind: SymbolKind, open: &Token, close: &Token) {
        let range = Range::between(open, close);
        self.folding_ranges.push(FoldingRange {
            start_line: range.start.line,
            end_line: range.end.line,
            kind: FoldingKind::Region,
        });
        self.add_symbol(name, kind, None, range);
    }

    pub fn add_symbol(&mut self, name: &str, kind: SymbolKind, detail: Option<String>, range: Range) {
        self.symbols.push(Symbol {
            name: name.to_string(),
            kind,
            detail,
            range,
        });
    }

    /// Consume the buffers. Classifications come out in source order.
    pub fn finish(mut self) -> Analysis {
        self.classifications.sort_by_key(|c| (c.line, c.column));
        Analysis {
            classifications: self.classifications,
            diagnostics: self.diagnostics,
            symbols: self.symbols,
            folding_ranges: self.folding_ranges,
        }
    }
}

/// Tokens grouped by image, groups kept in first-appearance order.
#[derive(Debug, Default)]
pub(super) struct NameGroups<'a> {
    groups: Vec<Vec<&'a Token>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> NameGroups<'a> {
    pub(super) fn push(&mut self, token: &'a Token) {
        match self.index.get(token.image.as_str()) {
            Some(&i) => self.groups[i].push(token),
            None => {
                self.index.insert(token.image.as_str(), self.groups.len());
                self.groups.push(vec![token]);
            }
        }
    }

    pub(super) fn get(&self, name: &str) -> &[&'a Token] {
        self.index.get(name).map_or(&[], |&i| self.groups[i].as_slice())
    }

    /// Groups with two or more occurrences.
    pub(super) fn duplicates(&self) -> impl Iterator<Item = &[&'a Token]> {
        self.groups.iter().map(Vec::as_slice).filter(|tokens| tokens.len() > 1)
    }
}

/// Ranges of every token in `tokens`.
pub(super) fn ranges(tokens: &[&Token]) -> Vec<Range> {
    tokens.iter().map(|t| Range::of(t)).collect()
}
