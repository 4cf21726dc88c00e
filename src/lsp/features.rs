//! Convert analysis results to LSP semantic tokens, symbols and folding ranges

use tower_lsp::lsp_types::{
    FoldingRange, FoldingRangeKind, Location, SemanticToken, SemanticTokenType, SemanticTokensLegend,
    SymbolInformation, SymbolKind, Url,
};

use jass_core::lang::legend;

use super::diagnostics::LineIndex;
use crate::analysis::{self, Classification, FoldingKind};

/// The semantic token legend announced in the server capabilities.
pub fn semantic_legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: legend::names().map(SemanticTokenType::new).collect(),
        token_modifiers: Vec::new(),
    }
}

/// Delta-encode classifications, which must already be sorted by position.
///
/// Columns and lengths are converted to UTF-16 units through `lines`. Events that would run backwards
/// (overlapping a previous one on the same line) are dropped.
pub fn semantic_tokens(classifications: &[Classification], lines: &LineIndex<'_>) -> Vec<SemanticToken> {
    let mut out = Vec::with_capacity(classifications.len());
    let (mut prev_line, mut prev_start) = (0usize, 0u32);

    for c in classifications {
        let start = lines.column(c.line, c.column);
        if !out.is_empty() && (c.line < prev_line || (c.line == prev_line && start < prev_start)) {
            continue;
        }
        let delta_line = c.line - prev_line;
        let delta_start = if delta_line == 0 { start - prev_start } else { start };
        out.push(SemanticToken {
            delta_line: delta_line as u32,
            delta_start,
            length: lines.length(c.line, c.column, c.length),
            token_type: legend::index(c.category),
            token_modifiers_bitset: 0,
        });
        prev_line = c.line;
        prev_start = start;
    }
    out
}

fn to_symbol_kind(kind: analysis::SymbolKind) -> SymbolKind {
    match kind {
        analysis::SymbolKind::Function => SymbolKind::FUNCTION,
        analysis::SymbolKind::Globals => SymbolKind::STRUCT,
        analysis::SymbolKind::Type => SymbolKind::CLASS,
    }
}

/// Flat symbol list for `textDocument/documentSymbol`.
#[allow(deprecated)]
pub fn symbols(symbols: &[analysis::Symbol], uri: &Url, lines: &LineIndex<'_>) -> Vec<SymbolInformation> {
    symbols
        .iter()
        .map(|s| SymbolInformation {
            name: s.name.clone(),
            kind: to_symbol_kind(s.kind),
            tags: None,
            deprecated: None,
            location: Location {
                uri: uri.clone(),
                range: lines.range(s.range),
            },
            container_name: s.detail.clone(),
        })
        .collect()
}

pub fn folding_ranges(ranges: &[analysis::FoldingRange]) -> Vec<FoldingRange> {
    ranges
        .iter()
        .map(|r| FoldingRange {
            start_line: r.start_line as u32,
            end_line: r.end_line as u32,
            kind: Some(match r.kind {
                FoldingKind::Region => FoldingRangeKind::Region,
            }),
            ..Default::default()
        })
        .collect()
}
