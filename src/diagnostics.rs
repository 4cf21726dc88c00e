//! Terminal rendering of diagnostics with miette.
//!
//! Analysis diagnostics carry line/column ranges. miette wants byte spans, so each report converts its range
//! against the source text it is rendered with.

// Fields read only by the derive macros.
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};

use crate::analysis::{self, Point, Severity};

/// One diagnostic ready for `miette` to print.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(jass::check))]
pub struct Report {
    pub severity: Severity,
    pub message: String,
    #[source_code]
    pub src: miette::NamedSource<String>,
    #[label("{label}")]
    pub span: SourceSpan,
    /// Other occurrences involved in the finding.
    #[label(collection, "also here")]
    pub related: Vec<SourceSpan>,
    pub label: String,
}

impl Report {
    pub fn from_diagnostic(diagnostic: &analysis::Diagnostic, source_path: &str, source: &str) -> Self {
        let label = match diagnostic.severity {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
        };
        let to_span = |range: &analysis::Range| -> SourceSpan {
            let start = byte_offset(source, range.start);
            let end = byte_offset(source, range.end).max(start);
            (start, end - start).into()
        };

        Self {
            severity: diagnostic.severity,
            message: diagnostic.message.clone(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: to_span(&diagnostic.range),
            related: diagnostic
                .related
                .iter()
                .filter(|r| **r != diagnostic.range)
                .map(to_span)
                .collect(),
            label: label.to_string(),
        }
    }
}

/// Byte offset of a 0-based line/character point, clamped to the end of the source.
pub fn byte_offset(source: &str, point: Point) -> usize {
    let mut line_start = 0;
    for _ in 0..point.line {
        match source[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return source.len(),
        }
    }
    source[line_start..]
        .char_indices()
        .nth(point.column)
        .map_or(source.len(), |(i, _)| line_start + i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Range;
    use jass_core::lang::messages::MessageId;

    #[test]
    fn test_byte_offset() {
        let source = "ab\nçd\n";
        assert_eq!(byte_offset(source, Point::new(0, 1)), 1);
        assert_eq!(byte_offset(source, Point::new(1, 0)), 3);
        assert_eq!(byte_offset(source, Point::new(1, 1)), 5);
        assert_eq!(byte_offset(source, Point::new(9, 0)), source.len());
    }

    #[test]
    fn test_report_from_diagnostic() {
        let source = "globals\n local integer x\nendglobals\n";
        let range = Range::new(Point::new(1, 1), Point::new(1, 6));
        let diagnostic = analysis::Diagnostic::error(MessageId::LocalInGlobals, range, "boom");
        let report = Report::from_diagnostic(&diagnostic, "war3map.j", source);

        assert_eq!(report.severity, Severity::Error);
        assert_eq!(report.message, "boom");
        assert_eq!(report.span.offset(), 9);
        assert_eq!(report.span.len(), 5);
        assert_eq!(report.label, "error here");
        assert!(report.related.is_empty());
    }

    #[test]
    fn test_related_excludes_primary_range() {
        let source = "function F takes integer a, integer a returns nothing\n";
        let first = Range::new(Point::new(0, 25), Point::new(0, 26));
        let second = Range::new(Point::new(0, 36), Point::new(0, 37));
        let diagnostic = analysis::Diagnostic::warning(MessageId::DuplicateArgument, second, "dup")
            .with_related(vec![first, second]);
        let report = Report::from_diagnostic(&diagnostic, "a.j", source);

        assert_eq!(report.label, "warning here");
        assert_eq!(report.related.len(), 1);
        assert_eq!(report.related[0].offset(), 25);
    }
}
