//! Convert analysis diagnostics to LSP diagnostics

use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, NumberOrString, Position, Range, Url,
};

use jass_core::lang::messages;

use crate::analysis::{self, Point, Severity};

/// Maps character columns to LSP columns, which count UTF-16 code units.
///
/// Built from the exact text an analysis ran on. Positions past the end of a line (end-of-input placeholders)
/// count one unit per missing character.
#[derive(Debug)]
pub struct LineIndex<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.split('\n').collect(),
        }
    }

    /// UTF-16 column of the character at `column` on `line`.
    pub fn column(&self, line: usize, column: usize) -> u32 {
        let text = self.lines.get(line).copied().unwrap_or("");
        let mut units = 0usize;
        let mut chars = 0usize;
        for c in text.chars().take(column) {
            units += c.len_utf16();
            chars += 1;
        }
        (units + (column - chars)) as u32
    }

    /// UTF-16 length of `length` characters starting at `line:column`.
    pub fn length(&self, line: usize, column: usize, length: usize) -> u32 {
        self.column(line, column + length) - self.column(line, column)
    }

    pub fn position(&self, point: Point) -> Position {
        Position::new(point.line as u32, self.column(point.line, point.column))
    }

    pub fn range(&self, range: analysis::Range) -> Range {
        Range::new(self.position(range.start), self.position(range.end))
    }
}

fn to_severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    }
}

/// Convert a pipeline diagnostic to an LSP diagnostic.
///
/// Ranges are converted to UTF-16 columns through `lines`. The message key becomes the diagnostic code; every
/// related range other than the primary one is attached as related information.
pub fn to_lsp_diagnostic(diagnostic: &analysis::Diagnostic, uri: &Url, lines: &LineIndex<'_>) -> Diagnostic {
    let related_information: Vec<_> = diagnostic
        .related
        .iter()
        .filter(|r| **r != diagnostic.range)
        .map(|r| DiagnosticRelatedInformation {
            location: Location {
                uri: uri.clone(),
                range: lines.range(*r),
            },
            message: "also declared here".to_string(),
        })
        .collect();

    Diagnostic {
        range: lines.range(diagnostic.range),
        severity: Some(to_severity(diagnostic.severity)),
        code: Some(NumberOrString::String(messages::key(diagnostic.kind).to_string())),
        code_description: None,
        source: Some("jass".to_string()),
        message: diagnostic.message.clone(),
        related_information: if related_information.is_empty() {
            None
        } else {
            Some(related_information)
        },
        tags: None,
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jass_core::lang::messages::MessageId;

    fn uri() -> Url {
        Url::parse("file:///tmp/war3map.j").unwrap()
    }

    #[test]
    fn test_ascii_range_is_unchanged() {
        let lines = LineIndex::new("globals\n integer x\nendglobals\n");
        let range = analysis::Range::new(Point::new(1, 1), Point::new(1, 8));
        let lsp = lines.range(range);
        assert_eq!(lsp.start, Position::new(1, 1));
        assert_eq!(lsp.end, Position::new(1, 8));
    }

    #[test]
    fn test_columns_count_utf16_units() {
        let lines = LineIndex::new("globals\n string s = \"\u{1F600}\" + x\nendglobals");
        // The emoji is one character but two UTF-16 units
        assert_eq!(lines.column(1, 12), 12);
        assert_eq!(lines.length(1, 12, 3), 4);
        assert_eq!(lines.column(1, 16), 17);
        assert_eq!(lines.position(Point::new(1, 18)), Position::new(1, 19));
    }

    #[test]
    fn test_columns_past_the_end_of_a_line() {
        let lines = LineIndex::new("type a extends b");
        assert_eq!(lines.column(0, 18), 18);
        assert_eq!(lines.column(3, 2), 2);
    }

    #[test]
    fn test_error_conversion() {
        let lines = LineIndex::new("globals\n local integer x\nendglobals");
        let range = analysis::Range::new(Point::new(1, 1), Point::new(1, 6));
        let diagnostic = analysis::Diagnostic::error(MessageId::LocalInGlobals, range, "no locals here");
        let lsp = to_lsp_diagnostic(&diagnostic, &uri(), &lines);

        assert_eq!(lsp.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(lsp.source.as_deref(), Some("jass"));
        assert_eq!(lsp.code, Some(NumberOrString::String("localInGlobalsError".to_string())));
        assert_eq!(lsp.message, "no locals here");
        assert!(lsp.related_information.is_none());
    }

    #[test]
    fn test_related_information_skips_primary_range() {
        let lines = LineIndex::new("function F takes integer a, integer a returns nothing");
        let first = analysis::Range::new(Point::new(0, 25), Point::new(0, 26));
        let second = analysis::Range::new(Point::new(0, 36), Point::new(0, 37));
        let diagnostic = analysis::Diagnostic::warning(MessageId::DuplicateArgument, second, "dup")
            .with_related(vec![first, second]);
        let lsp = to_lsp_diagnostic(&diagnostic, &uri(), &lines);

        assert_eq!(lsp.severity, Some(DiagnosticSeverity::WARNING));
        let related = lsp.related_information.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].location.range, lines.range(first));
    }

    #[test]
    fn test_diagnostic_after_wide_character_is_shifted() {
        let source = "globals\n string s = \"\u{1F600}\"\n local integer x // \u{1F600} \nendglobals";
        let lines = LineIndex::new(source);
        let range = analysis::Range::new(Point::new(2, 1), Point::new(2, 6));
        let diagnostic = analysis::Diagnostic::error(MessageId::LocalInGlobals, range, "no locals here");
        let lsp = to_lsp_diagnostic(&diagnostic, &uri(), &lines);
        // Wide characters on other lines do not move this range
        assert_eq!(lsp.range, Range::new(Position::new(2, 1), Position::new(2, 6)));
    }
}
