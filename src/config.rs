//! Pipeline configuration.

use jass_syntax::parser::ParserConfig;

/// Settings for one lex → parse → analyze run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Parser recovery settings
    pub parser: ParserConfig,
    /// Emit classification events for comments
    pub highlight_comments: bool,
    /// Include lexical errors in the merged diagnostics
    pub report_lex_errors: bool,
    /// Include syntax errors in the merged diagnostics
    pub report_syntax_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            highlight_comments: true,
            report_lex_errors: true,
            report_syntax_errors: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parser error recovery
    pub fn with_recovery(mut self, enabled: bool) -> Self {
        self.parser = self.parser.with_recovery(enabled);
        self
    }

    /// Cap the number of syntax errors recorded per run
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.parser = self.parser.with_max_errors(max_errors);
        self
    }

    pub fn with_highlight_comments(mut self, enabled: bool) -> Self {
        self.highlight_comments = enabled;
        self
    }

    pub fn with_lex_errors(mut self, enabled: bool) -> Self {
        self.report_lex_errors = enabled;
        self
    }

    pub fn with_syntax_errors(mut self, enabled: bool) -> Self {
        self.report_syntax_errors = enabled;
        self
    }
}
