/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its configuration and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Deepest combined statement and expression nesting accepted before the parser reports an error instead of
/// recursing.
const MAX_NESTING: usize = 100;

/// Parser behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Recover from mismatches and keep parsing. When off, parsing stops at the first syntax error.
    pub recovery_enabled: bool,
    /// Stop parsing once this many syntax errors have been recorded.
    pub max_errors: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            recovery_enabled: true,
            max_errors: 100,
        }
    }
}

impl ParserConfig {
    pub fn with_recovery(mut self, enabled: bool) -> Self {
        self.recovery_enabled = enabled;
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Output of one parse: always a tree, plus whatever went wrong building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub root: CstNode,
    pub errors: Vec<SyntaxError>,
}

/// Parser state.
///
/// ## Notes
/// - Trivia tokens (whitespace, comments) are dropped on construction; line breaks are kept because the grammar
///   uses them as separators.
/// - At most one error is recorded per offending token offset, so a single bad token never cascades into a pile
///   of reports.
pub struct Parser<'a> {
    tokens: Vec<&'a Token>,
    pos: usize,
    config: ParserConfig,
    errors: Vec<SyntaxError>,
    reported: HashSet<usize>,
    /// Set when recovery is off and an error occurred, or when `max_errors` is reached.
    halted: bool,
    depth: usize,
    /// Offset and position right after the last token, used for errors at end of input.
    eof_offset: usize,
    eof_position: Position,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `jass_syntax::lexer`, with or without trivia.
    pub fn new(tokens: &'a [Token]) -> Self {
        let tokens: Vec<&Token> = tokens.iter().filter(|t| !t.is_trivia()).collect();
        let (eof_offset, eof_position) = match tokens.last() {
            Some(last) if last.is(TokenId::Linebreak) => (last.span.end, Position::new(last.end.line + 1, 1)),
            Some(last) => (last.span.end, Position::new(last.end.line, last.end.column + 1)),
            None => (0, Position::default()),
        };
        Self {
            tokens,
            pos: 0,
            config: ParserConfig::default(),
            errors: Vec::new(),
            reported: HashSet::new(),
            halted: false,
            depth: 0,
            eof_offset,
            eof_position,
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse the entire token stream into a `jass` root node.
    ///
    /// Never fails: the root is always returned, possibly holding placeholders, alongside every recorded error.
    pub fn parse(mut self) -> ParseResult {
        let root = self.jass();
        ParseResult {
            root,
            errors: self.errors,
        }
    }
}
