//! Lexer for the JASS scripting language
//!
//! Handles tokenization driven entirely by the ordered catalog in `jass_core::lang::tokens`:
//! - Keywords, operators and punctuation (literal patterns)
//! - Identifiers and literals (integer, real, id-literal, string)
//! - Explicit `linebreak` tokens (`\n` and `\r\n`)
//! - Whitespace and `//` comments (skipped unless trivia is requested)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Token, Span, Position)
//!
//! ## Notes
//! - Matching is maximal munch: every candidate pattern is tried anchored at the current offset, the longest
//!   match wins and equal lengths go to the earliest catalog entry.
//! - The lexer never fails. Characters no pattern accepts are grouped into runs, each reported once as a
//!   [`LexError`], and scanning resumes right after the run.

pub mod tokens;

pub use tokens::{Position, Span, Token};

use crate::diagnostics::LexError;
use jass_core::lang::tokens::{TOKENS, TokenGroup, TokenInfo};
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// COMPILED CATALOG
// ============================================================================

/// One catalog entry with its pattern compiled and anchored at the start of the haystack.
struct Matcher {
    info: &'static TokenInfo,
    regex: Regex,
}

impl Matcher {
    fn compile(info: &'static TokenInfo) -> Self {
        let regex = Regex::new(&format!("^(?:{})", info.pattern))
            .unwrap_or_else(|err| panic!("token pattern for `{}` does not compile: {err}", info.name));
        Self { info, regex }
    }

    /// Return `true` if a match of this entry can start with `c`.
    fn accepts_first(&self, c: char) -> bool {
        self.info.start_chars_hint.is_empty() || self.info.start_chars_hint.contains(&c)
    }
}

/// Lazy-compiled matchers, in catalog order.
static MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| TOKENS.iter().map(Matcher::compile).collect());

/// Longest non-empty match at the start of `rest`; ties go to the earliest entry.
fn longest_match(rest: &str) -> Option<(&'static TokenInfo, usize)> {
    let first = rest.chars().next()?;
    let mut best: Option<(&'static TokenInfo, usize)> = None;
    for matcher in MATCHERS.iter().filter(|m| m.accepts_first(first)) {
        let Some(found) = matcher.regex.find(rest) else {
            continue;
        };
        let len = found.end();
        if len > 0 && best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((matcher.info, len));
        }
    }
    best
}

// ============================================================================
// LEXER STATE
// ============================================================================

/// Output of one lexing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// An unmatched run being accumulated: start offset, start position, length in characters.
struct PendingRun {
    start: usize,
    position: Position,
    length: usize,
}

/// Lexer for JASS source code.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    /// Position of the next unread character.
    position: Position,
    with_trivia: bool,
    pending: Option<PendingRun>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            position: Position::default(),
            with_trivia: false,
            pending: None,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Keep whitespace and comment tokens in the output stream.
    ///
    /// The parser ignores them either way; the analyzer uses retained comments for highlighting.
    pub fn with_trivia(mut self, with_trivia: bool) -> Self {
        self.with_trivia = with_trivia;
        self
    }

    /// Tokenize the entire source.
    pub fn tokenize(mut self) -> LexResult {
        let source = self.source;
        while self.pos < source.len() {
            let rest = &source[self.pos..];
            match longest_match(rest) {
                Some((info, len)) => {
                    self.flush_unmatched();
                    self.emit(info, len);
                }
                None => self.skip_unmatched(rest),
            }
        }
        self.flush_unmatched();

        LexResult {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    fn emit(&mut self, info: &'static TokenInfo, len: usize) {
        let source = self.source;
        let image = &source[self.pos..self.pos + len];
        let start = self.position;
        let end = self.advance_over(image, info.line_breaks);
        let span = Span::new(self.pos, self.pos + len);
        self.pos += len;

        if self.with_trivia || info.group == TokenGroup::Default {
            self.tokens.push(Token::new(info.id, image, span, start, end));
        }
    }

    fn skip_unmatched(&mut self, rest: &str) {
        let Some(c) = rest.chars().next() else {
            return;
        };
        let run = self.pending.get_or_insert(PendingRun {
            start: self.pos,
            position: self.position,
            length: 0,
        });
        run.length += 1;

        let mut buf = [0u8; 4];
        self.advance_over(c.encode_utf8(&mut buf), true);
        self.pos += c.len_utf8();
    }

    fn flush_unmatched(&mut self) {
        if let Some(run) = self.pending.take() {
            let span = Span::new(run.start, self.pos);
            self.errors.push(LexError::unexpected_character(span, run.position, run.length));
        }
    }

    /// Move the cursor position past `image` and return the position of its last character.
    ///
    /// Images of categories that cannot contain a line terminator are measured without re-scanning.
    fn advance_over(&mut self, image: &str, line_breaks: bool) -> Position {
        if !line_breaks {
            let n = image.chars().count();
            let last = Position::new(self.position.line, self.position.column + n.saturating_sub(1));
            self.position.column += n;
            return last;
        }

        let mut last = self.position;
        for c in image.chars() {
            last = self.position;
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        last
    }
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`: skipped groups are dropped.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> LexResult {
    let result = Lexer::new(source).tokenize();
    tracing::debug!(tokens = result.tokens.len(), errors = result.errors.len(), "lexed");
    result
}

// ============================================================================
// TESTS
// ============================================================================
