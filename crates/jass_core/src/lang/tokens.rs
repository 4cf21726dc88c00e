//! Define the token-type catalog of the JASS lexical grammar.
//!
//! This module is the single source of truth for lexical categories: a stable identifier ([`TokenId`]) plus an
//! ordered const table ([`TOKENS`]) recording each category's name, regular-expression pattern, line-break flag,
//! display label and first-character hints.
//!
//! ## Notes
//! - **Order matters.** The lexer takes the longest match at each offset and breaks ties by catalog order, so
//!   keywords (listed first) win over the generic `identifier` pattern for the exact keyword text, while longer
//!   identifiers such as `notify` still lex as identifiers.
//! - Patterns are plain regular-expression sources; compiling them is the lexer's job.
//! - The `whitespace` and `comment` entries belong to the [`TokenGroup::Skipped`] group: they are fully consumed
//!   but do not reach the parser.
//!
//! ## Examples
//! ```rust
//! use jass_core::lang::tokens::{self, TokenGroup, TokenId};
//!
//! assert_eq!(tokens::from_name("stringliteral"), Some(TokenId::Stringliteral));
//! assert_eq!(tokens::info_for(TokenId::Comment).group, TokenGroup::Skipped);
//! assert_eq!(tokens::label(TokenId::Lessorequal), "<=");
//! ```

/// Stable identifier for every lexical category, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenId {
    // Trivia
    Whitespace,
    Comment,

    // Keywords
    And,
    Array,
    Call,
    Constant,
    Debug,
    Else,
    Elseif,
    Endfunction,
    Endglobals,
    Endif,
    Endloop,
    Exitwhen,
    Extends,
    Function,
    Globals,
    If,
    Local,
    Loop,
    Native,
    Not,
    Nothing,
    Or,
    Returns,
    Return,
    Set,
    Takes,
    Then,
    Type,

    // Operators / punctuation
    Comma,
    Equals,
    Assign,
    Notequals,
    Lessorequal,
    Less,
    Greatorequal,
    Great,
    Add,
    Sub,
    Mult,
    Div,
    Lparen,
    Rparen,
    Lsquareparen,
    Rsquareparen,

    // Literals / layout / names
    Real,
    Integer,
    Linebreak,
    Idliteral,
    Stringliteral,
    Identifier,
}

/// Lexer group a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenGroup {
    /// Emitted into the token stream handed to the parser.
    Default,
    /// Consumed (offsets stay correct) but filtered out of the parser's token stream.
    Skipped,
}

/// High-level grouping for tooling (CLI listings, highlighting defaults).
///
/// ## Notes
/// - Categories are metadata only; they do not affect matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Trivia,
    Keyword,
    Operator,
    Punctuation,
    Literal,
    Layout,
    Name,
}

/// Metadata for one lexical category.
///
/// ## Notes
/// - `pattern` is a regular-expression source matched anchored at the current offset.
/// - `line_breaks` marks categories whose image may contain a line terminator; the lexer only re-scans images of
///   such tokens to keep line/column tracking exact.
/// - `start_chars_hint` lists every character a match can begin with. An empty list means "unknown", so the
///   pattern is tried at every offset.
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    pub id: TokenId,
    pub name: &'static str,
    pub pattern: &'static str,
    pub line_breaks: bool,
    pub label: Option<&'static str>,
    pub start_chars_hint: &'static [char],
    pub group: TokenGroup,
    pub category: TokenCategory,
}

/// The ordered token-type catalog.
pub const TOKENS: &[TokenInfo] = &[
    TokenInfo {
        id: TokenId::Whitespace,
        name: "whitespace",
        pattern: r"[^\S\r\n]+",
        line_breaks: false,
        label: None,
        start_chars_hint: &[],
        group: TokenGroup::Skipped,
        category: TokenCategory::Trivia,
    },
    TokenInfo {
        id: TokenId::Comment,
        name: "comment",
        pattern: r"//[^\r\n]*",
        line_breaks: false,
        label: Some("\\\\"),
        start_chars_hint: &['/'],
        group: TokenGroup::Skipped,
        category: TokenCategory::Trivia,
    },
    keyword(TokenId::And, "and", &['a']),
    keyword(TokenId::Array, "array", &['a']),
    keyword(TokenId::Call, "call", &['c']),
    keyword(TokenId::Constant, "constant", &['c']),
    keyword(TokenId::Debug, "debug", &['d']),
    keyword(TokenId::Else, "else", &['e']),
    keyword(TokenId::Elseif, "elseif", &['e']),
    keyword(TokenId::Endfunction, "endfunction", &['e']),
    keyword(TokenId::Endglobals, "endglobals", &['e']),
    keyword(TokenId::Endif, "endif", &['e']),
    keyword(TokenId::Endloop, "endloop", &['e']),
    keyword(TokenId::Exitwhen, "exitwhen", &['e']),
    keyword(TokenId::Extends, "extends", &['e']),
    keyword(TokenId::Function, "function", &['f']),
    keyword(TokenId::Globals, "globals", &['g']),
    keyword(TokenId::If, "if", &['i']),
    keyword(TokenId::Local, "local", &['l']),
    keyword(TokenId::Loop, "loop", &['l']),
    keyword(TokenId::Native, "native", &['n']),
    keyword(TokenId::Not, "not", &['n']),
    keyword(TokenId::Nothing, "nothing", &['n']),
    keyword(TokenId::Or, "or", &['o']),
    keyword(TokenId::Returns, "returns", &['r']),
    keyword(TokenId::Return, "return", &['r']),
    keyword(TokenId::Set, "set", &['s']),
    keyword(TokenId::Takes, "takes", &['t']),
    keyword(TokenId::Then, "then", &['t']),
    keyword(TokenId::Type, "type", &['t']),
    punct(TokenId::Comma, "comma", ",", ",", TokenCategory::Punctuation),
    punct(TokenId::Equals, "equals", "==", "==", TokenCategory::Operator),
    punct(TokenId::Assign, "assign", "=", "=", TokenCategory::Operator),
    punct(TokenId::Notequals, "notequals", "!=", "!=", TokenCategory::Operator),
    punct(TokenId::Lessorequal, "lessorequal", "<=", "<=", TokenCategory::Operator),
    punct(TokenId::Less, "less", "<", "<", TokenCategory::Operator),
    punct(TokenId::Greatorequal, "greatorequal", ">=", ">=", TokenCategory::Operator),
    punct(TokenId::Great, "great", ">", ">", TokenCategory::Operator),
    punct(TokenId::Add, "add", r"\+", "+", TokenCategory::Operator),
    punct(TokenId::Sub, "sub", "-", "-", TokenCategory::Operator),
    punct(TokenId::Mult, "mult", r"\*", "*", TokenCategory::Operator),
    punct(TokenId::Div, "div", "/", "/", TokenCategory::Operator),
    punct(TokenId::Lparen, "lparen", r"\(", "(", TokenCategory::Punctuation),
    punct(TokenId::Rparen, "rparen", r"\)", ")", TokenCategory::Punctuation),
    punct(TokenId::Lsquareparen, "lsquareparen", r"\[", "[", TokenCategory::Punctuation),
    punct(TokenId::Rsquareparen, "rsquareparen", r"\]", "]", TokenCategory::Punctuation),
    TokenInfo {
        id: TokenId::Real,
        name: "real",
        pattern: r"[0-9]+\.[0-9]+",
        line_breaks: false,
        label: None,
        start_chars_hint: &[],
        group: TokenGroup::Default,
        category: TokenCategory::Literal,
    },
    TokenInfo {
        id: TokenId::Integer,
        name: "integer",
        pattern: r"[0-9]+",
        line_breaks: false,
        label: None,
        start_chars_hint: &[],
        group: TokenGroup::Default,
        category: TokenCategory::Literal,
    },
    TokenInfo {
        id: TokenId::Linebreak,
        name: "linebreak",
        pattern: r"\n|\r\n",
        line_breaks: true,
        label: Some("\\n"),
        start_chars_hint: &['\n', '\r'],
        group: TokenGroup::Default,
        category: TokenCategory::Layout,
    },
    TokenInfo {
        id: TokenId::Idliteral,
        name: "idliteral",
        pattern: r"'.*'",
        line_breaks: false,
        label: None,
        start_chars_hint: &['\''],
        group: TokenGroup::Default,
        category: TokenCategory::Literal,
    },
    TokenInfo {
        id: TokenId::Stringliteral,
        name: "stringliteral",
        // Greedy up to the last quote on the line; with no closing quote on the line the literal runs to the next
        // quote anywhere, which is how multiline literals arise. Quotes are never escaped.
        pattern: r#""(?:.*"|[^"]*")"#,
        line_breaks: true,
        label: None,
        start_chars_hint: &['"'],
        group: TokenGroup::Default,
        category: TokenCategory::Literal,
    },
    TokenInfo {
        id: TokenId::Identifier,
        name: "identifier",
        pattern: r"[a-zA-Z][a-zA-Z0-9_]*",
        line_breaks: false,
        label: None,
        start_chars_hint: &[],
        group: TokenGroup::Default,
        category: TokenCategory::Name,
    },
];

/// Catalog name (e.g. `"lsquareparen"`).
///
/// ## Parameters
/// - `id`: Token identifier.
///
/// ## Returns
/// - The catalog name for `id`.
pub fn as_str(id: TokenId) -> &'static str {
    info_for(id).name
}

/// Human-facing label: the explicit label when one exists, otherwise the catalog name.
///
/// Used in "expected ..." messages, where `"("` reads better than `"lparen"`.
pub fn label(id: TokenId) -> &'static str {
    let info = info_for(id);
    info.label.unwrap_or(info.name)
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: TokenId) -> &'static TokenInfo {
    TOKENS.iter().find(|t| t.id == id).expect("token info missing")
}

/// Lookup by catalog name.
pub fn from_name(name: &str) -> Option<TokenId> {
    TOKENS.iter().find(|t| t.name == name).map(|t| t.id)
}

/// Lookup a reserved word by its exact (case-sensitive) spelling.
pub fn keyword_from_str(s: &str) -> Option<TokenId> {
    TOKENS
        .iter()
        .find(|t| t.category == TokenCategory::Keyword && t.name == s)
        .map(|t| t.id)
}

/// Return `true` if `id` is a reserved word.
pub fn is_keyword(id: TokenId) -> bool {
    info_for(id).category == TokenCategory::Keyword
}

/// Return `true` if `id` never reaches the parser.
pub fn is_skipped(id: TokenId) -> bool {
    info_for(id).group == TokenGroup::Skipped
}

// --- helpers -----------------------------------------------------------------

const fn keyword(id: TokenId, spelling: &'static str, start_chars_hint: &'static [char]) -> TokenInfo {
    TokenInfo {
        id,
        name: spelling,
        pattern: spelling,
        line_breaks: false,
        label: None,
        start_chars_hint,
        group: TokenGroup::Default,
        category: TokenCategory::Keyword,
    }
}

const fn punct(
    id: TokenId,
    name: &'static str,
    pattern: &'static str,
    label: &'static str,
    category: TokenCategory,
) -> TokenInfo {
    TokenInfo {
        id,
        name,
        pattern,
        line_breaks: false,
        label: Some(label),
        start_chars_hint: single_char_hint(label),
        group: TokenGroup::Default,
        category,
    }
}

/// First-character hint for operator/punctuation spellings.
const fn single_char_hint(label: &'static str) -> &'static [char] {
    match label.as_bytes()[0] {
        b',' => &[','],
        b'=' => &['='],
        b'!' => &['!'],
        b'<' => &['<'],
        b'>' => &['>'],
        b'+' => &['+'],
        b'-' => &['-'],
        b'*' => &['*'],
        b'/' => &['/'],
        b'(' => &['('],
        b')' => &[')'],
        b'[' => &['['],
        b']' => &[']'],
        _ => &[],
    }
}
