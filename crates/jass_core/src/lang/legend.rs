//! Semantic highlighting legend.
//!
//! The legend is the closed vocabulary of classification categories the analyzer emits. Editor themes key off the
//! category *names*, and the language server transmits categories as *indices* into [`LEGEND`], so both the names
//! and the order are part of the external contract.
//!
//! ## Examples
//! ```rust
//! use jass_core::lang::legend::{self, Category};
//!
//! assert_eq!(legend::as_str(Category::FunctionUser), "jass_function_user");
//! assert_eq!(legend::index(Category::Comment), 0);
//! ```

use super::tokens::TokenId;

/// A classification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Comment,
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
    Real,
    Integer,
    Idliteral,
    Stringliteral,
    // Identifier roles
    Variable,
    FunctionUser,
    FunctionNative,
    TypeName,
    Argument,
}

/// Legend entry.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
}

/// The ordered legend. A category's position is its wire index.
pub const LEGEND: &[CategoryInfo] = &[
    entry(Category::Comment, "jass_comment"),
    entry(Category::And, "jass_and"),
    entry(Category::Array, "jass_array"),
    entry(Category::Call, "jass_call"),
    entry(Category::Constant, "jass_constant"),
    entry(Category::Debug, "jass_debug"),
    entry(Category::Else, "jass_else"),
    entry(Category::Elseif, "jass_elseif"),
    entry(Category::Endfunction, "jass_endfunction"),
    entry(Category::Endglobals, "jass_endglobals"),
    entry(Category::Endif, "jass_endif"),
    entry(Category::Endloop, "jass_endloop"),
    entry(Category::Exitwhen, "jass_exitwhen"),
    entry(Category::Extends, "jass_extends"),
    entry(Category::Function, "jass_function"),
    entry(Category::Globals, "jass_globals"),
    entry(Category::If, "jass_if"),
    entry(Category::Local, "jass_local"),
    entry(Category::Loop, "jass_loop"),
    entry(Category::Native, "jass_native"),
    entry(Category::Not, "jass_not"),
    entry(Category::Nothing, "jass_nothing"),
    entry(Category::Or, "jass_or"),
    entry(Category::Returns, "jass_returns"),
    entry(Category::Return, "jass_return"),
    entry(Category::Set, "jass_set"),
    entry(Category::Takes, "jass_takes"),
    entry(Category::Then, "jass_then"),
    entry(Category::Type, "jass_type"),
    entry(Category::Comma, "jass_comma"),
    entry(Category::Equals, "jass_equals"),
    entry(Category::Assign, "jass_assign"),
    entry(Category::Notequals, "jass_notequals"),
    entry(Category::Lessorequal, "jass_lessorequal"),
    entry(Category::Less, "jass_less"),
    entry(Category::Greatorequal, "jass_greatorequal"),
    entry(Category::Great, "jass_great"),
    entry(Category::Add, "jass_add"),
    entry(Category::Sub, "jass_sub"),
    entry(Category::Mult, "jass_mult"),
    entry(Category::Div, "jass_div"),
    entry(Category::Lparen, "jass_lparen"),
    entry(Category::Rparen, "jass_rparen"),
    entry(Category::Lsquareparen, "jass_lsquareparen"),
    entry(Category::Rsquareparen, "jass_rsquareparen"),
    entry(Category::Real, "jass_real"),
    entry(Category::Integer, "jass_integer"),
    entry(Category::Idliteral, "jass_idliteral"),
    entry(Category::Stringliteral, "jass_stringliteral"),
    entry(Category::Variable, "jass_variable"),
    entry(Category::FunctionUser, "jass_function_user"),
    entry(Category::FunctionNative, "jass_function_native"),
    entry(Category::TypeName, "jass_type_name"),
    entry(Category::Argument, "jass_argument"),
];

/// Category name as exposed to editor themes.
pub fn as_str(category: Category) -> &'static str {
    LEGEND[index(category) as usize].name
}

/// Wire index of `category` inside [`LEGEND`].
pub fn index(category: Category) -> u32 {
    category as u32
}

/// Lookup by name.
pub fn from_str(name: &str) -> Option<Category> {
    LEGEND.iter().find(|c| c.name == name).map(|c| c.id)
}

/// All category names in wire order.
pub fn names() -> impl Iterator<Item = &'static str> {
    LEGEND.iter().map(|c| c.name)
}

/// The category a token gets when it is highlighted "as itself".
///
/// Identifiers, line breaks and whitespace have no intrinsic category: an identifier's category depends on the
/// role the analyzer gives it.
pub fn for_token(id: TokenId) -> Option<Category> {
    let category = match id {
        TokenId::Comment => Category::Comment,
        TokenId::And => Category::And,
        TokenId::Array => Category::Array,
        TokenId::Call => Category::Call,
        TokenId::Constant => Category::Constant,
        TokenId::Debug => Category::Debug,
        TokenId::Else => Category::Else,
        TokenId::Elseif => Category::Elseif,
        TokenId::Endfunction => Category::Endfunction,
        TokenId::Endglobals => Category::Endglobals,
        TokenId::Endif => Category::Endif,
        TokenId::Endloop => Category::Endloop,
        TokenId::Exitwhen => Category::Exitwhen,
        TokenId::Extends => Category::Extends,
        TokenId::Function => Category::Function,
        TokenId::Globals => Category::Globals,
        TokenId::If => Category::If,
        TokenId::Local => Category::Local,
        TokenId::Loop => Category::Loop,
        TokenId::Native => Category::Native,
        TokenId::Not => Category::Not,
        TokenId::Nothing => Category::Nothing,
        TokenId::Or => Category::Or,
        TokenId::Returns => Category::Returns,
        TokenId::Return => Category::Return,
        TokenId::Set => Category::Set,
        TokenId::Takes => Category::Takes,
        TokenId::Then => Category::Then,
        TokenId::Type => Category::Type,
        TokenId::Comma => Category::Comma,
        TokenId::Equals => Category::Equals,
        TokenId::Assign => Category::Assign,
        TokenId::Notequals => Category::Notequals,
        TokenId::Lessorequal => Category::Lessorequal,
        TokenId::Less => Category::Less,
        TokenId::Greatorequal => Category::Greatorequal,
        TokenId::Great => Category::Great,
        TokenId::Add => Category::Add,
        TokenId::Sub => Category::Sub,
        TokenId::Mult => Category::Mult,
        TokenId::Div => Category::Div,
        TokenId::Lparen => Category::Lparen,
        TokenId::Rparen => Category::Rparen,
        TokenId::Lsquareparen => Category::Lsquareparen,
        TokenId::Rsquareparen => Category::Rsquareparen,
        TokenId::Real => Category::Real,
        TokenId::Integer => Category::Integer,
        TokenId::Idliteral => Category::Idliteral,
        TokenId::Stringliteral => Category::Stringliteral,
        TokenId::Whitespace | TokenId::Linebreak | TokenId::Identifier => return None,
    };
    Some(category)
}

const fn entry(id: Category, name: &'static str) -> CategoryInfo {
    CategoryInfo { id, name }
}
