//! Concrete syntax tree for JASS.
//!
//! Every grammar-rule invocation produces one [`CstNode`]. A node stores, per [`Key`], the ordered list of tokens
//! and/or child nodes matched under that key: a token kind, a label the rule assigned (e.g. the function name is
//! stored under [`Label::IdentifierName`]), or a sub-rule.
//!
//! ## Notes
//! - Absent keys and present-but-empty keys are the same observable state: accessors return an empty slice or
//!   `None`, never an error.
//! - Nodes own their children exclusively and hold no parent links; traversal is strictly top-down.
//! - Recovery placeholders live in the tree like any other token. Check `Token::inserted_in_recovery`.

use crate::lexer::{Span, Token};
use jass_core::lang::tokens::{self, TokenId};
use std::fmt::Write as _;

/// Grammar rules, one variant per production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Jass,
    JassConstant,
    TypeDeclare,
    NativeDeclare,
    FunctionDeclare,
    FunctionHead,
    GlobalsDeclare,
    VariableDeclare,
    Typedname,
    Statement,
    CallStatement,
    SetStatement,
    LoopStatement,
    ExitwhenStatement,
    ReturnStatement,
    IfStatement,
    ElseifStatement,
    ElseStatement,
    Expression,
    Addition,
    Multiplication,
    Primary,
    FunctionCall,
    Arrayaccess,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Jass => "jass",
            Rule::JassConstant => "jass_constant",
            Rule::TypeDeclare => "type_declare",
            Rule::NativeDeclare => "native_declare",
            Rule::FunctionDeclare => "function_declare",
            Rule::FunctionHead => "function_head",
            Rule::GlobalsDeclare => "globals_declare",
            Rule::VariableDeclare => "variable_declare",
            Rule::Typedname => "typedname",
            Rule::Statement => "statement",
            Rule::CallStatement => "call_statement",
            Rule::SetStatement => "set_statement",
            Rule::LoopStatement => "loop_statement",
            Rule::ExitwhenStatement => "exitwhen_statement",
            Rule::ReturnStatement => "return_statement",
            Rule::IfStatement => "if_statement",
            Rule::ElseifStatement => "elseif_statement",
            Rule::ElseStatement => "else_statement",
            Rule::Expression => "expression",
            Rule::Addition => "addition",
            Rule::Multiplication => "multiplication",
            Rule::Primary => "primary",
            Rule::FunctionCall => "function_call",
            Rule::Arrayaccess => "arrayaccess",
        }
    }
}

/// Names a rule gives to tokens whose kind alone is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The declared function name in a `function_head`.
    IdentifierName,
    /// The return type in a `function_head`.
    IdentifierReturns,
    /// `nothing` after `takes`.
    TakesNothing,
    /// `nothing` after `returns`.
    ReturnsNothing,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::IdentifierName => "identifier_name",
            Label::IdentifierReturns => "identifier_returns",
            Label::TakesNothing => "takes_nothing",
            Label::ReturnsNothing => "returns_nothing",
        }
    }
}

/// Child key inside a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Token(TokenId),
    Label(Label),
    Rule(Rule),
}

impl Key {
    pub fn as_str(self) -> &'static str {
        match self {
            Key::Token(id) => tokens::as_str(id),
            Key::Label(label) => label.as_str(),
            Key::Rule(rule) => rule.as_str(),
        }
    }
}

impl From<TokenId> for Key {
    fn from(id: TokenId) -> Self {
        Key::Token(id)
    }
}

impl From<Label> for Key {
    fn from(label: Label) -> Self {
        Key::Label(label)
    }
}

impl From<Rule> for Key {
    fn from(rule: Rule) -> Self {
        Key::Rule(rule)
    }
}

/// A matched token or a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CstElement {
    Token(Token),
    Node(CstNode),
}

impl CstElement {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            CstElement::Token(token) => Some(token),
            CstElement::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&CstNode> {
        match self {
            CstElement::Node(node) => Some(node),
            CstElement::Token(_) => None,
        }
    }

    /// Offset of the first token (placeholders included) at or under this element.
    pub fn start_offset(&self) -> Option<usize> {
        match self {
            CstElement::Token(token) => Some(token.span.start),
            CstElement::Node(node) => node.start_offset(),
        }
    }
}

/// One grammar-rule invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CstNode {
    pub rule: Rule,
    children: Vec<(Key, Vec<CstElement>)>,
}

impl CstNode {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            children: Vec::new(),
        }
    }

    fn slot(&mut self, key: Key) -> &mut Vec<CstElement> {
        let index = match self.children.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.children.push((key, Vec::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    /// Append `token` under `key`.
    pub fn push_token(&mut self, key: impl Into<Key>, token: Token) {
        self.slot(key.into()).push(CstElement::Token(token));
    }

    /// Append a child node under its own rule key.
    pub fn push_node(&mut self, node: CstNode) {
        self.slot(Key::Rule(node.rule)).push(CstElement::Node(node));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Everything stored under `key`, in match order. Empty when the key is absent.
    pub fn get(&self, key: impl Into<Key>) -> &[CstElement] {
        let key = key.into();
        self.children
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, elements)| elements.as_slice())
            .unwrap_or(&[])
    }

    /// Tokens stored under `key`.
    pub fn tokens(&self, key: impl Into<Key>) -> impl Iterator<Item = &Token> {
        self.get(key).iter().filter_map(CstElement::as_token)
    }

    /// First token stored under `key`.
    pub fn token(&self, key: impl Into<Key>) -> Option<&Token> {
        self.tokens(key).next()
    }

    /// Child nodes produced by `rule`.
    pub fn nodes(&self, rule: Rule) -> impl Iterator<Item = &CstNode> {
        self.get(rule).iter().filter_map(CstElement::as_node)
    }

    /// First child node produced by `rule`.
    pub fn node(&self, rule: Rule) -> Option<&CstNode> {
        self.nodes(rule).next()
    }

    /// Return `true` if anything is stored under `key`.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        !self.get(key).is_empty()
    }

    /// All keys with their elements, in first-insertion order of the keys.
    pub fn children(&self) -> impl Iterator<Item = (Key, &[CstElement])> {
        self.children.iter().map(|(k, elements)| (*k, elements.as_slice()))
    }

    /// All child nodes regardless of key.
    pub fn child_nodes(&self) -> impl Iterator<Item = &CstNode> {
        self.children
            .iter()
            .flat_map(|(_, elements)| elements.iter())
            .filter_map(CstElement::as_node)
    }

    /// All direct elements paired with their key, in source order.
    ///
    /// Placeholders sort before the real token they were inserted in front of.
    pub fn elements(&self) -> Vec<(Key, &CstElement)> {
        let mut out: Vec<(Key, &CstElement)> = self
            .children
            .iter()
            .flat_map(|(k, elements)| elements.iter().map(move |e| (*k, e)))
            .collect();
        out.sort_by_key(|(_, e)| e.start_offset().unwrap_or(usize::MAX));
        out
    }

    /// Offset of the first token under this node, placeholders included.
    pub fn start_offset(&self) -> Option<usize> {
        self.children
            .iter()
            .flat_map(|(_, elements)| elements.iter())
            .filter_map(CstElement::start_offset)
            .min()
    }

    /// Every token under this node (recursively), in source order.
    pub fn descendant_tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out.sort_by_key(|t| t.span.start);
        out
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        for (_, elements) in &self.children {
            for element in elements {
                match element {
                    CstElement::Token(token) => out.push(token),
                    CstElement::Node(node) => node.collect_tokens(out),
                }
            }
        }
    }

    /// Byte span covered by the real tokens under this node.
    pub fn span(&self) -> Option<Span> {
        self.descendant_tokens()
            .into_iter()
            .filter(|t| !t.inserted_in_recovery)
            .map(|t| t.span)
            .reduce(Span::merge)
    }

    // ========================================================================
    // Debug rendering
    // ========================================================================

    /// Render an indented debug tree, one line per node or token, children in source order.
    ///
    /// Token lines read `key "image" line:column`; placeholders are marked `<inserted>`.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let _ = writeln!(out, "{:indent$}{}", "", self.rule.as_str(), indent = depth * 2);
        for (key, element) in self.elements() {
            match element {
                CstElement::Node(node) => node.dump_into(out, depth + 1),
                CstElement::Token(token) if token.inserted_in_recovery => {
                    let _ = writeln!(out, "{:indent$}{} <inserted>", "", key.as_str(), indent = (depth + 1) * 2);
                }
                CstElement::Token(token) => {
                    let _ = writeln!(
                        out,
                        "{:indent$}{} {:?} {}:{}",
                        "",
                        key.as_str(),
                        token.image,
                        token.start.line,
                        token.start.column,
                        indent = (depth + 1) * 2
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;

    fn tok(kind: TokenId, image: &str, offset: usize) -> Token {
        let start = Position::new(1, offset + 1);
        let end = Position::new(1, offset + image.len());
        Token::new(kind, image, Span::new(offset, offset + image.len()), start, end)
    }

    #[test]
    fn test_absent_key_is_empty() {
        let node = CstNode::new(Rule::Typedname);
        assert!(node.get(TokenId::Array).is_empty());
        assert_eq!(node.token(TokenId::Identifier), None);
        assert_eq!(node.nodes(Rule::Expression).count(), 0);
        assert!(!node.has(Label::IdentifierName));
        assert_eq!(node.span(), None);
    }

    #[test]
    fn test_tokens_grouped_by_key_but_elements_in_source_order() {
        let mut node = CstNode::new(Rule::TypeDeclare);
        node.push_token(TokenId::Type, tok(TokenId::Type, "type", 0));
        node.push_token(TokenId::Identifier, tok(TokenId::Identifier, "A", 5));
        node.push_token(TokenId::Extends, tok(TokenId::Extends, "extends", 7));
        node.push_token(TokenId::Identifier, tok(TokenId::Identifier, "B", 15));

        let idents: Vec<_> = node.tokens(TokenId::Identifier).map(|t| t.image.as_str()).collect();
        assert_eq!(idents, vec!["A", "B"]);
        let keys: Vec<_> = node.elements().into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["type", "identifier", "extends", "identifier"]);
        assert_eq!(node.span(), Some(Span::new(0, 16)));
    }

    #[test]
    fn test_dump_marks_placeholders() {
        let mut node = CstNode::new(Rule::Arrayaccess);
        let open = tok(TokenId::Lsquareparen, "[", 0);
        let close = Token::placeholder_at(TokenId::Rsquareparen, 1, Position::new(1, 2));
        node.push_token(TokenId::Lsquareparen, open);
        node.push_token(TokenId::Rsquareparen, close);
        assert_eq!(node.dump(), "arrayaccess\n  lsquareparen \"[\" 1:1\n  rsquareparen <inserted>\n");
    }
}
