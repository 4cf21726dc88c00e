//! Handlers for expressions.
//!
//! Operators are flat siblings of their operands, so each level classifies its own operator tokens and visits the
//! next level down.

use jass_core::lang::legend::{self, Category};
use jass_core::lang::messages::MessageId;
use jass_core::lang::tokens::TokenId;
use jass_syntax::cst::{CstNode, Rule};

use super::{Context, Severity, visit_all};

/// Identifiers that read like variables but name built-in constants.
const BUILTIN_CONSTANTS: &[&str] = &["null", "true", "false"];

/// Classify every token of the given kinds stored on `node` with the kind's own category.
fn mark_as_themselves(cx: &mut Context, node: &CstNode, kinds: &[TokenId]) {
    for &kind in kinds {
        if let Some(category) = legend::for_token(kind) {
            cx.mark_all(node.tokens(kind), category);
        }
    }
}

pub(super) fn expression(cx: &mut Context, node: &CstNode) {
    mark_as_themselves(
        cx,
        node,
        &[
            TokenId::And,
            TokenId::Or,
            TokenId::Equals,
            TokenId::Notequals,
            TokenId::Lessorequal,
            TokenId::Less,
            TokenId::Great,
            TokenId::Greatorequal,
        ],
    );
    visit_all(cx, node, Rule::Addition);
}

pub(super) fn addition(cx: &mut Context, node: &CstNode) {
    mark_as_themselves(cx, node, &[TokenId::Add, TokenId::Sub]);
    visit_all(cx, node, Rule::Multiplication);
}

pub(super) fn multiplication(cx: &mut Context, node: &CstNode) {
    mark_as_themselves(cx, node, &[TokenId::Mult, TokenId::Div]);
    visit_all(cx, node, Rule::Primary);
}

pub(super) fn primary(cx: &mut Context, node: &CstNode) {
    for string in node.tokens(TokenId::Stringliteral).filter(|t| t.is_real()) {
        if string.spans_lines() {
            cx.report(MessageId::MultilineString, Severity::Warning, string, &[], Vec::new());
        } else {
            cx.mark(Some(string), Category::Stringliteral);
        }
    }

    mark_as_themselves(
        cx,
        node,
        &[
            TokenId::Sub,
            TokenId::Not,
            TokenId::Integer,
            TokenId::Real,
            TokenId::Idliteral,
            TokenId::Lparen,
            TokenId::Rparen,
        ],
    );

    let identifier = node.token(TokenId::Identifier);
    if node.has(TokenId::Function) {
        cx.mark(node.token(TokenId::Function), Category::Function);
        cx.mark(identifier, Category::FunctionUser);
    } else if let Some(identifier) = identifier {
        let category = if BUILTIN_CONSTANTS.contains(&identifier.image.as_str()) {
            Category::Function
        } else {
            Category::Variable
        };
        cx.mark(Some(identifier), category);
    }

    visit_all(cx, node, Rule::Arrayaccess);
    visit_all(cx, node, Rule::FunctionCall);
    visit_all(cx, node, Rule::Expression);
    visit_all(cx, node, Rule::Primary);
}

pub(super) fn function_call(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Identifier), Category::FunctionUser);
    cx.mark(node.token(TokenId::Lparen), Category::Lparen);
    cx.mark(node.token(TokenId::Rparen), Category::Rparen);
    cx.mark_all(node.tokens(TokenId::Comma), Category::Comma);
    visit_all(cx, node, Rule::Expression);
}

pub(super) fn arrayaccess(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Lsquareparen), Category::Lsquareparen);
    cx.mark(node.token(TokenId::Rsquareparen), Category::Rsquareparen);
    visit_all(cx, node, Rule::Expression);
}
