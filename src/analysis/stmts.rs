//! Handlers for statements.

use jass_core::lang::legend::Category;
use jass_core::lang::tokens::TokenId;
use jass_syntax::cst::{CstNode, Rule};

use super::{Context, visit, visit_all};

pub(super) fn statement(cx: &mut Context, node: &CstNode) {
    for child in node.child_nodes() {
        visit(cx, child);
    }
}

pub(super) fn set_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Set), Category::Set);
    cx.mark(node.token(TokenId::Identifier), Category::Variable);
    cx.mark(node.token(TokenId::Assign), Category::Assign);
    visit_all(cx, node, Rule::Arrayaccess);
    visit_all(cx, node, Rule::Expression);
}

pub(super) fn call_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Debug), Category::Debug);
    cx.mark(node.token(TokenId::Call), Category::Call);
    visit_all(cx, node, Rule::FunctionCall);
}

pub(super) fn loop_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Loop), Category::Loop);
    cx.mark(node.token(TokenId::Endloop), Category::Endloop);
    visit_all(cx, node, Rule::Statement);
}

pub(super) fn exitwhen_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Exitwhen), Category::Exitwhen);
    visit_all(cx, node, Rule::Expression);
}

pub(super) fn return_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Return), Category::Return);
    visit_all(cx, node, Rule::Expression);
}

pub(super) fn if_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::If), Category::If);
    cx.mark(node.token(TokenId::Then), Category::Then);
    cx.mark(node.token(TokenId::Endif), Category::Endif);
    visit_all(cx, node, Rule::Expression);
    visit_all(cx, node, Rule::Statement);
    visit_all(cx, node, Rule::ElseifStatement);
    visit_all(cx, node, Rule::ElseStatement);
}

pub(super) fn elseif_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Elseif), Category::Elseif);
    cx.mark(node.token(TokenId::Then), Category::Then);
    visit_all(cx, node, Rule::Expression);
    visit_all(cx, node, Rule::Statement);
}

pub(super) fn else_statement(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Else), Category::Else);
    visit_all(cx, node, Rule::Statement);
}
