//! Handlers for declarations: the root, types, natives, functions, globals and variables.
//!
//! Checks that need a whole list of names (duplicate arguments, duplicate locals, locals shadowing arguments) live
//! in the handler that owns the list, not in the per-item handlers.

use jass_core::lang::legend::Category;
use jass_core::lang::messages::MessageId;
use jass_core::lang::tokens::TokenId;
use jass_syntax::cst::{CstNode, Label, Rule};
use jass_syntax::lexer::Token;

use super::context::{NameGroups, ranges};
use super::{Context, Range, Severity, SymbolKind, visit, visit_all};

/// Whether a function head belongs to a `function` or a `native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    User,
    Native,
}

pub(super) struct FunctionHead<'a> {
    pub name: Option<&'a Token>,
    pub args: NameGroups<'a>,
}

pub(super) struct TypedName<'a> {
    pub ty: &'a Token,
    pub name: &'a Token,
    pub array: Option<&'a Token>,
}

pub(super) struct Variable<'a> {
    /// `local` or `constant`, if written.
    pub modifier: Option<&'a Token>,
    pub typedname: Option<TypedName<'a>>,
}

pub(super) struct TypeDeclare<'a> {
    pub keyword: Option<&'a Token>,
    pub name: Option<&'a Token>,
    pub base: Option<&'a Token>,
}

pub(super) fn jass(cx: &mut Context, node: &CstNode) {
    // Source order, so symbols come out in document order.
    for child in node.elements().into_iter().filter_map(|(_, e)| e.as_node()) {
        if child.rule != Rule::TypeDeclare {
            visit(cx, child);
            continue;
        }
        let declared = type_declare(cx, child);
        if let (Some(name), Some(base)) = (declared.name, declared.base) {
            let range = Range::between(declared.keyword.unwrap_or(name), base);
            cx.add_symbol(&name.image, SymbolKind::Type, Some(base.image.clone()), range);
        }
    }
}

pub(super) fn jass_constant(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Constant), Category::Constant);
    visit_all(cx, node, Rule::FunctionDeclare);
    visit_all(cx, node, Rule::NativeDeclare);
}

pub(super) fn native_declare(cx: &mut Context, node: &CstNode) {
    cx.mark(node.token(TokenId::Native), Category::Native);
    if let Some(head) = node.node(Rule::FunctionHead) {
        function_head(cx, head, Flavor::Native);
    }
}

pub(super) fn function_declare(cx: &mut Context, node: &CstNode) {
    let head = node.node(Rule::FunctionHead).map(|head| function_head(cx, head, Flavor::User));

    let open = cx.mark(node.token(TokenId::Function), Category::Function);
    let close = cx.mark(node.token(TokenId::Endfunction), Category::Endfunction);
    let function_name = head.as_ref().and_then(|h| h.name).filter(|t| t.is_real());
    if let (Some(open), Some(close), Some(function_name)) = (open, close, function_name) {
        cx.add_block(&function_name.image, SymbolKind::Function, open, close);
    }

    let empty = NameGroups::default();
    let args = head.as_ref().map_or(&empty, |h| &h.args);
    let mut locals = NameGroups::default();

    for declare in node.nodes(Rule::VariableDeclare) {
        let variable = variable_declare(cx, declare);
        match variable.modifier {
            Some(constant) if constant.is(TokenId::Constant) => {
                cx.report(MessageId::ConstantInFunction, Severity::Error, constant, &[], Vec::new());
            }
            Some(_) => {}
            None => {
                if let Some(typedname) = &variable.typedname {
                    let name = typedname.name.image.as_str();
                    cx.report(MessageId::MissingLocal, Severity::Error, typedname.ty, &[("name", name)], Vec::new());
                }
            }
        }

        let Some(typedname) = variable.typedname else {
            continue;
        };
        cx.mark(Some(typedname.ty), Category::TypeName);
        cx.mark(Some(typedname.name), Category::Variable);

        let name = typedname.name;
        locals.push(name);
        let shadowed = args.get(&name.image);
        if shadowed.is_empty() {
            continue;
        }
        // Each colliding token gets its own warning, related to all the others.
        let colliding: Vec<&Token> = std::iter::once(name).chain(shadowed.iter().copied()).collect();
        for (i, token) in colliding.iter().enumerate() {
            let related = colliding
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| Range::of(other))
                .collect();
            cx.report(
                MessageId::LocalRedeclaresArgument,
                Severity::Warning,
                token,
                &[("name", name.image.as_str())],
                related,
            );
        }
    }

    for group in locals.duplicates() {
        let name = group[0].image.as_str();
        cx.report(MessageId::DuplicateLocal, Severity::Warning, group[1], &[("name", name)], ranges(group));
    }

    visit_all(cx, node, Rule::Statement);
}

pub(super) fn function_head<'a>(cx: &mut Context, node: &'a CstNode, flavor: Flavor) -> FunctionHead<'a> {
    cx.mark(node.token(TokenId::Takes), Category::Takes);
    cx.mark(node.token(TokenId::Returns), Category::Returns);

    let name = node.token(Label::IdentifierName);
    let category = match flavor {
        Flavor::User => Category::FunctionUser,
        Flavor::Native => Category::FunctionNative,
    };
    cx.mark(name, category);

    let mut args = NameGroups::default();
    if node.has(Label::TakesNothing) {
        cx.mark(node.token(Label::TakesNothing), Category::TypeName);
    } else {
        cx.mark_all(node.tokens(TokenId::Comma), Category::Comma);
        for param in node.nodes(Rule::Typedname) {
            let Some(arg) = typedname(cx, param) else {
                continue;
            };
            args.push(arg.name);
            cx.mark(Some(arg.ty), Category::TypeName);
            cx.mark(Some(arg.name), Category::Argument);
            if let Some(array) = arg.array {
                cx.report(MessageId::ArrayArgument, Severity::Error, array, &[], Vec::new());
            }
        }

        for group in args.duplicates() {
            let name = group[0].image.as_str();
            cx.report(MessageId::DuplicateArgument, Severity::Warning, group[1], &[("name", name)], ranges(group));
        }
    }

    if node.has(Label::ReturnsNothing) {
        cx.mark(node.token(Label::ReturnsNothing), Category::TypeName);
    } else {
        cx.mark(node.token(Label::IdentifierReturns), Category::TypeName);
    }

    FunctionHead { name, args }
}

pub(super) fn globals_declare(cx: &mut Context, node: &CstNode) {
    let open = cx.mark(node.token(TokenId::Globals), Category::Globals);
    let close = cx.mark(node.token(TokenId::Endglobals), Category::Endglobals);
    if let (Some(open), Some(close)) = (open, close) {
        cx.add_block(&open.image, SymbolKind::Globals, open, close);
    }

    for declare in node.nodes(Rule::VariableDeclare) {
        let variable = variable_declare(cx, declare);
        if let Some(local) = variable.modifier.filter(|t| t.is(TokenId::Local)) {
            cx.report(MessageId::LocalInGlobals, Severity::Error, local, &[], Vec::new());
        }
        if let Some(typedname) = variable.typedname {
            cx.mark(Some(typedname.ty), Category::TypeName);
            cx.mark(Some(typedname.name), Category::Variable);
        }
    }
}

pub(super) fn variable_declare<'a>(cx: &mut Context, node: &'a CstNode) -> Variable<'a> {
    let modifier = node
        .token(TokenId::Local)
        .or_else(|| node.token(TokenId::Constant))
        .filter(|t| t.is_real());
    cx.mark(node.token(TokenId::Local), Category::Local);
    cx.mark(node.token(TokenId::Constant), Category::Constant);

    let declared = node.node(Rule::Typedname).and_then(|t| typedname(cx, t));
    let assign = cx.mark(node.token(TokenId::Assign), Category::Assign);

    if let (Some(_), Some(array)) = (assign, declared.as_ref().and_then(|t| t.array)) {
        cx.report(MessageId::ArrayInitializer, Severity::Error, array, &[], Vec::new());
    }

    visit_all(cx, node, Rule::Expression);
    Variable {
        modifier,
        typedname: declared,
    }
}

pub(super) fn type_declare<'a>(cx: &mut Context, node: &'a CstNode) -> TypeDeclare<'a> {
    let keyword = cx.mark(node.token(TokenId::Type), Category::Type);
    cx.mark(node.token(TokenId::Extends), Category::Extends);

    let mut identifiers = node.tokens(TokenId::Identifier);
    let name = cx.mark(identifiers.next(), Category::TypeName);
    let base = cx.mark(identifiers.next(), Category::TypeName);
    TypeDeclare { keyword, name, base }
}

/// `None` unless both identifiers are real tokens.
pub(super) fn typedname<'a>(cx: &mut Context, node: &'a CstNode) -> Option<TypedName<'a>> {
    let array = cx.mark(node.token(TokenId::Array), Category::Array);

    let mut identifiers = node.tokens(TokenId::Identifier);
    let ty = identifiers.next().filter(|t| t.is_real())?;
    let name = identifiers.next().filter(|t| t.is_real())?;
    Some(TypedName { ty, name, array })
}
