//! Diagnostic message catalog.
//!
//! Every message the pipeline can produce is registered here under a stable [`MessageId`] with a key (for
//! tooling that wants to translate or filter) and an English template. Templates may reference `{name}`-style
//! placeholders that [`render`] substitutes.
//!
//! ## Examples
//! ```rust
//! use jass_core::lang::messages::{self, MessageId};
//!
//! let msg = messages::render(MessageId::DuplicateArgument, &[("name", "a")]);
//! assert_eq!(msg, "Argument 'a' is declared more than once");
//! ```

/// Stable identifier for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    // Lexical
    UnexpectedCharacter,

    // Syntax
    MismatchToken,
    NoViableAlt,
    NotAllInputParsed,
    EarlyExit,
    NestingTooDeep,

    // Semantic
    MultilineString,
    ArrayArgument,
    ArrayInitializer,
    LocalRedeclaresArgument,
    DuplicateLocal,
    DuplicateArgument,
    LocalInGlobals,
    ConstantInFunction,
    MissingLocal,
}

/// Metadata for one message.
#[derive(Debug, Clone, Copy)]
pub struct MessageInfo {
    pub id: MessageId,
    pub key: &'static str,
    pub template: &'static str,
}

/// Registry of all messages.
pub const MESSAGES: &[MessageInfo] = &[
    msg(MessageId::UnexpectedCharacter, "unexpectedCharacter", "Unexpected Character"),
    msg(MessageId::MismatchToken, "mismatchToken", "Expected {expected}, found {found}"),
    msg(MessageId::NoViableAlt, "noViableAlt", "Expected {expected}, found {found}"),
    msg(MessageId::NotAllInputParsed, "notAllInputParsed", "Unexpected {found}, expected {expected}"),
    msg(MessageId::EarlyExit, "earlyExit", "Expected at least one {expected}, found {found}"),
    msg(MessageId::NestingTooDeep, "nestingTooDeep", "Expression nesting exceeds {limit} levels"),
    msg(
        MessageId::MultilineString,
        "multilineStringError",
        "String literal spans multiple lines",
    ),
    msg(
        MessageId::ArrayArgument,
        "arrayInFunctionArgumentError",
        "Function arguments cannot be arrays",
    ),
    msg(
        MessageId::ArrayInitializer,
        "arrayInitializeError",
        "Arrays cannot be initialized in their declaration",
    ),
    msg(
        MessageId::LocalRedeclaresArgument,
        "localRedeclareArgError",
        "Local '{name}' redeclares an argument of the same name",
    ),
    msg(
        MessageId::DuplicateLocal,
        "localRedeclareLocalError",
        "Local '{name}' is declared more than once",
    ),
    msg(
        MessageId::DuplicateArgument,
        "sameNameArgumentError",
        "Argument '{name}' is declared more than once",
    ),
    msg(
        MessageId::LocalInGlobals,
        "localInGlobalsError",
        "'local' cannot be used inside a globals block",
    ),
    msg(
        MessageId::ConstantInFunction,
        "constantInFunctionError",
        "Function locals cannot be declared 'constant'",
    ),
    msg(
        MessageId::MissingLocal,
        "missingLocalError",
        "Variable '{name}' must be declared with 'local' inside a function",
    ),
];

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: MessageId) -> &'static MessageInfo {
    MESSAGES.iter().find(|m| m.id == id).expect("message info missing")
}

/// Stable key for `id`.
pub fn key(id: MessageId) -> &'static str {
    info_for(id).key
}

/// Render the template for `id`, replacing `{placeholder}`s with `args`.
///
/// Unknown placeholders are left verbatim so a missing argument is visible rather than silently dropped.
pub fn render(id: MessageId, args: &[(&str, &str)]) -> String {
    let mut out = info_for(id).template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

const fn msg(id: MessageId, key: &'static str, template: &'static str) -> MessageInfo {
    MessageInfo { id, key, template }
}
