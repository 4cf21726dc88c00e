use super::*;
use jass_syntax::{lexer, parser};

fn run(source: &str) -> Analysis {
    let lexed = lexer::lex(source);
    assert!(lexed.errors.is_empty(), "unexpected lex errors: {:?}", lexed.errors);
    let parsed = parser::parse(&lexed.tokens);
    analyze(&parsed.root)
}

fn kinds(analysis: &Analysis) -> Vec<DiagnosticKind> {
    analysis.diagnostics.iter().map(|d| d.kind).collect()
}

fn range(line: usize, start: usize, end: usize) -> Range {
    Range::new(Point::new(line, start), Point::new(line, end))
}

/// Category of the classification starting at `line:column`, if any.
fn category_at(analysis: &Analysis, line: usize, column: usize) -> Option<Category> {
    analysis
        .classifications
        .iter()
        .find(|c| c.line == line && c.column == column)
        .map(|c| c.category)
}

// ========================================
// Checks
// ========================================

#[test]
fn test_duplicate_argument() {
    let analysis = run("function Foo takes integer a, integer a returns nothing\nendfunction");
    assert_eq!(kinds(&analysis), vec![MessageId::DuplicateArgument]);

    let diagnostic = &analysis.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.message, "Argument 'a' is declared more than once");
    assert_eq!(diagnostic.range, range(0, 36, 37));
    assert_eq!(diagnostic.related, vec![range(0, 25, 26), range(0, 36, 37)]);
}

#[test]
fn test_local_in_globals() {
    let analysis = run("globals\n local integer x\nendglobals");
    assert_eq!(kinds(&analysis), vec![MessageId::LocalInGlobals]);
    assert_eq!(analysis.diagnostics[0].severity, Severity::Error);
    assert_eq!(analysis.diagnostics[0].range, range(1, 1, 6));
}

#[test]
fn test_duplicate_local_without_argument_collision() {
    let source = "function F takes nothing returns nothing\n local integer a = 5\n local integer a\nendfunction";
    let analysis = run(source);
    assert_eq!(kinds(&analysis), vec![MessageId::DuplicateLocal]);

    let diagnostic = &analysis.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.range, range(2, 15, 16));
    assert_eq!(diagnostic.related, vec![range(1, 15, 16), range(2, 15, 16)]);
}

#[test]
fn test_local_redeclares_argument() {
    let analysis = run("function F takes integer a returns nothing\n local integer a\nendfunction\n");
    assert_eq!(
        kinds(&analysis),
        vec![MessageId::LocalRedeclaresArgument, MessageId::LocalRedeclaresArgument]
    );

    let local = &analysis.diagnostics[0];
    assert_eq!(local.severity, Severity::Warning);
    assert_eq!(local.message, "Local 'a' redeclares an argument of the same name");
    assert_eq!(local.range, range(1, 15, 16));
    assert_eq!(local.related, vec![range(0, 25, 26)]);

    let argument = &analysis.diagnostics[1];
    assert_eq!(argument.range, range(0, 25, 26));
    assert_eq!(argument.related, vec![range(1, 15, 16)]);
}

#[test]
fn test_local_redeclaring_a_repeated_argument_warns_on_every_occurrence() {
    let source = "function F takes integer a, real a returns nothing
 local integer a
endfunction
";
    let analysis = run(source);
    let redeclared: Vec<_> = analysis
        .diagnostics
        .iter()
        .filter(|d| d.kind == MessageId::LocalRedeclaresArgument)
        .collect();
    let anchors: Vec<_> = redeclared.iter().map(|d| d.range).collect();
    assert_eq!(anchors, vec![range(1, 15, 16), range(0, 25, 26), range(0, 33, 34)]);
    assert!(redeclared.iter().all(|d| d.related.len() == 2));
    assert!(kinds(&analysis).contains(&MessageId::DuplicateArgument));
}

#[test]
fn test_array_argument() {
    let analysis = run("native F takes integer array xs returns nothing\n");
    assert_eq!(kinds(&analysis), vec![MessageId::ArrayArgument]);
    assert_eq!(analysis.diagnostics[0].severity, Severity::Error);
    assert_eq!(analysis.diagnostics[0].range, range(0, 23, 28));
}

#[test]
fn test_array_initializer() {
    let analysis = run("globals\n integer array xs = 1\nendglobals\n");
    assert_eq!(kinds(&analysis), vec![MessageId::ArrayInitializer]);
    assert_eq!(analysis.diagnostics[0].range, range(1, 9, 14));
}

#[test]
fn test_constant_local_and_missing_local() {
    let source = "function F takes nothing returns nothing\n constant integer a = 1\n integer b\nendfunction\n";
    let analysis = run(source);
    assert_eq!(kinds(&analysis), vec![MessageId::ConstantInFunction, MessageId::MissingLocal]);

    assert_eq!(analysis.diagnostics[0].range, range(1, 1, 9));
    let missing = &analysis.diagnostics[1];
    assert_eq!(missing.severity, Severity::Error);
    assert_eq!(missing.range, range(2, 1, 8));
    assert_eq!(missing.message, "Variable 'b' must be declared with 'local' inside a function");
}

#[test]
fn test_multiline_string_is_a_warning_not_a_highlight() {
    let analysis = run("function F takes nothing returns nothing\n call G(\"a\nb\")\nendfunction\n");
    assert_eq!(kinds(&analysis), vec![MessageId::MultilineString]);
    let diagnostic = &analysis.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.range, Range::new(Point::new(1, 8), Point::new(2, 2)));
    assert!(analysis.classifications.iter().all(|c| c.category != Category::Stringliteral));
}

#[test]
fn test_valid_program_has_no_diagnostics() {
    let source = "globals\n constant integer MAX = 12\n unit array units\nendglobals\n\
                  function F takes integer a returns integer\n local integer i = a\n set units[i] = null\n return i\nendfunction\n";
    assert!(run(source).diagnostics.is_empty());
}

// ========================================
// Symbols and folding
// ========================================

#[test]
fn test_type_declare() {
    let analysis = run("type A extends B");
    assert_eq!(analysis.symbols.len(), 1);
    let symbol = &analysis.symbols[0];
    assert_eq!(symbol.name, "A");
    assert_eq!(symbol.kind, SymbolKind::Type);
    assert_eq!(symbol.detail.as_deref(), Some("B"));
    assert_eq!(symbol.range, range(0, 0, 16));
    assert!(analysis.folding_ranges.is_empty());

    let events: Vec<_> = analysis
        .classifications
        .iter()
        .map(|c| (c.column, c.length, c.category))
        .collect();
    assert_eq!(
        events,
        vec![
            (0, 4, Category::Type),
            (5, 1, Category::TypeName),
            (7, 7, Category::Extends),
            (15, 1, Category::TypeName),
        ]
    );
}

#[test]
fn test_function_and_globals_blocks() {
    let source = "globals\n integer x\nendglobals\nfunction Foo takes nothing returns nothing\n\nendfunction\n";
    let analysis = run(source);

    let names: Vec<_> = analysis.symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(names, vec![("globals", SymbolKind::Globals), ("Foo", SymbolKind::Function)]);
    assert_eq!(analysis.symbols[1].range, Range::new(Point::new(3, 0), Point::new(5, 11)));

    let folds: Vec<_> = analysis.folding_ranges.iter().map(|f| (f.start_line, f.end_line)).collect();
    assert_eq!(folds, vec![(0, 2), (3, 5)]);
}

#[test]
fn test_broken_block_has_no_folding() {
    let analysis = run("function F takes nothing returns nothing\n call G()\n");
    assert!(analysis.symbols.is_empty());
    assert!(analysis.folding_ranges.is_empty());
}

#[test]
fn test_one_bad_token_keeps_the_fold() {
    let analysis = run("function F takes nothing returns nothing\n set a x = 1\nendfunction\n");
    assert_eq!(analysis.folding_ranges.len(), 1);
    assert_eq!(analysis.symbols[0].name, "F");
}

// ========================================
// Classification
// ========================================

#[test]
fn test_placeholders_are_never_classified() {
    let analysis = run("function F takes nothing returns nothing\n if x\n endif\nendfunction\n");
    assert!(analysis.classifications.iter().all(|c| c.length > 0));
    assert!(analysis.classifications.iter().all(|c| c.category != Category::Then));
    assert_eq!(category_at(&analysis, 1, 1), Some(Category::If));
    assert_eq!(category_at(&analysis, 2, 1), Some(Category::Endif));
}

#[test]
fn test_native_head() {
    let analysis = run("constant native GetUnitX takes unit whichUnit returns real\n");
    assert_eq!(category_at(&analysis, 0, 0), Some(Category::Constant));
    assert_eq!(category_at(&analysis, 0, 9), Some(Category::Native));
    assert_eq!(category_at(&analysis, 0, 16), Some(Category::FunctionNative));
    assert_eq!(category_at(&analysis, 0, 25), Some(Category::Takes));
    assert_eq!(category_at(&analysis, 0, 31), Some(Category::TypeName));
    assert_eq!(category_at(&analysis, 0, 36), Some(Category::Argument));
    assert_eq!(category_at(&analysis, 0, 46), Some(Category::Returns));
    assert_eq!(category_at(&analysis, 0, 54), Some(Category::TypeName));
    assert!(analysis.symbols.is_empty());
}

#[test]
fn test_expression_roles() {
    let source = "function F takes nothing returns boolean\n\
                  call TimerStart(t, 1.0, false, function G)\n\
                  return not x\n\
                  endfunction\n";
    let analysis = run(source);
    assert_eq!(category_at(&analysis, 0, 9), Some(Category::FunctionUser));
    assert_eq!(category_at(&analysis, 0, 33), Some(Category::TypeName));

    // call TimerStart(t, 1.0, false, function G)
    assert_eq!(category_at(&analysis, 1, 0), Some(Category::Call));
    assert_eq!(category_at(&analysis, 1, 5), Some(Category::FunctionUser));
    assert_eq!(category_at(&analysis, 1, 15), Some(Category::Lparen));
    assert_eq!(category_at(&analysis, 1, 16), Some(Category::Variable));
    assert_eq!(category_at(&analysis, 1, 17), Some(Category::Comma));
    assert_eq!(category_at(&analysis, 1, 19), Some(Category::Real));
    assert_eq!(category_at(&analysis, 1, 24), Some(Category::Function));
    assert_eq!(category_at(&analysis, 1, 31), Some(Category::Function));
    assert_eq!(category_at(&analysis, 1, 40), Some(Category::FunctionUser));

    // return not x
    assert_eq!(category_at(&analysis, 2, 0), Some(Category::Return));
    assert_eq!(category_at(&analysis, 2, 7), Some(Category::Not));
    assert_eq!(category_at(&analysis, 2, 11), Some(Category::Variable));
}

#[test]
fn test_statement_keywords() {
    let source = "function F takes nothing returns nothing\n\
                  loop\n\
                  exitwhen i >= 10\n\
                  debug call G()\n\
                  endloop\n\
                  if a < b then\n\
                  elseif a > b then\n\
                  else\n\
                  endif\n\
                  endfunction\n";
    let analysis = run(source);
    assert!(analysis.diagnostics.is_empty());

    assert_eq!(category_at(&analysis, 1, 0), Some(Category::Loop));
    assert_eq!(category_at(&analysis, 2, 0), Some(Category::Exitwhen));
    assert_eq!(category_at(&analysis, 2, 11), Some(Category::Greatorequal));
    assert_eq!(category_at(&analysis, 3, 0), Some(Category::Debug));
    assert_eq!(category_at(&analysis, 3, 6), Some(Category::Call));
    assert_eq!(category_at(&analysis, 4, 0), Some(Category::Endloop));
    assert_eq!(category_at(&analysis, 5, 5), Some(Category::Less));
    assert_eq!(category_at(&analysis, 5, 9), Some(Category::Then));
    assert_eq!(category_at(&analysis, 6, 0), Some(Category::Elseif));
    assert_eq!(category_at(&analysis, 7, 0), Some(Category::Else));
    assert_eq!(category_at(&analysis, 8, 0), Some(Category::Endif));
}

#[test]
fn test_classifications_are_sorted() {
    let source = "function F takes integer a returns nothing\n local integer b = a * 2 + 'hfoo'\nendfunction\n";
    let analysis = run(source);
    let positions: Vec<_> = analysis.classifications.iter().map(|c| (c.line, c.column)).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_analyze_is_idempotent() {
    let lexed = lexer::lex("function F takes integer a, integer a returns nothing\n local integer a\nendfunction\n");
    let parsed = parser::parse(&lexed.tokens);
    assert_eq!(analyze(&parsed.root), analyze(&parsed.root));
}

#[test]
fn test_comments_need_trivia_tokens() {
    let lexed = lexer::Lexer::new("// hi\ntype a extends b\n").with_trivia(true).tokenize();
    let parsed = parser::parse(&lexed.tokens);

    let with = Analyzer::default().analyze_with_trivia(&parsed.root, &lexed.tokens);
    assert_eq!(category_at(&with, 0, 0), Some(Category::Comment));

    let without = Analyzer::new(&Config::default().with_highlight_comments(false))
        .analyze_with_trivia(&parsed.root, &lexed.tokens);
    assert_eq!(category_at(&without, 0, 0), None);
}
