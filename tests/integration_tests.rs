//! Integration tests for the JASS pipeline (lex → parse → analyze)

use jass::analysis::{Severity, SymbolKind};
use jass::{Config, DocumentAnalysis, analyze_source};
use jass_core::lang::legend::Category;
use jass_core::lang::messages::MessageId;

/// Helper to run the full pipeline with the default configuration
fn check(source: &str) -> DocumentAnalysis {
    analyze_source(source, &Config::default())
}

fn kinds(doc: &DocumentAnalysis) -> Vec<MessageId> {
    doc.diagnostics().iter().map(|d| d.kind).collect()
}

const VALID_PROGRAM: &str = "type unit extends handle
globals
    constant integer MAX = 10
    unit array units
endglobals
native GetCount takes nothing returns integer
function Tick takes integer start returns integer
    local integer i = start + 1
    // count down
    if i > MAX then
        return i
    elseif i < 0 then
        return 0
    else
        set units[i] = null
    endif
    loop
        exitwhen i == 0
        set i = i - 1
    endloop
    call GetCount()
    return i
endfunction
";

#[test]
fn test_valid_program() {
    let doc = check(VALID_PROGRAM);
    assert!(doc.lex_errors.is_empty(), "lex errors: {:?}", doc.lex_errors);
    assert!(doc.syntax_errors.is_empty(), "syntax errors: {:?}", doc.syntax_errors);
    assert!(doc.diagnostics().is_empty(), "diagnostics: {:?}", doc.diagnostics());
    // type, globals, native, function
    assert_eq!(doc.root.child_nodes().count(), 4);

    let symbols: Vec<_> = doc.analysis.symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(
        symbols,
        vec![
            ("unit", SymbolKind::Type),
            ("globals", SymbolKind::Globals),
            ("Tick", SymbolKind::Function)
        ]
    );
    let folds: Vec<_> = doc.analysis.folding_ranges.iter().map(|f| (f.start_line, f.end_line)).collect();
    assert_eq!(folds, vec![(1, 4), (6, 22)]);
    assert!(doc.analysis.classifications.iter().any(|c| c.category == Category::Comment));
}

#[test]
fn test_one_malformed_token_in_a_body() {
    let doc = check("function F takes nothing returns nothing\n set a x = 1\nendfunction\n");
    assert_eq!(doc.syntax_errors.len(), 1);
    assert_eq!(doc.analysis.folding_ranges.len(), 1);
    assert_eq!((doc.analysis.folding_ranges[0].start_line, doc.analysis.folding_ranges[0].end_line), (0, 2));
}

#[test]
fn test_duplicate_argument_scenario() {
    let doc = check("function Foo takes integer a, integer a returns nothing\nendfunction");
    assert_eq!(kinds(&doc), vec![MessageId::DuplicateArgument]);
    let diagnostic = &doc.diagnostics()[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.related.len(), 2);
}

#[test]
fn test_local_in_globals_scenario() {
    let doc = check("globals\n local integer x\nendglobals");
    assert_eq!(kinds(&doc), vec![MessageId::LocalInGlobals]);
    assert!(doc.has_errors());
}

#[test]
fn test_duplicate_local_scenario() {
    let doc = check("function F takes nothing returns nothing\n local integer a = 5\n local integer a\nendfunction");
    assert_eq!(kinds(&doc), vec![MessageId::DuplicateLocal]);
    assert!(!doc.has_errors());
}

#[test]
fn test_type_declare_scenario() {
    let doc = check("type A extends B");
    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.analysis.symbols.len(), 1);
    assert_eq!(doc.analysis.symbols[0].name, "A");
    assert_eq!(doc.analysis.symbols[0].detail.as_deref(), Some("B"));

    let categories: Vec<_> = doc.analysis.classifications.iter().map(|c| c.category).collect();
    assert_eq!(
        categories,
        vec![Category::Type, Category::TypeName, Category::Extends, Category::TypeName]
    );
}

#[test]
fn test_multiline_string_scenario() {
    let doc = check("globals\n string s = \"first\nsecond\"\nendglobals\n");
    assert!(doc.syntax_errors.is_empty());
    assert_eq!(kinds(&doc), vec![MessageId::MultilineString]);
}

#[test]
fn test_unknown_characters_do_not_stop_analysis() {
    let doc = check("type a extends b @\nglobals\n local integer x\nendglobals\n");
    assert_eq!(doc.lex_errors.len(), 1);
    assert!(kinds(&doc).contains(&MessageId::LocalInGlobals));
}

#[test]
fn test_recovery_disabled_stops_at_first_error() {
    let source = "type\ntype\ntype\n";
    let recovering = check(source);
    let strict = analyze_source(source, &Config::default().with_recovery(false));
    assert!(recovering.syntax_errors.len() > 1);
    assert_eq!(strict.syntax_errors.len(), 1);
}

#[test]
fn test_deeply_nested_blocks_fit_a_worker_stack() {
    let depth = 5000;
    let source = format!(
        "function F takes nothing returns nothing\n{}{}endfunction\n",
        "if true then\n".repeat(depth),
        "endif\n".repeat(depth)
    );
    // Same stack size as a tokio worker thread
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            let doc = check(&source);
            (doc.syntax_errors.len(), doc.analysis.folding_ranges.len())
        })
        .unwrap();
    let (syntax_errors, folds) = handle.join().unwrap();
    assert!(syntax_errors > 0);
    assert!(syntax_errors <= 100);
    assert!(folds <= 1);
}
