//! Snapshot tests for the textual outputs of the pipeline
//!
//! These pin the CST dump and the highlight event stream that the `parse` and `highlight` commands print.

use jass::{Config, analyze_source};

fn highlight(source: &str) -> String {
    let doc = analyze_source(source, &Config::default());
    doc.analysis
        .classifications
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_native_declare_dump() {
    let doc = analyze_source("native Foo takes nothing returns nothing\n", &Config::default());
    insta::assert_snapshot!(doc.root.dump().trim_end(), @r#"
    jass
      jass_constant
        native_declare
          native "native" 1:1
          function_head
            identifier_name "Foo" 1:8
            takes "takes" 1:12
            takes_nothing "nothing" 1:18
            returns "returns" 1:26
            returns_nothing "nothing" 1:34
      linebreak "\n" 1:41
    "#);
}

#[test]
fn test_type_declare_highlight() {
    insta::assert_snapshot!(highlight("type unit extends handle // base\n"), @r"
    1:1 len=4 jass_type
    1:6 len=4 jass_type_name
    1:11 len=7 jass_extends
    1:19 len=6 jass_type_name
    1:26 len=7 jass_comment
    ");
}

#[test]
fn test_function_highlight() {
    insta::assert_snapshot!(highlight("function F takes nothing returns nothing\nendfunction\n"), @r"
    1:1 len=8 jass_function
    1:10 len=1 jass_function_user
    1:12 len=5 jass_takes
    1:18 len=7 jass_type_name
    1:26 len=7 jass_returns
    1:34 len=7 jass_type_name
    2:1 len=11 jass_endfunction
    ");
}
