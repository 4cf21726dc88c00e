//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use jass_core::lang::{legend, tokens};
use jass_syntax::lexer::Lexer;

use crate::analysis::{Diagnostic, Severity};
use crate::config::Config;
use crate::diagnostics::Report;
use crate::error::read_source;
use crate::pipeline::{self, DocumentAnalysis};

use super::{CliError, CliResult, ExitCode};

fn load(file_path: &Path, config: &Config) -> CliResult<(String, DocumentAnalysis)> {
    let source = read_source(file_path)?;
    let doc = pipeline::analyze_source(&source, config);
    Ok((source, doc))
}

fn render(file_path: &Path, source: &str, diagnostic: &Diagnostic) {
    let report = Report::from_diagnostic(diagnostic, &file_path.to_string_lossy(), source);
    eprintln!("{:?}", miette::Report::new(report));
}

/// Fail with a summary if any diagnostic in `diagnostics` is an error.
fn exit_for(diagnostics: &[Diagnostic]) -> CliResult<ExitCode> {
    let errors = diagnostics.iter().filter(|d| d.severity == Severity::Error).count();
    if errors > 0 {
        let plural = if errors == 1 { "" } else { "s" };
        return Err(CliError::failure(format!("{errors} error{plural} found")));
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the full pipeline and print every diagnostic.
pub fn check_file(file_path: &Path, config: &Config) -> CliResult<ExitCode> {
    let (source, doc) = load(file_path, config)?;
    let diagnostics = doc.diagnostics();
    for diagnostic in &diagnostics {
        render(file_path, &source, diagnostic);
    }

    let result = exit_for(&diagnostics);
    if result.is_ok() {
        let warnings = diagnostics.len();
        if warnings == 0 {
            println!("✓ No problems found");
        } else {
            println!("✓ No errors ({warnings} warning{})", if warnings == 1 { "" } else { "s" });
        }
    }
    result
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &Path, trivia: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let lexed = Lexer::new(&source).with_trivia(trivia).tokenize();

    for token in &lexed.tokens {
        println!(
            "{:>5}:{:<4} {:<14} {:?}",
            token.start.line,
            token.start.column,
            tokens::as_str(token.kind),
            token.image
        );
    }
    for err in &lexed.errors {
        eprintln!("{}:{err}", file_path.display());
    }

    if lexed.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!("{} lexical error(s)", lexed.errors.len())))
    }
}

/// Parse and display the syntax tree.
pub fn parse_file(file_path: &Path, config: &Config) -> CliResult<ExitCode> {
    let (_, doc) = load(file_path, config)?;
    print!("{}", doc.root.dump());

    for err in &doc.syntax_errors {
        eprintln!(
            "{}:{}:{}: {}: {}",
            file_path.display(),
            err.token.start.line,
            err.token.start.column,
            err.kind,
            err.message
        );
    }

    if doc.syntax_errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!("{} syntax error(s)", doc.syntax_errors.len())))
    }
}

/// Print classification events in source order.
pub fn highlight_file(file_path: &Path, config: &Config) -> CliResult<ExitCode> {
    let (_, doc) = load(file_path, config)?;
    for classification in &doc.analysis.classifications {
        println!("{classification}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Print document symbols, then folding ranges.
pub fn symbols_file(file_path: &Path, config: &Config) -> CliResult<ExitCode> {
    let (_, doc) = load(file_path, config)?;
    for symbol in &doc.analysis.symbols {
        let detail = symbol.detail.as_deref().map(|d| format!(" extends {d}")).unwrap_or_default();
        println!(
            "{:<8} {}{} [{}-{}]",
            symbol.kind.as_str(),
            symbol.name,
            detail,
            symbol.range.start,
            symbol.range.end
        );
    }
    for fold in &doc.analysis.folding_ranges {
        println!("fold     {}..{}", fold.start_line + 1, fold.end_line + 1);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the token catalog (in lexer priority order) and the highlight legend (in wire order).
pub fn print_legend(name: Option<&str>) -> CliResult<ExitCode> {
    if let Some(name) = name {
        let line = describe(name).ok_or_else(|| CliError::failure(format!("unknown token or category '{name}'")))?;
        println!("{line}");
        return Ok(ExitCode::SUCCESS);
    }
    println!("tokens:");
    for info in tokens::TOKENS {
        println!("  {:<14} {}", info.name, info.pattern);
    }
    println!("legend:");
    for (index, name) in legend::names().enumerate() {
        println!("  {index:>3} {name}");
    }
    Ok(ExitCode::SUCCESS)
}

/// One line describing a legend category, a keyword spelling or a catalog token name.
fn describe(name: &str) -> Option<String> {
    if let Some(category) = legend::from_str(name) {
        return Some(format!("category {name} index {}", legend::index(category)));
    }
    let (kind, id) = match tokens::keyword_from_str(name) {
        Some(id) => ("keyword", id),
        None => ("token", tokens::from_name(name)?),
    };
    let highlight = legend::for_token(id).map_or("by role", legend::as_str);
    Some(format!("{kind} {name} /{}/ highlight {highlight}", tokens::info_for(id).pattern))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("jass-cli-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_clean_file() {
        let path = write_temp("clean.j", "type unit extends handle\n");
        let result = check_file(&path, &Config::default());
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_reports_errors() {
        let path = write_temp("bad.j", "globals\n local integer x\nendglobals\n");
        let result = check_file(&path, &Config::default());
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.message, "1 error found");
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let source = "function F takes integer a, integer a returns nothing\nendfunction\n";
        let path = write_temp("warn.j", source);
        let result = check_file(&path, &Config::default());
        let _ = fs::remove_file(&path);
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_file_reports_syntax_errors() {
        let path = write_temp("syntax.j", "type\n");
        let result = parse_file(&path, &Config::default());
        let _ = fs::remove_file(&path);
        assert!(result.unwrap_err().message.contains("syntax error"));
    }

    #[test]
    fn test_legend() {
        assert_eq!(print_legend(None).unwrap(), ExitCode::SUCCESS);
        assert_eq!(print_legend(Some("jass_if")).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_legend_lookup() {
        assert_eq!(describe("jass_comment").unwrap(), "category jass_comment index 0");
        assert!(describe("endloop").unwrap().starts_with("keyword endloop "));
        assert!(describe("endloop").unwrap().ends_with("highlight jass_endloop"));
        assert!(describe("identifier").unwrap().ends_with("highlight by role"));
        assert!(describe("stringliteral").unwrap().starts_with("token stringliteral "));
        assert!(describe("If").is_none());
    }

    #[test]
    fn test_legend_unknown_name() {
        let err = print_legend(Some("jass_nope")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("jass_nope"));
    }
}
