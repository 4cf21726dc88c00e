//! CLI module for the JASS tooling
//!
//! This module provides the `jass` command-line interface.
//!
//! ## Commands
//!
//! - `check <file>` - Run the full pipeline and report diagnostics (default action)
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the syntax tree and syntax errors
//! - `highlight <file>` - Print classification events
//! - `symbols <file>` - Print document symbols and folding ranges
//! - `legend [name]` - Print the token catalog and highlight legend, or one entry
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::Config;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::error::Error> for CliError {
    fn from(err: crate::error::Error) -> Self {
        Self::failure(format!("Error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexer, parser and checker for JASS scripts
#[derive(Parser, Debug)]
#[command(name = "jass")]
#[command(version = VERSION)]
#[command(about = "Lexer, parser and checker for JASS scripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Stop at the first syntax error instead of recovering
    #[arg(long = "no-recovery", global = true)]
    pub no_recovery: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full pipeline and report diagnostics
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the token stream
    Lex {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Include whitespace and comment tokens
        #[arg(long)]
        trivia: bool,
    },

    /// Print the syntax tree and syntax errors
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print semantic highlighting events
    Highlight {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print document symbols and folding ranges
    Symbols {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the token catalog and highlight legend, or look up one entry
    Legend {
        /// Category name (`jass_if`), keyword spelling or token name
        name: Option<String>,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config::default().with_recovery(!self.no_recovery)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();

    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file, false);
    }

    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file, &config),
        Some(Command::Lex { file, trivia }) => commands::lex_file(&file, trivia),
        Some(Command::Parse { file }) => commands::parse_file(&file, &config),
        Some(Command::Highlight { file }) => commands::highlight_file(&file, &config),
        Some(Command::Symbols { file }) => commands::symbols_file(&file, &config),
        Some(Command::Legend { name }) => commands::print_legend(name.as_deref()),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file, &config)
            } else {
                // No command and no file - show help
                Err(CliError::failure("Usage: jass [COMMAND] <FILE>. Try 'jass --help'."))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["jass", "war3map.j"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("war3map.j")));
        assert!(cli.config().parser.recovery_enabled);
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["jass", "check", "common.j"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { .. })));
    }

    #[test]
    fn test_cli_parse_lex_with_trivia() {
        let cli = Cli::try_parse_from(["jass", "lex", "common.j", "--trivia"]).unwrap();
        if let Some(Command::Lex { trivia, .. }) = cli.command {
            assert!(trivia);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_no_recovery_is_global() {
        let cli = Cli::try_parse_from(["jass", "parse", "a.j", "--no-recovery"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Parse { .. })));
        assert!(!cli.config().parser.recovery_enabled);
    }

    #[test]
    fn test_cli_parse_other_commands() {
        let cli = Cli::try_parse_from(["jass", "highlight", "a.j"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Highlight { .. })));
        let cli = Cli::try_parse_from(["jass", "symbols", "a.j"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Symbols { .. })));
        let cli = Cli::try_parse_from(["jass", "legend"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Legend { name: None })));
        let cli = Cli::try_parse_from(["jass", "legend", "jass_if"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Legend { name: Some(ref n) }) if n == "jass_if"));
    }

    #[test]
    fn test_cli_parse_debug_lex_flag() {
        let cli = Cli::try_parse_from(["jass", "--lex", "a.j"]).unwrap();
        assert!(cli.lex_file.is_some());
        assert!(Cli::try_parse_from(["jass", "--lex", "a.j", "b.j"]).is_err());
    }

    #[test]
    fn test_no_file_is_an_error() {
        let cli = Cli::try_parse_from(["jass"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let cli = Cli::try_parse_from(["jass", "check", "no/such/file.j"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert!(err.message.contains("no/such/file.j"));
    }
}
