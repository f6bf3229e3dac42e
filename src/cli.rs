//! CLI module for the minic compiler
//!
//! ## Usage
//!
//! - `minic <file>` - Parse a source file and print the AST
//! - `minic --lex <file>` - Tokenize only (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<T>` instead of calling `process::exit`;
//! only the top-level `run()` function handles errors and exits. Syntax
//! errors are rendered through miette with the offending source attached.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use miette::{NamedSource, Report};
use thiserror::Error;

use minic_syntax::diagnostics::CompileError;
use minic_syntax::lexer;

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
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The minic compiler frontend
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(version = VERSION)]
#[command(about = "A compiler frontend for a small subset of C", long_about = None)]
pub struct Cli {
    /// Source file to parse (prints the AST)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,
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
        Ok(()) => {}
        Err(error) => {
            eprintln!("{}", error.message);
            process::exit(error.exit_code.0);
        }
    }
}

fn execute(cli: Cli) -> CliResult<()> {
    if let Some(path) = cli.lex_file {
        return lex_command(&path);
    }
    match cli.file {
        Some(path) => parse_command(&path),
        None => Err(CliError::failure("no input file (see --help)")),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn parse_command(path: &Path) -> CliResult<()> {
    let source = read_source(path)?;
    match minic_syntax::parser::parse(&lex_source(path, &source)?) {
        Ok(ast) => {
            tracing::debug!(statements = ast.body.len(), "parsed program");
            println!("{ast:#?}");
            Ok(())
        }
        Err(error) => Err(render_error(path, &source, error)),
    }
}

fn lex_command(path: &Path) -> CliResult<()> {
    let source = read_source(path)?;
    for token in lex_source(path, &source)? {
        println!("{:?} @ {}..{}", token.kind, token.span.start, token.span.end);
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn read_source(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|error| CliError::failure(format!("cannot read {}: {error}", path.display())))
}

fn lex_source(path: &Path, source: &str) -> CliResult<Vec<lexer::Token>> {
    lexer::lex(source).map_err(|error| render_error(path, source, error))
}

/// Attach the source file to a syntax error and render it with miette.
fn render_error(path: &Path, source: &str, error: CompileError) -> CliError {
    let report = Report::new(error)
        .with_source_code(NamedSource::new(path.to_string_lossy(), source.to_string()));
    CliError::failure(format!("{report:?}"))
}
