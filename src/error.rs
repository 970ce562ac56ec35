use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum IncludeCyclesError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(include_cycles::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}'")]
    #[diagnostic(
        code(include_cycles::pattern_error),
        help("Check the pattern syntax; `**` matches directories recursively")
    )]
    PatternError {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to walk directory '{path}'")]
    #[diagnostic(
        code(include_cycles::walk_error),
        help("Check directory permissions and that no entry is unreadable")
    )]
    WalkError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(include_cycles::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(include_cycles::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(include_cycles::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(include_cycles::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
