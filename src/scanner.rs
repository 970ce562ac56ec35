//! Textual extraction of #include directives
//!
//! The scanner is line-oriented and purely textual: a line either contains
//! the `#include` marker or it is ignored, and no preprocessing happens
//! first. This keeps the tool independent of compiler flags and include
//! search paths, at the cost of well-known blind spots:
//!
//! - includes inside `#if 0` / `#ifdef` blocks are still counted,
//! - includes written in comments are still counted,
//! - macro-argument includes (`#include HEADER_NAME`) are skipped because
//!   no literal target can be extracted.
//!
//! Both delimiter conventions are recognized. Angle brackets
//! (`#include <a/b.h>`) are the primary convention for the header trees
//! this tool targets; quoted includes (`#include "a/b.h"`) are tolerated
//! so mixed code bases do not silently lose edges.

use std::path::Path;

use crate::constants::scanner::INCLUDE_MARKER;
use crate::error::IncludeCyclesError;

/// Delimiter convention used by an include directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeForm {
    /// `#include <path>`
    Angle,
    /// `#include "path"`
    Quote,
}

impl std::fmt::Display for IncludeForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncludeForm::Angle => write!(f, "angle"),
            IncludeForm::Quote => write!(f, "quote"),
        }
    }
}

/// One include directive extracted from a header file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// The included path exactly as written between the delimiters
    pub target: String,
    /// Which delimiter convention the directive used
    pub form: IncludeForm,
    /// 1-based line number the directive was found on
    pub line: usize,
}

/// Read a header file and extract all include directives from it.
///
/// The file is read to a string and the handle released before returning,
/// so scanning many files never accumulates open descriptors. A read
/// failure is a hard error carrying the offending path; it is not
/// recovered anywhere up the stack.
pub fn scan_file(path: &Path) -> Result<Vec<IncludeDirective>, IncludeCyclesError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| IncludeCyclesError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(scan_text(&content))
}

/// Extract all include directives from header text.
pub fn scan_text(content: &str) -> Vec<IncludeDirective> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            parse_include_line(line).map(|(target, form)| IncludeDirective {
                target,
                form,
                line: i + 1,
            })
        })
        .collect()
}

/// Extract the include target from a single line, if it carries one.
///
/// Returns `None` for lines without the marker and for lines where no
/// literal target can be extracted (macro argument, unterminated
/// delimiter, empty target). Malformed lines are skipped rather than
/// turned into degenerate edges.
fn parse_include_line(line: &str) -> Option<(String, IncludeForm)> {
    let pos = line.find(INCLUDE_MARKER)?;
    let rest = line[pos + INCLUDE_MARKER.len()..].trim_start();

    let (close, form) = match rest.chars().next()? {
        '<' => ('>', IncludeForm::Angle),
        '"' => ('"', IncludeForm::Quote),
        _ => return None,
    };

    let inner = &rest[1..];
    let end = inner.find(close)?;
    let target = inner[..end].trim();
    if target.is_empty() {
        return None;
    }

    Some((target.to_string(), form))
}

/// Map a file reference to its canonical node identifier.
///
/// This is the single normalization rule shared by scanned file paths and
/// extracted include targets. If the two sides ever normalized differently,
/// a file passed as `include/a/b.h` and referenced as `a/b.h` would become
/// two nodes and cycles through it would be silently missed.
pub fn normalize_header_id(raw: &str, strip_prefix: &str) -> String {
    let slashed = raw.replace('\\', "/");
    let mut id = slashed.as_str();

    while let Some(rest) = id.strip_prefix("./") {
        id = rest;
    }

    if !strip_prefix.is_empty()
        && let Some(rest) = id.strip_prefix(strip_prefix)
    {
        id = rest;
    }

    id.to_string()
}
