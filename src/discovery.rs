//! Input discovery
//!
//! Expands the positional command-line arguments into the ordered list of
//! files to scan. A plain file path passes through untouched; a directory
//! is walked recursively collecting files with a recognized header
//! extension; an argument containing glob metacharacters is expanded here
//! so the tool behaves the same on shells that do not expand patterns.
//!
//! Arguments keep their given order; entries produced by a directory walk
//! or a glob expansion are sorted so repeated runs are deterministic.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::scanner::HEADER_EXTENSIONS;
use crate::error::IncludeCyclesError;

/// Expand files, directories and glob patterns into a concrete file list.
///
/// Missing plain file paths are deliberately kept in the list: the scanner
/// surfaces the access error with the offending path, which is the error
/// the user needs to see.
pub fn expand_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, IncludeCyclesError> {
    let mut files = Vec::new();

    for path in paths {
        let display = path.to_string_lossy();
        if display.contains(['*', '?', '[']) {
            expand_pattern(&display, &mut files)?;
        } else if path.is_dir() {
            collect_headers(path, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

fn expand_pattern(pattern: &str, files: &mut Vec<PathBuf>) -> Result<(), IncludeCyclesError> {
    let paths = glob::glob(pattern).map_err(|e| IncludeCyclesError::PatternError {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let mut matches: Vec<PathBuf> = paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    matches.sort();
    files.extend(matches);

    Ok(())
}

fn collect_headers(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IncludeCyclesError> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| IncludeCyclesError::WalkError {
            path: dir.to_path_buf(),
            source: e,
        })?;

        if entry.file_type().is_file() && is_header(entry.path()) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    files.extend(found);

    Ok(())
}

fn is_header(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_plain_files_pass_through_in_order() {
        let paths = vec![PathBuf::from("b.h"), PathBuf::from("a.h")];
        let files = expand_inputs(&paths).unwrap();
        assert_eq!(files, paths);
    }

    #[test]
    fn test_missing_file_is_kept_for_the_scanner_to_report() {
        let paths = vec![PathBuf::from("/nonexistent/missing.h")];
        let files = expand_inputs(&paths).unwrap();
        assert_eq!(files, paths);
    }

    #[test]
    fn test_directory_walk_collects_headers_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("grid")).unwrap();
        fs::write(root.join("grid/tria.h"), "").unwrap();
        fs::write(root.join("base.hpp"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join("impl.cc"), "").unwrap();

        let files = expand_inputs(&[root.to_path_buf()]).unwrap();

        assert_eq!(
            files,
            vec![root.join("base.hpp"), root.join("grid/tria.h")]
        );
    }

    #[test]
    fn test_glob_pattern_expands_to_matching_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("a")).unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("a/x.h"), "").unwrap();
        fs::write(root.join("b/y.h"), "").unwrap();
        fs::write(root.join("b/z.txt"), "").unwrap();

        let pattern = root.join("*/*.h");
        let files = expand_inputs(&[pattern]).unwrap();

        assert_eq!(files, vec![root.join("a/x.h"), root.join("b/y.h")]);
    }

    #[test]
    fn test_invalid_glob_pattern_is_an_error() {
        let result = expand_inputs(&[PathBuf::from("include/[")]);
        assert!(matches!(
            result,
            Err(IncludeCyclesError::PatternError { .. })
        ));
    }

    #[test]
    fn test_is_header_extension_filter() {
        assert!(is_header(Path::new("a.h")));
        assert!(is_header(Path::new("a.hpp")));
        assert!(is_header(Path::new("deep/path/a.hxx")));
        assert!(!is_header(Path::new("a.cc")));
        assert!(!is_header(Path::new("a")));
    }
}
