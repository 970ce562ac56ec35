use std::path::PathBuf;

use clap::Parser;

use crate::common::{CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "include-cycles",
    about = "Detect #include cycles in C and C++ header trees",
    long_about = "include-cycles scans header files for textual #include directives, builds a \
                  directed include graph, and enumerates every elementary cycle in it. The scan \
                  is a heuristic, not a preprocessor: conditional compilation and macro-argument \
                  includes are not understood. Exits with status 1 when any cycle is found.",
    version
)]
pub struct Cli {
    /// Header files, directories, or glob patterns to scan
    ///
    /// Directories are walked recursively collecting files with a header
    /// extension; glob patterns are expanded for shells that do not.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Root prefix stripped from header identifiers
    ///
    /// A file scanned as `include/a/b.h` and an include written as
    /// `#include <a/b.h>` must map to the same graph node; stripping this
    /// prefix is the normalization rule that joins them.
    #[arg(
        long,
        value_name = "PREFIX",
        default_value = crate::constants::scanner::DEFAULT_STRIP_PREFIX,
        env = "INCLUDE_CYCLES_STRIP_PREFIX"
    )]
    pub strip_prefix: String,

    #[command(flatten)]
    pub format: FormatArgs,

    #[command(flatten)]
    pub cycle_display: CycleDisplayArgs,

    /// Suppress progress output on stderr
    #[arg(short, long, env = "INCLUDE_CYCLES_QUIET")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::try_parse_from(["include-cycles", "a.h", "b.h"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a.h"), PathBuf::from("b.h")]);
        assert_eq!(cli.strip_prefix, "include/");
        assert_eq!(cli.format.format, OutputFormat::Human);
        assert!(cli.cycle_display.max_cycles.is_none());
        assert!(cli.cycle_display.cycle_limit.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_requires_at_least_one_path() {
        assert!(Cli::try_parse_from(["include-cycles"]).is_err());
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "include-cycles",
            "--strip-prefix",
            "headers/",
            "--format",
            "json",
            "--max-cycles",
            "5",
            "--cycle-limit",
            "100",
            "--quiet",
            "headers/a.h",
        ])
        .unwrap();

        assert_eq!(cli.strip_prefix, "headers/");
        assert_eq!(cli.format.format, OutputFormat::Json);
        assert_eq!(cli.cycle_display.max_cycles, Some(5));
        assert_eq!(cli.cycle_display.cycle_limit, Some(100));
        assert!(cli.quiet);
    }
}
