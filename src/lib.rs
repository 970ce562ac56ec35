//! # include-cycles - Detect #include Cycles in Header Trees
//!
//! include-cycles is a build-hygiene tool that finds circular `#include`
//! chains in C and C++ header sets. It scans each input file for textual
//! include directives, builds a directed graph of "includes" relationships,
//! and enumerates every elementary cycle in that graph.
//!
//! With include guards in place a cycle is not a correctness bug, but it is
//! inefficient, usually unnecessary, and forbidden outright for module
//! partitions - so CI setups typically want to fail when one appears.
//!
//! ## Main Components
//!
//! - **Scanner**: Extracts include directives from header text
//! - **Graph**: Builds the include graph representation
//! - **Detector**: Enumerates elementary cycles (Tarjan SCC + rooted DFS)
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## A Heuristic, Not a Preprocessor
//!
//! The scanner is purely textual. Conditional compilation (`#if`/`#ifdef`),
//! macro-argument includes and comments are not understood: every include
//! directive found in the text becomes an edge, and an include disabled by
//! an `#if 0` block is still counted. See [`scanner`] for details.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use include_cycles::detector::CycleDetector;
//! use include_cycles::graph::IncludeGraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Scan the headers and build the include graph
//! let mut builder = IncludeGraphBuilder::new("include/");
//! builder.add_file(Path::new("include/geometry/mesh.h"))?;
//! builder.add_file(Path::new("include/geometry/cell.h"))?;
//!
//! // Step 2: Enumerate elementary cycles
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(builder.graph());
//!
//! // Step 3: Inspect the results
//! if detector.has_cycles() {
//!     for cycle in detector.cycles() {
//!         println!("{}", cycle.chain());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The exit status of the CLI is the machine contract: `0` when the include
//! graph is acyclic, `1` when at least one cycle was found.

// Private modules
mod constants;
mod progress;

// Public modules
pub mod cli;
pub mod common;
pub mod config;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod executor;
pub mod graph;
pub mod reports;
pub mod scanner;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;
    use miette::IntoDiagnostic;

    use crate::cli::Cli;
    use crate::config::CheckIncludesConfig;
    use crate::executor::CheckExecutor;

    let cli = Cli::parse();
    let config = CheckIncludesConfig::from_cli(cli).into_diagnostic()?;

    let found_cycles = CheckExecutor::execute(config)?;

    // The non-zero status is the only signal build tooling may rely on.
    if found_cycles {
        std::process::exit(1);
    }

    Ok(())
}
