//! Check execution pipeline
//!
//! Wires discovery, scanning, graph construction, cycle detection and
//! report generation into one synchronous run. Files are read one at a
//! time, in input order; there is no parallelism anywhere in the
//! pipeline.

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckIncludesConfig;
use crate::detector::CycleDetector;
use crate::discovery;
use crate::graph::IncludeGraphBuilder;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct CheckExecutor;

impl CheckExecutor {
    /// Run the full scan → graph → detect → report pipeline.
    ///
    /// Returns whether at least one cycle was found so the caller can
    /// translate the outcome into the process exit status.
    pub fn execute(config: CheckIncludesConfig) -> Result<bool> {
        // Progress reporting only when someone is watching
        let mut progress = if !config.quiet && console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let files = discovery::expand_inputs(&config.paths)
            .into_diagnostic()
            .wrap_err("Failed to expand input paths")?;

        if files.is_empty() {
            eprintln!("{} No header files found to scan", style("ℹ").blue());
            return Ok(false);
        }

        if let Some(p) = progress.as_mut() {
            p.start_scan(files.len());
        }

        let mut builder = IncludeGraphBuilder::new(&config.strip_prefix);
        for file in &files {
            if let Some(p) = progress.as_ref() {
                p.scanning_file(file);
            }
            builder
                .add_file(file)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to scan '{}'", file.display()))?;
        }

        if let Some(p) = progress.as_mut() {
            p.finish_scan(builder.graph().node_count(), builder.graph().edge_count());
            p.start_cycle_detection();
        }

        let mut detector = CycleDetector::with_limit(config.cycle_limit);
        detector.detect_cycles(builder.graph());

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_cycles).generate_report(&detector)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&detector),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(&detector),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(&detector),
        }
        .into_diagnostic()
        .wrap_err("Failed to generate report")?;

        print!("{report}");

        Ok(detector.has_cycles())
    }
}
