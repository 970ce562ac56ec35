//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::IncludeCyclesError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, IncludeCyclesError> {
        let mut output = String::new();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="include-cycles" tests="1" failures="{}">"#,
            if detector.has_cycles() { "1" } else { "0" }
        )?;
        writeln!(
            output,
            r#"  <testsuite name="include-graph" tests="1" failures="{}">"#,
            if detector.has_cycles() { "1" } else { "0" }
        )?;

        if detector.has_cycles() {
            writeln!(
                output,
                r#"    <testcase name="check-include-cycles" classname="include-cycles">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="Include cycles detected">"#
            )?;
            writeln!(output, "Found {} include cycles:", detector.cycle_count())?;

            for (i, cycle) in detector.cycles().iter().enumerate() {
                writeln!(output, "\nCycle {}: {}", i + 1, cycle.chain())?;
            }

            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        } else {
            writeln!(
                output,
                r#"    <testcase name="check-include-cycles" classname="include-cycles" />"#
            )?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
