//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::IncludeCyclesError;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, IncludeCyclesError> {
        let mut output = String::new();

        // Success leaves stdout empty; the confirmation line lives on
        // stderr with the rest of the progress output.
        if !detector.has_cycles() {
            return Ok(output);
        }

        let total_cycles = detector.cycle_count();
        write!(
            output,
            "\n{} Include cycles detected! Found {} {}:\n\n",
            style("❌").red().bold(),
            style(total_cycles).red().bold(),
            if total_cycles == 1 { "cycle" } else { "cycles" }
        )?;

        let cycles_to_show = match self.max_cycles {
            Some(limit) => detector.cycles().iter().take(limit).enumerate().collect::<Vec<_>>(),
            None => detector.cycles().iter().enumerate().collect::<Vec<_>>(),
        };

        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);

        for (i, cycle) in cycles_to_show {
            writeln!(
                output,
                "{} Cycle #{}: {}",
                style("🔄").yellow(),
                i + 1,
                style(cycle.chain()).bold()
            )?;
        }

        if !showing_all {
            writeln!(
                output,
                "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(
                    self.max_cycles
                        .expect("max_cycles must be Some when !showing_all")
                )
                .yellow(),
                style(total_cycles).yellow()
            )?;
        }

        if detector.truncated() {
            writeln!(
                output,
                "\n{} Enumeration stopped at the configured --cycle-limit; more cycles may exist.",
                style("⚠").yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} To break a cycle, remove at least one include from its chain.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Headers appearing in many chains are the best candidates to untangle first.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
