//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::IncludeCyclesError;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, IncludeCyclesError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            writeln!(
                output,
                "::notice title=Include Check::No include cycles detected! ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Include Cycles::Found {} include cycle{}",
            detector.cycle_count(),
            if detector.cycle_count() == 1 { "" } else { "s" }
        )?;

        for (i, cycle) in detector.cycles().iter().enumerate() {
            writeln!(
                output,
                "::warning title=Cycle {}::{}",
                i + 1,
                cycle.chain()
            )?;
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break a cycle, remove at least one include from \
             its chain; headers appearing in many chains are the best candidates."
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{CycleDetector, IncludeCycle};

    #[test]
    fn test_github_report_no_cycles() {
        let detector = CycleDetector::new();
        let generator = GitHubReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        assert!(report.contains("::notice title=Include Check::"));
        assert!(!report.contains("::error"));
    }

    #[test]
    fn test_github_report_with_cycles() {
        let mut detector = CycleDetector::new();
        detector.add_cycle(IncludeCycle::new(vec![
            "foo.h".to_string(),
            "bar.h".to_string(),
        ]));
        let generator = GitHubReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        assert!(report.contains("::error title=Include Cycles::Found 1 include cycle"));
        assert!(report.contains("::warning title=Cycle 1::foo.h → bar.h → foo.h"));
    }
}
