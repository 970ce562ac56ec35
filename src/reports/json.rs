//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::IncludeCyclesError;

#[derive(Serialize)]
struct JsonReport {
    has_cycles: bool,
    cycle_count: usize,
    truncated: bool,
    cycles: Vec<JsonCycle>,
}

#[derive(Serialize)]
struct JsonCycle {
    headers: Vec<String>,
}

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, IncludeCyclesError> {
        let mut cycles: Vec<JsonCycle> = detector
            .cycles()
            .iter()
            .map(|cycle| JsonCycle {
                headers: cycle.headers().to_vec(),
            })
            .collect();

        // Sort cycles by their header sequence for consistent output
        cycles.sort_by(|a, b| a.headers.cmp(&b.headers));

        let report = JsonReport {
            has_cycles: detector.has_cycles(),
            cycle_count: detector.cycle_count(),
            truncated: detector.truncated(),
            cycles,
        };

        serde_json::to_string_pretty(&report).map_err(IncludeCyclesError::Json)
    }
}
