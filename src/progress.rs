use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Stderr progress reporting for interactive runs
///
/// Everything here writes to stderr; stdout stays reserved for the report
/// so that a silent success really is silent.
pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_scan(&mut self, total_files: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Scanning {} header file{} for include directives...",
            style("🔍").cyan(),
            style(total_files).yellow().bold(),
            if total_files == 1 { "" } else { "s" }
        );
        let spinner = self.create_spinner("Reading headers...");
        self.current_bar = Some(spinner);
    }

    pub fn scanning_file(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Scanning: {}...", path.display()));
        }
    }

    pub fn finish_scan(&mut self, headers: usize, includes: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "{} Graph built: {} header{}, {} include edge{}",
            style("✓").green(),
            style(headers).yellow().bold(),
            if headers == 1 { "" } else { "s" },
            style(includes).yellow().bold(),
            if includes == 1 { "" } else { "s" }
        );
    }

    pub fn start_cycle_detection(&mut self) {
        eprintln!("\n{} Detecting include cycles...", style("🔄").yellow());
    }

    pub fn finish_cycle_detection(&self, cycles_found: usize) {
        if cycles_found == 0 {
            eprintln!("{} No include cycles detected!", style("✓").green().bold());
        } else {
            eprintln!(
                "{} Found {} cycle{}",
                style("⚠").yellow().bold(),
                style(cycles_found).red().bold(),
                if cycles_found == 1 { "" } else { "s" }
            );
        }
    }
}
