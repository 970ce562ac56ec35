//! Configuration constants for include-cycles
//!
//! This module contains the configurable constants used throughout the
//! application.

/// Scanner configuration
pub mod scanner {
    /// Literal marker identifying an include directive in a source line
    pub const INCLUDE_MARKER: &str = "#include";

    /// Root prefix stripped from header identifiers by default
    pub const DEFAULT_STRIP_PREFIX: &str = "include/";

    /// File extensions collected when a directory is scanned
    pub const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx", "inc", "ipp"];
}

/// Progress bar configuration
pub mod progress {
    use std::time::Duration;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
