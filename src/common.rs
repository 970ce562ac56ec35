//! Common functionality shared across the CLI surface

use clap::Args;

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "INCLUDE_CYCLES_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "INCLUDE_CYCLES_MAX_CYCLES")]
    pub max_cycles: Option<usize>,

    /// Stop enumerating after this many cycles (unbounded by default)
    ///
    /// Elementary-cycle enumeration is exponential in the worst case; this
    /// is an escape hatch for pathological graphs, not a default.
    #[arg(long, env = "INCLUDE_CYCLES_CYCLE_LIMIT")]
    pub cycle_limit: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::IncludeCyclesError>;
}
