use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use crucible_paths::{PolicyError, RunPolicy};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Finds the least heat loss route for crucibles across a city grid."
)]
pub struct Cli {
    /// Grid file: one line per row, one digit (0-9) per block
    pub input: PathBuf,

    /// Movement rules to solve for
    #[arg(short, long, value_enum, default_value_t = PolicyChoice::Both)]
    pub policy: PolicyChoice,

    /// Straight blocks required before turning or stopping (custom policy)
    #[arg(long, default_value_t = 0)]
    pub min_run: u32,

    /// Most straight blocks allowed (custom policy); unlimited if omitted
    #[arg(long)]
    pub max_run: Option<u32>,

    /// Draw the route over the grid
    #[arg(long)]
    pub route: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyChoice {
    /// At most 3 straight blocks
    Crucible,
    /// 4 to 10 straight blocks
    Ultra,
    /// Crucible and ultra
    Both,
    /// Bounds from --min-run and --max-run
    Custom,
}

impl Cli {
    /// The named policies selected on the command line, in output order.
    pub fn policies(&self) -> Result<Vec<(&'static str, RunPolicy)>, PolicyError> {
        let policies = match self.policy {
            PolicyChoice::Crucible => vec![("crucible", RunPolicy::CRUCIBLE)],
            PolicyChoice::Ultra => vec![("ultra", RunPolicy::ULTRA_CRUCIBLE)],
            PolicyChoice::Both => vec![
                ("crucible", RunPolicy::CRUCIBLE),
                ("ultra", RunPolicy::ULTRA_CRUCIBLE),
            ],
            PolicyChoice::Custom => vec![(
                "custom",
                RunPolicy::new(self.min_run, self.max_run.unwrap_or(u32::MAX))?,
            )],
        };
        Ok(policies)
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
