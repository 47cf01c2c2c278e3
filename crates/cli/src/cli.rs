use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nutrimix_solvers::mixture::Config;

/// Consecutive stalled steps before `--stop-plateau` ends the run.
pub const PLATEAU_PATIENCE: usize = 10;

#[derive(Debug, Parser)]
#[command(
    name = "nutrimix",
    about = "Finds the cheapest ingredient amounts that meet a recipe's nutrient targets",
    version
)]
pub struct Cli {
    /// Recipe JSON files; several recipes are averaged into one
    #[arg(value_name = "RECIPE", required = true)]
    pub recipes: Vec<PathBuf>,

    /// Solver settings (TOML); command line options take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Weight of cost against nutrient fit
    #[arg(long, value_name = "W")]
    pub cost_weight: Option<f64>,

    /// Maximum number of descent iterations
    #[arg(long, value_name = "N")]
    pub max_iters: Option<usize>,

    /// Keep the raw optimizer result instead of scaling it up to 100%
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_correction: bool,

    /// Log the objective every N iterations (needs -vv)
    #[arg(long, value_name = "N")]
    pub progress_every: Option<usize>,

    /// Stop once the objective improves by less than TOL (relative) for ten steps
    #[arg(long, value_name = "TOL")]
    pub stop_plateau: Option<f64>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Applies the command line overrides to a solver config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(cost_weight) = self.cost_weight {
            config.cost_weight = cost_weight;
        }
        if let Some(max_iters) = self.max_iters {
            config.max_iters = max_iters;
        }
        if self.no_correction {
            config.serving_size_correction = false;
        }
    }

    /// Returns the default log filter for the verbosity level.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "off",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
