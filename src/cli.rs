//! Command-line argument parsing for the cycler
//!
//! Supports:
//! - Several texts at once, each treated as its own selection
//! - Stepping forward or backward a number of times
//! - Overriding the configured cycle or config file
//! - JSON output and segmentation dumps

use clap::Parser;
use std::path::PathBuf;

use crate::config::CycleConfig;
use crate::messages::Direction;

/// Cycle text through case styles
#[derive(Parser, Debug)]
#[command(name = "case-cycle", version, about = "Cycle text through case styles")]
pub struct CliArgs {
    /// Texts to convert; each one is a separate selection
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Step backward through the cycle
    #[arg(short = 'b', long)]
    pub backward: bool,

    /// Number of invocations to run
    #[arg(short = 'n', long, value_name = "N", default_value_t = 1)]
    pub steps: usize,

    /// Override the configured cycle (comma-separated style names)
    #[arg(long, value_name = "STYLES", value_delimiter = ',')]
    pub cycle: Option<Vec<String>>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print every step as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the word/delimiter segmentation of each text and exit
    #[arg(long, conflicts_with = "json")]
    pub segments: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One line per step
    Text,
    /// A JSON array of steps
    Json,
    /// Segmentation only, no conversion
    Segments,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub texts: Vec<String>,
    pub direction: Direction,
    pub steps: usize,
    pub cycle_override: Option<Vec<String>>,
    pub config_path: Option<PathBuf>,
    pub output: OutputMode,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let output = if self.segments {
            OutputMode::Segments
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        if self.steps == 0 && output != OutputMode::Segments {
            return Err("--steps must be at least 1".to_string());
        }

        let direction = if self.backward {
            Direction::Backward
        } else {
            Direction::Forward
        };

        Ok(RunConfig {
            texts: self.texts,
            direction,
            steps: self.steps,
            cycle_override: self.cycle,
            config_path: self.config,
            output,
        })
    }
}

impl RunConfig {
    /// Load the cycle configuration, applying the `--cycle` override
    pub fn load_cycle_config(&self) -> CycleConfig {
        let mut config = match &self.config_path {
            Some(path) => CycleConfig::load_from(path),
            None => CycleConfig::load(),
        };
        if let Some(cycle) = &self.cycle_override {
            config.case_cycle = cycle.clone();
        }
        config
    }
}
