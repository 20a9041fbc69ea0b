//! Configuration settings for the simulator

use crate::automaton::RuleSet;
use crate::error::SetupError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Probability that a cell starts alive, in [0, 1]
    pub alive_probability: f64,
    /// Rulestring, e.g. "B3/S23"
    pub rule: String,
    /// Optional RNG seed for a reproducible initial population
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Delay between rendered frames in milliseconds
    pub frame_delay_ms: u64,
    /// Draw cells with ANSI colors when the terminal supports them
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                grid_size: 40,
                generations: 200,
                alive_probability: 0.25,
                rule: "B3/S23".to_string(),
                seed: None,
            },
            output: OutputConfig {
                frame_delay_ms: 100,
                color: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate all parameters before any simulation work begins
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.simulation.grid_size == 0 {
            return Err(SetupError::InvalidDimension {
                parameter: "grid size",
                value: 0,
            });
        }

        if self.simulation.generations == 0 {
            return Err(SetupError::InvalidDimension {
                parameter: "generations",
                value: 0,
            });
        }

        let p = self.simulation.alive_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(SetupError::InvalidProbability { value: p });
        }

        self.rule_set()?;
        Ok(())
    }

    /// Parse the configured rulestring
    pub fn rule_set(&self) -> Result<RuleSet, SetupError> {
        RuleSet::parse(&self.simulation.rule)
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(grid_size) = cli_overrides.grid_size {
            self.simulation.grid_size = grid_size;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(probability) = cli_overrides.probability {
            self.simulation.alive_probability = probability;
        }
        if let Some(ref rule) = cli_overrides.rule {
            self.simulation.rule = rule.clone();
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(frame_delay_ms) = cli_overrides.frame_delay_ms {
            self.output.frame_delay_ms = frame_delay_ms;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub grid_size: Option<usize>,
    pub generations: Option<usize>,
    pub probability: Option<f64>,
    pub rule: Option<String>,
    pub seed: Option<u64>,
    pub frame_delay_ms: Option<u64>,
}
