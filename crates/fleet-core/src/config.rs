//! Planner configuration.
//!
//! Typically loaded from a TOML file by the application and passed to the
//! planner.  Every field has a default, so an empty file is valid:
//!
//! ```
//! use fleet_core::PlanConfig;
//!
//! let config = PlanConfig::from_toml_str("edge_duration = 2.5").unwrap();
//! assert_eq!(config.paths_per_agent, 3);
//! assert_eq!(config.edge_duration, 2.5);
//! assert_eq!(config.max_iterations, 100);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

pub const DEFAULT_PATHS_PER_AGENT: usize = 3;
pub const DEFAULT_EDGE_DURATION:   f64   = 1.0;
pub const DEFAULT_MAX_ITERATIONS:  usize = 100;

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// How many candidate paths to enumerate per agent.  Must be ≥ 1.
    pub paths_per_agent: usize,

    /// Time cost of traversing one edge (the "velocity").  Must be finite
    /// and ≥ 0.
    pub edge_duration: f64,

    /// Upper bound on collision-resolution passes.  Must be ≥ 1.
    pub max_iterations: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            paths_per_agent: DEFAULT_PATHS_PER_AGENT,
            edge_duration:   DEFAULT_EDGE_DURATION,
            max_iterations:  DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PlanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: PlanConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_paths_per_agent(mut self, k: usize) -> Self {
        self.paths_per_agent = k;
        self
    }

    pub fn with_edge_duration(mut self, edge_duration: f64) -> Self {
        self.edge_duration = edge_duration;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Reject caller input errors before any planning work starts.
    pub fn validate(&self) -> CoreResult<()> {
        if self.paths_per_agent == 0 {
            return Err(CoreError::InvalidConfiguration(
                "paths_per_agent must be at least 1".into(),
            ));
        }
        if !self.edge_duration.is_finite() || self.edge_duration < 0.0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "edge_duration must be a finite, non-negative number (got {})",
                self.edge_duration
            )));
        }
        if self.max_iterations == 0 {
            return Err(CoreError::InvalidConfiguration(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
