//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – time step, force mode and body limit
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   timestep: 0.00274       # years per tick (one day)
//!   force_mode: pairwise    # or "symmetric"
//!   max_bodies: 30
//!
//! bodies:                   # omit to get the default solar system
//!   - name: Sun
//!     x: [ 500.0, 365.0 ]   # display units, 15 per AU
//!     v: [   0.0,   0.0 ]   # AU per year
//!     m: 1.0                # solar masses
//!     color: yellow
//!     size: 6.0
//!   - name: Earth
//!     x: [ 515.0, 365.0 ]
//!     v: [   0.0, 6.283 ]
//!     m: 3.003e-6
//!     color: blue
//!     size: 3.0
//! ```
//!
//! The scenario builder maps this configuration into runtime bodies, which
//! validates masses and colors.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::forces::ForceMode;
use crate::simulation::states::MAX_BODIES;
use crate::simulation::units::ONE_DAY;

/// Global numerical parameters for a scenario; every field is optional
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    #[serde(default = "default_timestep")]
    pub timestep: f64, // simulated years per tick
    #[serde(default)]
    pub force_mode: ForceMode, // pairwise (reference) or symmetric (fast path)
    #[serde(default = "default_max_bodies")]
    pub max_bodies: usize, // extra bodies are dropped on load
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            timestep: default_timestep(),
            force_mode: ForceMode::default(),
            max_bodies: default_max_bodies(),
        }
    }
}

fn default_timestep() -> f64 {
    ONE_DAY
}

fn default_max_bodies() -> usize {
    MAX_BODIES
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2],   // Initial position in display units
    pub v: [f64; 2],   // Initial velocity in AU per year
    pub m: f64,        // Mass relative to the Sun
    pub color: String, // Any CSS color name, case-insensitive
    pub size: f64,     // Display radius
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Option<Vec<BodyConfig>>, // None -> default solar system
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
