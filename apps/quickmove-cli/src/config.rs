use std::path::Path;

use quickmove_input::ControllerConfig;
use quickmove_kernel::config::ensure_positive;
use quickmove_kernel::{CharacterConfig, ConfigError, load_config};
use serde::{Deserialize, Serialize};

/// Fixed physics step and render frame step, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub fixed_dt: f32,
    pub frame_dt: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 0.02,
            frame_dt: 1.0 / 60.0,
        }
    }
}

/// Everything a scenario run needs, loadable from one YAML or JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickConfig {
    pub character: CharacterConfig,
    pub controller: ControllerConfig,
    pub simulation: SimulationConfig,
}

impl QuickConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.character.validate()?;
        self.controller.validate()?;
        ensure_positive("simulation.fixed_dt", self.simulation.fixed_dt)?;
        ensure_positive("simulation.frame_dt", self.simulation.frame_dt)?;
        Ok(())
    }
}
