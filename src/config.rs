//! Configuration file support.
//!
//! An optional JSON file supplies the body weight and the default calorie
//! target. Missing fields fall back to the built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::coach::{CoachConfig, DEFAULT_CALORIE_TARGET, DEFAULT_WEIGHT_KG};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Body weight in kg used by the adjuster and the macro calculator.
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    /// Calorie target used when `macros` is run without `--calories`.
    #[serde(default = "default_calorie_target")]
    pub calorie_target: f64,
}

fn default_weight_kg() -> f64 {
    DEFAULT_WEIGHT_KG
}

fn default_calorie_target() -> f64 {
    DEFAULT_CALORIE_TARGET
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weight_kg: default_weight_kg(),
            calorie_target: default_calorie_target(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        info!(path = %path.display(), weight_kg = config.weight_kg, "loaded config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Replace the configured weight when an override is present.
    pub fn with_weight(mut self, weight_kg: Option<f64>) -> Self {
        if let Some(w) = weight_kg {
            self.weight_kg = w;
        }
        self
    }

    /// Body parameters for the calculators.
    pub fn coach(&self) -> CoachConfig {
        CoachConfig::new(self.weight_kg)
    }
}
