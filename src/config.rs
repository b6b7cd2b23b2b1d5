//! Experiment configuration loaded from JSON
//!
//! ```json
//! {
//!   "rbm": { "num_hidden": 2, "seed": 1234 },
//!   "training": { "max_epochs": 1000, "learning_rate": 0.1 },
//!   "profile": { "neutral_band": 0.1 }
//! }
//! ```
//!
//! Missing sections and fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile::ProfileConfig;
use crate::rbm::{RbmConfig, TrainingConfig};

/// Everything needed to train and report on one person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub rbm: RbmConfig,
    pub training: TrainingConfig,
    pub profile: ProfileConfig,
}

impl ExperimentConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.rbm.validate()?;
        self.training.validate()
    }
}
