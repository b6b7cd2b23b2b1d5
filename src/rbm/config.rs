//! Model and training configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Seed used when none is given, so repeated runs start from the same weights
pub const DEFAULT_SEED: u64 = 1234;

/// Architecture and random source of an RBM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RbmConfig {
    /// Number of visible units (features)
    pub num_visible: usize,
    /// Number of hidden units (latent factors)
    pub num_hidden: usize,
    /// Seed for weight initialization and sampling
    pub seed: u64,
}

impl Default for RbmConfig {
    fn default() -> Self {
        Self {
            num_visible: 6,
            num_hidden: 2,
            seed: DEFAULT_SEED,
        }
    }
}

impl RbmConfig {
    pub fn new(num_visible: usize, num_hidden: usize) -> Self {
        Self {
            num_visible,
            num_hidden,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_visible == 0 {
            return Err(Error::InvalidDimension(
                "num_visible must be positive".to_string(),
            ));
        }
        if self.num_hidden == 0 {
            return Err(Error::InvalidDimension(
                "num_hidden must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contrastive Divergence training parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of full passes over the data
    pub max_epochs: usize,
    /// Step size for weight updates
    pub learning_rate: f64,
    /// Log the reconstruction error at info level every this many epochs
    pub log_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_epochs: 1000,
            learning_rate: 0.1,
            log_interval: 100,
        }
    }
}

impl TrainingConfig {
    pub fn new(max_epochs: usize, learning_rate: f64) -> Self {
        Self {
            max_epochs,
            learning_rate,
            ..Default::default()
        }
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_epochs == 0 {
            return Err(Error::InvalidDimension(
                "max_epochs must be positive".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Whether `epoch` (0-based) should be reported at info level
    pub(crate) fn should_log(&self, epoch: usize) -> bool {
        let last = epoch + 1 == self.max_epochs;
        last || (self.log_interval > 0 && epoch % self.log_interval == 0)
    }
}
