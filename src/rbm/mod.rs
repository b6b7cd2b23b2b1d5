//! Restricted Boltzmann Machine module
//!
//! - `engine`: the [`Rbm`] itself (training, inference, daydreaming)
//! - `weights`: augmented weight matrix with bias row/column
//! - `cd`: a single Contrastive Divergence step as a pure function
//! - `sampling`: logistic activation, bias handling, stochastic binarization
//! - `config`: model and training configuration

mod cd;
mod config;
mod engine;
pub mod sampling;
mod weights;

pub use cd::{contrastive_divergence, ContrastiveStep};
pub use config::{RbmConfig, TrainingConfig, DEFAULT_SEED};
pub use engine::{Rbm, TrainingHistory};
pub use weights::WeightMatrix;
