//! Restricted Boltzmann Machine engine
//!
//! A two-layer network of binary stochastic units. Visible units hold the
//! observed features, hidden units the latent factors, and both layers carry
//! a bias unit stored as row/column 0 of the [`WeightMatrix`].
//!
//! The engine owns its random source. Every stochastic operation takes
//! `&mut self`, so training and inference on one engine are serialized by
//! the borrow checker; an engine shared between threads must sit behind a
//! `Mutex` held for the whole of [`Rbm::train`].

use log::{debug, info, warn};
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::cd::contrastive_divergence;
use super::config::{RbmConfig, TrainingConfig, DEFAULT_SEED};
use super::sampling::{
    all_finite, binarize, binarize_vector, logistic, logistic_matrix, with_bias_column,
    without_bias_column,
};
use super::weights::WeightMatrix;
use crate::error::{Error, Result};

/// Per-epoch reconstruction errors from a training run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    errors: Vec<f64>,
}

impl TrainingHistory {
    fn with_capacity(epochs: usize) -> Self {
        Self {
            errors: Vec::with_capacity(epochs),
        }
    }

    /// Reconstruction error of every completed epoch, in order
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Number of completed epochs
    pub fn epochs(&self) -> usize {
        self.errors.len()
    }

    /// Reconstruction error of the first epoch
    pub fn initial_error(&self) -> Option<f64> {
        self.errors.first().copied()
    }

    /// Reconstruction error of the last epoch
    pub fn final_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    /// Drop in error from the first to the last epoch
    pub fn improvement(&self) -> Option<f64> {
        Some(self.initial_error()? - self.final_error()?)
    }
}

/// Restricted Boltzmann Machine with an owned random source
#[derive(Debug, Clone)]
pub struct Rbm<R = StdRng> {
    num_visible: usize,
    num_hidden: usize,
    weights: WeightMatrix,
    rng: R,
}

impl Rbm<StdRng> {
    /// Create an RBM seeded with [`DEFAULT_SEED`]
    ///
    /// # Arguments
    /// * `num_visible` - Number of visible (feature) units
    /// * `num_hidden` - Number of hidden (latent) units
    pub fn new(num_visible: usize, num_hidden: usize) -> Result<Self> {
        Self::with_seed(num_visible, num_hidden, DEFAULT_SEED)
    }

    /// Create an RBM whose weights and samples derive from `seed`
    pub fn with_seed(num_visible: usize, num_hidden: usize, seed: u64) -> Result<Self> {
        Self::with_rng(num_visible, num_hidden, StdRng::seed_from_u64(seed))
    }

    /// Create an RBM from a validated [`RbmConfig`]
    pub fn from_config(config: &RbmConfig) -> Result<Self> {
        config.validate()?;
        Self::with_seed(config.num_visible, config.num_hidden, config.seed)
    }
}

impl<R: Rng> Rbm<R> {
    /// Create an RBM drawing all randomness from `rng`
    ///
    /// Initial weights are drawn first; the same source then serves every
    /// later sampling step.
    pub fn with_rng(num_visible: usize, num_hidden: usize, mut rng: R) -> Result<Self> {
        let weights = WeightMatrix::initialize(num_visible, num_hidden, &mut rng)?;

        Ok(Self {
            num_visible,
            num_hidden,
            weights,
            rng,
        })
    }

    /// Number of visible units
    pub fn num_visible(&self) -> usize {
        self.num_visible
    }

    /// Number of hidden units
    pub fn num_hidden(&self) -> usize {
        self.num_hidden
    }

    /// Learned weights, bias row and column included
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Train with Contrastive Divergence (CD-1)
    ///
    /// Training is cumulative: repeated calls keep updating the same weights.
    /// If an update would overflow, training stops with
    /// [`Error::NumericInstability`] and that epoch's update is discarded.
    ///
    /// # Arguments
    /// * `data` - Binary training data (n_examples x num_visible)
    /// * `config` - Epoch count, learning rate and logging cadence
    pub fn train(&mut self, data: &Array2<f64>, config: &TrainingConfig) -> Result<TrainingHistory> {
        check_columns("train", self.num_visible, data)?;
        config.validate()?;
        if data.nrows() == 0 {
            return Err(Error::InvalidDimension(
                "training data has no examples".to_string(),
            ));
        }
        if !all_finite(data) {
            return Err(Error::NumericInstability(
                "training data contains non-finite values".to_string(),
            ));
        }

        let data = with_bias_column(data);
        let mut history = TrainingHistory::with_capacity(config.max_epochs);

        info!(
            "Training RBM ({} visible, {} hidden) with CD-1 for {} epochs on {} examples",
            self.num_visible,
            self.num_hidden,
            config.max_epochs,
            data.nrows()
        );

        for epoch in 0..config.max_epochs {
            let step = contrastive_divergence(self.weights.as_array(), &data, &mut self.rng);
            let delta = step.gradient * config.learning_rate;

            if !step.reconstruction_error.is_finite() || !self.weights.try_update(&delta) {
                warn!("Epoch {}: weight update is not finite, stopping", epoch);
                return Err(Error::NumericInstability(format!(
                    "weight update at epoch {} is not finite (learning rate {})",
                    epoch, config.learning_rate
                )));
            }

            debug!("Epoch {}: error is {}", epoch, step.reconstruction_error);
            if config.should_log(epoch) {
                info!(
                    "Epoch {}/{}: reconstruction_error = {:.6}",
                    epoch + 1,
                    config.max_epochs,
                    step.reconstruction_error
                );
            }

            history.errors.push(step.reconstruction_error);
        }

        Ok(history)
    }

    /// Train with an explicit epoch count and learning rate
    pub fn train_with(
        &mut self,
        data: &Array2<f64>,
        max_epochs: usize,
        learning_rate: f64,
    ) -> Result<TrainingHistory> {
        self.train(data, &TrainingConfig::new(max_epochs, learning_rate))
    }

    /// Sample hidden states for each row of visible data
    ///
    /// The hidden bias column is sampled like any other unit and then
    /// dropped, so the output is `n_examples x num_hidden`.
    pub fn run_visible(&mut self, data: &Array2<f64>) -> Result<Array2<f64>> {
        check_columns("run_visible", self.num_visible, data)?;

        let data = with_bias_column(data);
        let hidden_probs = logistic_matrix(&data.dot(self.weights.as_array()));
        let hidden_states = binarize(&hidden_probs, &mut self.rng);

        Ok(without_bias_column(&hidden_states))
    }

    /// Sample visible states for each row of hidden data
    pub fn run_hidden(&mut self, data: &Array2<f64>) -> Result<Array2<f64>> {
        check_columns("run_hidden", self.num_hidden, data)?;

        let data = with_bias_column(data);
        let visible_probs = logistic_matrix(&data.dot(&self.weights.as_array().t()));
        let visible_states = binarize(&visible_probs, &mut self.rng);

        Ok(without_bias_column(&visible_states))
    }

    /// Generate samples from a single alternating Gibbs chain
    ///
    /// Row 0 holds the chain's starting point: raw U(0,1) draws, not
    /// binarized. Every later row is a binary visible state sampled from the
    /// row before it, so successive rows are correlated.
    pub fn daydream(&mut self, num_samples: usize) -> Result<Array2<f64>> {
        if num_samples == 0 {
            return Err(Error::InvalidDimension(
                "num_samples must be at least 1".to_string(),
            ));
        }

        let weights = self.weights.as_array();
        let mut samples = Array2::ones((num_samples, self.num_visible + 1));

        for unit in samples.row_mut(0).iter_mut().skip(1) {
            *unit = self.rng.gen::<f64>();
        }

        for i in 1..num_samples {
            let visible = samples.row(i - 1).to_owned();

            let hidden_probs = visible.dot(weights).mapv(logistic);
            let mut hidden_states = binarize_vector(&hidden_probs, &mut self.rng);
            hidden_states[0] = 1.0;

            let visible_probs = weights.dot(&hidden_states).mapv(logistic);
            let visible_states = binarize_vector(&visible_probs, &mut self.rng);

            samples.index_axis_mut(Axis(0), i).assign(&visible_states);
        }

        Ok(without_bias_column(&samples))
    }
}

fn check_columns(context: &'static str, expected: usize, data: &Array2<f64>) -> Result<()> {
    if data.ncols() != expected {
        return Err(Error::shape(context, expected, data.ncols()));
    }
    Ok(())
}
