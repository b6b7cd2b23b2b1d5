//! Personality Profiling with a Restricted Boltzmann Machine
//!
//! This library learns latent taste factors from binary movie-feature
//! ratings. Each row of the input is a movie a person rated highly, each
//! column a feature the movie has (love, action, violence, ...). An RBM
//! trained on those rows exposes which features travel together, and the
//! learned weights rank how strongly each feature describes the person.
//!
//! # Modules
//!
//! - `rbm`: the Restricted Boltzmann Machine (CD-1 training, inference, Gibbs sampling)
//! - `data`: labelled rating matrices, CSV input/output, demo dataset
//! - `profile`: feature influence and latent factor reports
//! - `config`: JSON experiment configuration
//!
//! # Example
//!
//! ```no_run
//! use rbm_profiling::data::RatingMatrix;
//! use rbm_profiling::profile::{PersonalityProfile, ProfileConfig};
//! use rbm_profiling::rbm::{Rbm, TrainingConfig};
//!
//! let ratings = RatingMatrix::demo();
//!
//! let mut rbm = Rbm::new(ratings.num_features(), 2)?;
//! rbm.train(ratings.ratings(), &TrainingConfig::default())?;
//!
//! let profile = PersonalityProfile::from_weights(
//!     rbm.weights(),
//!     ratings.features(),
//!     &ProfileConfig::default(),
//! )?;
//! for feature in profile.ranked() {
//!     println!("{}: {:.4}", feature.feature, feature.influence);
//! }
//!
//! let dreams = rbm.daydream(5)?;
//! # Ok::<(), rbm_profiling::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod profile;
pub mod rbm;

pub use config::ExperimentConfig;
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ExperimentConfig;
    pub use crate::data::RatingMatrix;
    pub use crate::error::{Error, Result};
    pub use crate::profile::{PersonalityProfile, ProfileConfig, Sentiment};
    pub use crate::rbm::{Rbm, RbmConfig, TrainingConfig, TrainingHistory, WeightMatrix};
}
