//! Personality profiling from trained RBM weights
//!
//! Turns the feature-to-latent weights into a ranked list of features the
//! person responds to, and reports each latent factor's loadings.

mod influence;

pub use influence::*;
