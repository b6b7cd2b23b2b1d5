//! Feature influence derived from learned weights
//!
//! A feature's influence is the sum of its weights to every hidden unit.
//! Large positive influence means the latent factors that explain the
//! person's ratings switch on together with the feature.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rbm::WeightMatrix;

/// How to read influence values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Influences with absolute value below this count as "slight"
    pub neutral_band: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self { neutral_band: 0.1 }
    }
}

/// Qualitative reading of an influence value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    SlightlyPositive,
    SlightlyNegative,
    Negative,
}

impl Sentiment {
    pub fn classify(influence: f64, neutral_band: f64) -> Self {
        let slight = influence.abs() < neutral_band;
        match (influence >= 0.0, slight) {
            (true, false) => Sentiment::Positive,
            (true, true) => Sentiment::SlightlyPositive,
            (false, true) => Sentiment::SlightlyNegative,
            (false, false) => Sentiment::Negative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::SlightlyPositive => "slightly positive",
            Sentiment::SlightlyNegative => "slightly negative",
            Sentiment::Negative => "negative",
        }
    }
}

/// Influence of one feature on the person's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInfluence {
    pub feature: String,
    pub influence: f64,
    pub sentiment: Sentiment,
}

/// Per-feature influences of a trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    features: Vec<FeatureInfluence>,
}

impl PersonalityProfile {
    /// Build a profile from trained weights and one label per visible unit
    pub fn from_weights(
        weights: &WeightMatrix,
        labels: &[String],
        config: &ProfileConfig,
    ) -> Result<Self> {
        if labels.len() != weights.num_visible() {
            return Err(Error::shape("profile labels", weights.num_visible(), labels.len()));
        }

        let features = labels
            .iter()
            .zip(weights.connections().rows())
            .map(|(label, row)| {
                let influence = row.sum();
                FeatureInfluence {
                    feature: label.clone(),
                    influence,
                    sentiment: Sentiment::classify(influence, config.neutral_band),
                }
            })
            .collect();

        Ok(Self { features })
    }

    /// Influences in the order of the visible units
    pub fn features(&self) -> &[FeatureInfluence] {
        &self.features
    }

    /// Influences sorted from most to least positive
    pub fn ranked(&self) -> Vec<FeatureInfluence> {
        let mut ranked = self.features.clone();
        ranked.sort_by(|a, b| {
            b.influence
                .partial_cmp(&a.influence)
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    /// Feature with the highest influence
    pub fn strongest(&self) -> Option<&FeatureInfluence> {
        self.features.iter().max_by(|a, b| {
            a.influence
                .partial_cmp(&b.influence)
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Weights from every feature to a single hidden unit (0-based)
pub fn latent_factor_loadings(
    weights: &WeightMatrix,
    labels: &[String],
    hidden: usize,
) -> Result<Vec<(String, f64)>> {
    if labels.len() != weights.num_visible() {
        return Err(Error::shape("profile labels", weights.num_visible(), labels.len()));
    }
    if hidden >= weights.num_hidden() {
        return Err(Error::InvalidDimension(format!(
            "hidden unit {} out of range (model has {})",
            hidden,
            weights.num_hidden()
        )));
    }

    Ok(labels
        .iter()
        .zip(weights.connections().column(hidden).iter())
        .map(|(label, &w)| (label.clone(), w))
        .collect())
}
