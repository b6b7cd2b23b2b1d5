//! One step of Contrastive Divergence (CD-1)
//!
//! The positive phase clamps the visible units to the data and samples the
//! hidden units. The negative phase reconstructs the visible units from those
//! hidden states and recomputes the hidden probabilities. The gradient is the
//! difference between the two phases' visible/hidden associations.

use ndarray::Array2;
use rand::Rng;

use super::sampling::{binarize, logistic_matrix, pin_bias, squared_error};

/// Intermediates of a single CD-1 step over the whole batch
#[derive(Debug, Clone)]
pub struct ContrastiveStep {
    /// P(h = 1 | data), bias column pinned to 1
    pub positive_hidden_probs: Array2<f64>,
    /// Hidden states sampled from `positive_hidden_probs`
    pub positive_hidden_states: Array2<f64>,
    /// Reconstructed P(v = 1 | h), bias column pinned to 1
    pub negative_visible_probs: Array2<f64>,
    /// P(h = 1 | reconstruction)
    pub negative_hidden_probs: Array2<f64>,
    /// `(positive associations - negative associations) / N`
    pub gradient: Array2<f64>,
    /// Sum of squared differences between data and reconstruction
    pub reconstruction_error: f64,
}

/// Run one CD-1 step
///
/// `data` must already carry the bias column (`N x (V + 1)`) and `weights`
/// is the augmented `(V + 1) x (H + 1)` matrix. Nothing is mutated; the
/// caller decides whether to apply `gradient`.
pub fn contrastive_divergence<R: Rng>(
    weights: &Array2<f64>,
    data: &Array2<f64>,
    rng: &mut R,
) -> ContrastiveStep {
    let num_examples = data.nrows() as f64;

    // Positive phase
    let mut positive_hidden_probs = logistic_matrix(&data.dot(weights));
    pin_bias(&mut positive_hidden_probs);
    let positive_hidden_states = binarize(&positive_hidden_probs, rng);
    let positive_associations = data.t().dot(&positive_hidden_probs);

    // Negative phase
    let mut negative_visible_probs = logistic_matrix(&positive_hidden_states.dot(&weights.t()));
    pin_bias(&mut negative_visible_probs);
    let negative_hidden_probs = logistic_matrix(&negative_visible_probs.dot(weights));
    let negative_associations = negative_visible_probs.t().dot(&negative_hidden_probs);

    let gradient = (positive_associations - negative_associations) / num_examples;
    let reconstruction_error = squared_error(data, &negative_visible_probs);

    ContrastiveStep {
        positive_hidden_probs,
        positive_hidden_states,
        negative_visible_probs,
        negative_hidden_probs,
        gradient,
        reconstruction_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbm::sampling::{is_binary, with_bias_column};
    use crate::rbm::weights::WeightMatrix;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Array2<f64>, Array2<f64>) {
        let mut rng = StdRng::seed_from_u64(1234);
        let weights = WeightMatrix::initialize(4, 3, &mut rng).unwrap();
        let data = with_bias_column(&array![
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ]);
        (weights.as_array().clone(), data)
    }

    #[test]
    fn test_step_shapes() {
        let (weights, data) = setup();
        let step = contrastive_divergence(&weights, &data, &mut StdRng::seed_from_u64(1));

        assert_eq!(step.positive_hidden_probs.dim(), (3, 4));
        assert_eq!(step.positive_hidden_states.dim(), (3, 4));
        assert_eq!(step.negative_visible_probs.dim(), (3, 5));
        assert_eq!(step.negative_hidden_probs.dim(), (3, 4));
        assert_eq!(step.gradient.dim(), weights.dim());
    }

    #[test]
    fn test_bias_columns_pinned() {
        let (weights, data) = setup();
        let step = contrastive_divergence(&weights, &data, &mut StdRng::seed_from_u64(2));

        assert!(step.positive_hidden_probs.column(0).iter().all(|&p| p == 1.0));
        assert!(step.negative_visible_probs.column(0).iter().all(|&p| p == 1.0));
        // A pinned probability of 1 always samples an active bias
        assert!(step.positive_hidden_states.column(0).iter().all(|&s| s == 1.0));
        assert!(is_binary(&step.positive_hidden_states));
    }

    #[test]
    fn test_step_is_reproducible() {
        let (weights, data) = setup();
        let a = contrastive_divergence(&weights, &data, &mut StdRng::seed_from_u64(9));
        let b = contrastive_divergence(&weights, &data, &mut StdRng::seed_from_u64(9));

        assert_eq!(a.gradient, b.gradient);
        assert_eq!(a.reconstruction_error, b.reconstruction_error);
    }

    #[test]
    fn test_reconstruction_error_nonnegative() {
        let (weights, data) = setup();
        let step = contrastive_divergence(&weights, &data, &mut StdRng::seed_from_u64(4));
        assert!(step.reconstruction_error >= 0.0);
        assert!(step.reconstruction_error.is_finite());
    }
}
