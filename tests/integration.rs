//! Integration tests for RBM personality profiling

use ndarray::{s, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rbm_profiling::prelude::*;
use rbm_profiling::rbm::sampling::{is_binary, with_bias_column};
use rbm_profiling::rbm::contrastive_divergence;

/// Two clearly separated groups of movies
fn two_cluster_data() -> Array2<f64> {
    let mut data = Array2::zeros((20, 8));
    for i in 0..20 {
        let (start, end) = if i % 2 == 0 { (0, 4) } else { (4, 8) };
        for j in start..end {
            data[[i, j]] = 1.0;
        }
    }
    data
}

#[test]
fn test_initial_weights_are_deterministic_and_bounded() {
    let a = Rbm::new(6, 2).unwrap();
    let b = Rbm::new(6, 2).unwrap();
    assert_eq!(a.weights(), b.weights());

    let w = a.weights();
    let bound = WeightMatrix::init_bound(6, 2);
    assert!(w.as_array().row(0).iter().all(|&x| x == 0.0));
    assert!(w.as_array().column(0).iter().all(|&x| x == 0.0));
    assert!(w.connections().iter().all(|&x| x >= -bound && x <= bound));
}

#[test]
fn test_end_to_end_demo_scenario() {
    let ratings = RatingMatrix::demo();
    let mut rbm = Rbm::new(6, 2).unwrap();

    let history = rbm
        .train_with(ratings.ratings(), 1000, 0.1)
        .unwrap();
    assert_eq!(history.epochs(), 1000);

    assert_eq!(rbm.weights().shape(), (7, 3));
    assert!(rbm.weights().as_array().iter().all(|w| w.is_finite()));

    let hidden = rbm.run_visible(ratings.ratings()).unwrap();
    assert_eq!(hidden.dim(), (6, 2));
    assert!(is_binary(&hidden));
}

#[test]
fn test_separable_data_converges() {
    let data = two_cluster_data();
    let mut rbm = Rbm::new(8, 2).unwrap();

    let history = rbm.train(&data, &TrainingConfig::new(1000, 0.1)).unwrap();

    let initial = history.initial_error().unwrap();
    let last = history.final_error().unwrap();
    assert!(last < initial, "error went from {} to {}", initial, last);
}

#[test]
fn test_bias_pinned_during_training_step() {
    let mut rng = StdRng::seed_from_u64(5);
    let rbm = Rbm::new(6, 2).unwrap();
    let data = with_bias_column(RatingMatrix::demo().ratings());

    let step = contrastive_divergence(rbm.weights().as_array(), &data, &mut rng);

    assert!(step.positive_hidden_probs.column(0).iter().all(|&p| p == 1.0));
    assert!(step.negative_visible_probs.column(0).iter().all(|&p| p == 1.0));
}

#[test]
fn test_shape_contracts() {
    let mut rbm = Rbm::new(8, 3).unwrap();
    let data = two_cluster_data();

    assert_eq!(rbm.run_visible(&data).unwrap().dim(), (20, 3));
    assert_eq!(rbm.run_hidden(&Array2::ones((4, 3))).unwrap().dim(), (4, 8));
    assert_eq!(rbm.daydream(7).unwrap().dim(), (7, 8));
}

#[test]
fn test_daydream_on_trained_engine() {
    let ratings = RatingMatrix::demo();
    let mut rbm = Rbm::new(6, 2).unwrap();
    rbm.train(ratings.ratings(), &TrainingConfig::default()).unwrap();

    let samples = rbm.daydream(5).unwrap();
    assert_eq!(samples.dim(), (5, 6));
    assert!(samples.row(0).iter().all(|&x| x >= 0.0 && x < 1.0));
    assert!(is_binary(&samples.slice(s![1.., ..]).to_owned()));
}

#[test]
fn test_independent_engines_do_not_share_randomness() {
    let data = RatingMatrix::demo();
    let mut a = Rbm::with_seed(6, 2, 11).unwrap();
    let mut b = Rbm::with_seed(6, 2, 11).unwrap();

    // Drawing from `a` must not advance `b`
    a.daydream(10).unwrap();
    a.train_with(data.ratings(), 10, 0.1).unwrap();
    let mut c = Rbm::with_seed(6, 2, 11).unwrap();
    c.daydream(10).unwrap();
    c.train_with(data.ratings(), 10, 0.1).unwrap();
    assert_eq!(a.weights(), c.weights());

    b.train_with(data.ratings(), 10, 0.1).unwrap();
    assert_ne!(a.weights(), b.weights());
}

#[test]
fn test_custom_rng() {
    let rng = StdRng::seed_from_u64(1234);
    let custom = Rbm::with_rng(6, 2, rng).unwrap();
    let default = Rbm::new(6, 2).unwrap();

    assert_eq!(custom.weights(), default.weights());
}

#[test]
fn test_errors_at_boundary() {
    let mut rbm = Rbm::new(6, 2).unwrap();

    assert!(matches!(
        rbm.train_with(&Array2::zeros((4, 7)), 10, 0.1),
        Err(Error::ShapeMismatch { expected: 6, actual: 7, .. })
    ));
    assert!(matches!(
        rbm.run_hidden(&Array2::zeros((4, 6))),
        Err(Error::ShapeMismatch { expected: 2, .. })
    ));
    assert!(matches!(rbm.daydream(0), Err(Error::InvalidDimension(_))));
    assert!(matches!(Rbm::new(0, 0), Err(Error::InvalidDimension(_))));
}

#[test]
fn test_profile_from_trained_demo() {
    let ratings = RatingMatrix::demo();
    let config = ExperimentConfig::default();
    let mut rbm = Rbm::from_config(&config.rbm).unwrap();
    rbm.train(ratings.ratings(), &config.training).unwrap();

    let profile =
        PersonalityProfile::from_weights(rbm.weights(), ratings.features(), &config.profile)
            .unwrap();

    assert_eq!(profile.features().len(), 6);
    let ranked = profile.ranked();
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].influence >= pair[1].influence));
    assert!(profile.strongest().is_some());
}
