//! Element-wise helpers shared by training and inference
//!
//! Every function here returns a new matrix. The one exception is
//! [`pin_bias`], which overwrites the bias column in place.

use ndarray::{s, Array1, Array2};
use rand::Rng;

/// Logistic activation: 1 / (1 + e^-x)
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Apply the logistic function to every entry
pub fn logistic_matrix(activations: &Array2<f64>) -> Array2<f64> {
    activations.mapv(logistic)
}

/// Prepend a column of ones (the bias unit) to `data`
pub fn with_bias_column(data: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = data.dim();
    Array2::from_shape_fn((rows, cols + 1), |(i, j)| {
        if j == 0 {
            1.0
        } else {
            data[[i, j - 1]]
        }
    })
}

/// Drop the leading bias column
pub fn without_bias_column(data: &Array2<f64>) -> Array2<f64> {
    data.slice(s![.., 1..]).to_owned()
}

/// Force the bias column to probability 1
pub fn pin_bias(probs: &mut Array2<f64>) {
    probs.column_mut(0).fill(1.0);
}

/// Stochastic binarization of a probability matrix
///
/// Each entry becomes 1.0 iff its probability is strictly greater than a
/// fresh U(0,1) draw. Draws are taken in row-major order.
pub fn binarize<R: Rng>(probs: &Array2<f64>, rng: &mut R) -> Array2<f64> {
    probs.mapv(|p| if p > rng.gen::<f64>() { 1.0 } else { 0.0 })
}

/// Vector version of [`binarize`]
pub fn binarize_vector<R: Rng>(probs: &Array1<f64>, rng: &mut R) -> Array1<f64> {
    probs.mapv(|p| if p > rng.gen::<f64>() { 1.0 } else { 0.0 })
}

/// Sum of squared differences between two equally shaped matrices
pub fn squared_error(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    (a - b).mapv(|x| x * x).sum()
}

/// True when every entry is finite
pub fn all_finite(m: &Array2<f64>) -> bool {
    m.iter().all(|x| x.is_finite())
}

/// True when every entry is exactly 0.0 or 1.0
pub fn is_binary(m: &Array2<f64>) -> bool {
    m.iter().all(|&x| x == 0.0 || x == 1.0)
}
