//! Augmented weight matrix with bias row and column
//!
//! Layout, for V visible and H hidden units:
//!
//! ```text
//!            bias   h_1  ...  h_H
//! bias   [    0     b_1  ...  b_H ]   <- hidden biases
//! v_1    [   a_1    w_11 ...  w_1H]
//! ...
//! v_V    [   a_V    w_V1 ...  w_VH]
//!             ^ visible biases
//! ```

use ndarray::{s, Array2, ArrayView1, ArrayView2};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::{Error, Result};

/// Weight matrix of shape `(num_visible + 1) x (num_hidden + 1)`
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    values: Array2<f64>,
}

impl WeightMatrix {
    /// Initialize weights for a V x H machine
    ///
    /// Bias row and column start at zero. Interior weights are drawn from
    /// U(-b, b) with `b = 0.1 * sqrt(6 / (H + V))`, in row-major order.
    pub fn initialize<R: Rng>(num_visible: usize, num_hidden: usize, rng: &mut R) -> Result<Self> {
        if num_visible == 0 || num_hidden == 0 {
            return Err(Error::InvalidDimension(format!(
                "weight matrix needs at least one visible and one hidden unit, got {}x{}",
                num_visible, num_hidden
            )));
        }

        let bound = Self::init_bound(num_visible, num_hidden);
        let uniform = Uniform::new_inclusive(-bound, bound);

        let values = Array2::from_shape_fn((num_visible + 1, num_hidden + 1), |(i, j)| {
            if i == 0 || j == 0 {
                0.0
            } else {
                uniform.sample(rng)
            }
        });

        Ok(Self { values })
    }

    /// Half-width of the initialization interval
    pub fn init_bound(num_visible: usize, num_hidden: usize) -> f64 {
        0.1 * (6.0 / (num_hidden + num_visible) as f64).sqrt()
    }

    /// Number of visible units (excluding bias)
    pub fn num_visible(&self) -> usize {
        self.values.nrows() - 1
    }

    /// Number of hidden units (excluding bias)
    pub fn num_hidden(&self) -> usize {
        self.values.ncols() - 1
    }

    /// Full augmented matrix
    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }

    /// Shape including the bias row and column
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Visible-unit biases (column 0, rows 1..)
    pub fn visible_bias(&self) -> ArrayView1<'_, f64> {
        self.values.slice(s![1.., 0])
    }

    /// Hidden-unit biases (row 0, columns 1..)
    pub fn hidden_bias(&self) -> ArrayView1<'_, f64> {
        self.values.slice(s![0, 1..])
    }

    /// Feature-to-latent block without biases, shape `V x H`
    pub fn connections(&self) -> ArrayView2<'_, f64> {
        self.values.slice(s![1.., 1..])
    }

    /// Weight between visible unit `visible` and hidden unit `hidden` (both 0-based)
    pub fn connection(&self, visible: usize, hidden: usize) -> Option<f64> {
        self.values.get([visible + 1, hidden + 1]).copied()
    }

    /// Add `delta` to the weights unless that would produce a non-finite entry
    ///
    /// Returns `false` and leaves the weights untouched on overflow.
    pub(crate) fn try_update(&mut self, delta: &Array2<f64>) -> bool {
        let updated = &self.values + delta;
        if updated.iter().all(|w| w.is_finite()) {
            self.values = updated;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub(crate) fn from_array(values: Array2<f64>) -> Self {
        Self { values }
    }
}
