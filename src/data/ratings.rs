//! Labelled binary rating matrices
//!
//! Each row is a movie the person rated highly; each column a feature the
//! movie shows (1) or lacks (0).

use std::path::Path;

use ndarray::{array, Array2};

use crate::error::{Error, Result};

/// Feature names of the bundled demo set
pub const DEMO_FEATURES: [&str; 6] = [
    "love",
    "happiness",
    "family",
    "horizons",
    "action",
    "violence",
];

/// Binary movie-feature ratings with feature labels
#[derive(Debug, Clone, PartialEq)]
pub struct RatingMatrix {
    features: Vec<String>,
    ratings: Array2<f64>,
}

impl RatingMatrix {
    /// Create a rating matrix, checking labels and cell values
    pub fn new(features: Vec<String>, ratings: Array2<f64>) -> Result<Self> {
        if features.len() != ratings.ncols() {
            return Err(Error::shape("feature labels", ratings.ncols(), features.len()));
        }

        if let Some(((row, column), value)) = ratings
            .indexed_iter()
            .find(|(_, &v)| v != 0.0 && v != 1.0)
        {
            return Err(Error::InvalidRating {
                row,
                column,
                value: value.to_string(),
            });
        }

        Ok(Self { features, ratings })
    }

    /// Six five-star movies described by the [`DEMO_FEATURES`]
    pub fn demo() -> Self {
        Self {
            features: DEMO_FEATURES.iter().map(|s| s.to_string()).collect(),
            ratings: array![
                [1.0, 1.0, 0.0, 0.0, 1.0, 1.0],
                [1.0, 1.0, 0.0, 1.0, 1.0, 0.0],
                [1.0, 1.0, 1.0, 0.0, 0.0, 1.0],
                [1.0, 1.0, 0.0, 1.0, 1.0, 0.0],
                [1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
                [1.0, 1.0, 1.0, 0.0, 1.0, 0.0],
            ],
        }
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn ratings(&self) -> &Array2<f64> {
        &self.ratings
    }

    pub fn num_movies(&self) -> usize {
        self.ratings.nrows()
    }

    pub fn num_features(&self) -> usize {
        self.ratings.ncols()
    }

    /// Load from CSV: a header of feature names, then one 0/1 row per movie
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let features: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut cells = Vec::new();
        let mut rows = 0;

        for (row, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() != features.len() {
                return Err(Error::shape("rating row", features.len(), record.len()));
            }

            for (column, field) in record.iter().enumerate() {
                let value = match field.trim() {
                    "0" => 0.0,
                    "1" => 1.0,
                    other => {
                        return Err(Error::InvalidRating {
                            row,
                            column,
                            value: other.to_string(),
                        })
                    }
                };
                cells.push(value);
            }
            rows += 1;
        }

        let ratings = Array2::from_shape_vec((rows, features.len()), cells)
            .map_err(|e| Error::InvalidDimension(e.to_string()))?;

        log::debug!("Loaded {} movies x {} features", rows, features.len());
        Self::new(features, ratings)
    }

    /// Save in the format read by [`RatingMatrix::from_csv`]
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(&self.features)?;
        for row in self.ratings.rows() {
            writer.write_record(row.iter().map(|&v| if v == 1.0 { "1" } else { "0" }))?;
        }

        writer.flush()?;
        Ok(())
    }
}
