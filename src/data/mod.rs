//! Data module for rating datasets
//!
//! This module provides:
//! - Labelled binary rating matrices
//! - CSV loading and saving
//! - The bundled demo dataset

mod ratings;

pub use ratings::*;
