//! Numerical parameters for the reconstruction
//!
//! `Parameters` holds runtime settings:
//! - finite difference step used by the derivative estimator,
//! - minimum number of samples before a trajectory is rebuilt

use super::derivative::DEFAULT_EPSILON;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub epsilon: f64, // forward difference step in seconds
    pub min_samples: usize, // fewer samples than this skip reconstruction
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            min_samples: 2,
        }
    }
}
