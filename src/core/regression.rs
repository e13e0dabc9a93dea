use crate::models::RegressionParams;

/// Linear regression model: intercept plus coefficient dot product
#[derive(Debug, Clone)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Build a model from artifact parameters
    ///
    /// Returns None when any parameter is non-finite.
    pub fn from_params(params: &RegressionParams) -> Option<Self> {
        if !params.intercept.is_finite() {
            return None;
        }
        if params.coefficients.iter().any(|c| !c.is_finite()) {
            return None;
        }

        Some(Self {
            intercept: params.intercept,
            coefficients: params.coefficients.clone(),
        })
    }

    /// Number of input features the model expects
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluate the model on a (standardized) feature vector
    #[inline]
    pub fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.coefficients.len());

        self.coefficients
            .iter()
            .zip(features.iter())
            .map(|(c, f)| c * f)
            .sum::<f64>()
            + self.intercept
    }
}
