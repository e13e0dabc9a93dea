use crate::models::ScalerParams;

/// Per-feature standardization: `(x - mean) / scale`
///
/// Mirrors the statistics fitted offline; the service only ever applies the
/// transform, never refits it.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Build a scaler from artifact statistics
    ///
    /// Returns None when the vectors disagree in length or any scale is
    /// non-positive or non-finite. The artifact loader turns that into a
    /// startup error.
    pub fn from_params(params: &ScalerParams) -> Option<Self> {
        if params.mean.len() != params.scale.len() {
            return None;
        }
        if params.scale.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return None;
        }
        if params.mean.iter().any(|m| !m.is_finite()) {
            return None;
        }

        Some(Self {
            mean: params.mean.clone(),
            scale: params.scale.clone(),
        })
    }

    /// Number of features the scaler was fitted on
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize a feature vector in place
    ///
    /// The caller guarantees the vector has the fitted length; the
    /// predictor enforces this once at construction.
    pub fn transform(&self, features: &mut [f64]) {
        debug_assert_eq!(features.len(), self.mean.len());

        for (i, value) in features.iter_mut().enumerate() {
            *value = (*value - self.mean[i]) / self.scale[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_known_values() {
        let scaler = StandardScaler::from_params(&ScalerParams {
            mean: vec![10.0, 0.5],
            scale: vec![2.0, 0.5],
        })
        .unwrap();

        let mut features = vec![14.0, 1.0];
        scaler.transform(&mut features);

        assert_eq!(features, vec![2.0, 1.0]);
    }

    #[test]
    fn test_transform_of_mean_is_zero() {
        let scaler = StandardScaler::from_params(&ScalerParams {
            mean: vec![69.17, 68.05],
            scale: vec![14.60, 15.19],
        })
        .unwrap();

        let mut features = vec![69.17, 68.05];
        scaler.transform(&mut features);

        assert!(features.iter().all(|f| f.abs() < 1e-9));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let params = ScalerParams {
            mean: vec![1.0, 2.0],
            scale: vec![1.0],
        };
        assert!(StandardScaler::from_params(&params).is_none());
    }

    #[test]
    fn test_rejects_degenerate_scale() {
        let zero = ScalerParams {
            mean: vec![1.0],
            scale: vec![0.0],
        };
        let negative = ScalerParams {
            mean: vec![1.0],
            scale: vec![-2.0],
        };
        let nan = ScalerParams {
            mean: vec![1.0],
            scale: vec![f64::NAN],
        };

        assert!(StandardScaler::from_params(&zero).is_none());
        assert!(StandardScaler::from_params(&negative).is_none());
        assert!(StandardScaler::from_params(&nan).is_none());
    }
}
