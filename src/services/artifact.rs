use crate::core::{LinearModel, Predictor, StandardScaler, FEATURE_NAMES};
use crate::models::ModelArtifact;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the model artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse artifact JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("invalid artifact: {0}")]
    Invalid(String),
}

/// On-disk model artifact, loaded and validated at startup
///
/// Owns the deserialized artifact plus the assembled prediction pipeline.
/// Validation is strict: a feature layout that disagrees with the encoder,
/// degenerate scaler statistics, or non-finite regression parameters all
/// refuse to load rather than mispredict at request time.
#[derive(Debug)]
pub struct ArtifactStore {
    path: PathBuf,
    artifact: ModelArtifact,
    predictor: Predictor,
    loaded_at: chrono::DateTime<chrono::Utc>,
}

impl ArtifactStore {
    /// Load and validate the artifact at the given path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref().to_path_buf();

        tracing::debug!("Loading model artifact from {}", path.display());

        let contents = std::fs::read_to_string(&path)?;
        let artifact: ModelArtifact = serde_json::from_str(&contents)?;

        let predictor = build_predictor(&artifact)?;

        tracing::debug!(
            "Artifact loaded: version={}, target={}, features={}",
            artifact.version,
            artifact.target,
            artifact.feature_names.len()
        );

        Ok(Self {
            path,
            artifact,
            predictor,
            loaded_at: chrono::Utc::now(),
        })
    }

    /// Model version string from the artifact
    pub fn version(&self) -> &str {
        &self.artifact.version
    }

    /// Name of the target column the model predicts
    pub fn target(&self) -> &str {
        &self.artifact.target
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }

    /// The assembled prediction pipeline
    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }
}

/// Validate the artifact against the encoder layout and assemble the pipeline
fn build_predictor(artifact: &ModelArtifact) -> Result<Predictor, ArtifactError> {
    if artifact.feature_names.len() != FEATURE_NAMES.len() {
        return Err(ArtifactError::Invalid(format!(
            "expected {} features, artifact has {}",
            FEATURE_NAMES.len(),
            artifact.feature_names.len()
        )));
    }

    for (i, (expected, actual)) in FEATURE_NAMES
        .iter()
        .zip(artifact.feature_names.iter())
        .enumerate()
    {
        if expected != actual {
            return Err(ArtifactError::Invalid(format!(
                "feature {} is '{}', expected '{}'",
                i, actual, expected
            )));
        }
    }

    let scaler = StandardScaler::from_params(&artifact.scaler).ok_or_else(|| {
        ArtifactError::Invalid("scaler statistics are degenerate or mis-sized".to_string())
    })?;

    let model = LinearModel::from_params(&artifact.regression).ok_or_else(|| {
        ArtifactError::Invalid("regression parameters are non-finite".to_string())
    })?;

    Predictor::new(scaler, model).ok_or_else(|| {
        ArtifactError::Invalid(format!(
            "scaler/model dimensions do not match the {}-feature layout",
            FEATURE_NAMES.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegressionParams, ScalerParams};

    fn create_test_artifact() -> ModelArtifact {
        let n = FEATURE_NAMES.len();
        ModelArtifact {
            version: "test".to_string(),
            target: "math_score".to_string(),
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            scaler: ScalerParams {
                mean: vec![0.0; n],
                scale: vec![1.0; n],
            },
            regression: RegressionParams {
                intercept: 66.0,
                coefficients: vec![0.5; n],
            },
        }
    }

    #[test]
    fn test_valid_artifact_builds_predictor() {
        let artifact = create_test_artifact();
        assert!(build_predictor(&artifact).is_ok());
    }

    #[test]
    fn test_rejects_feature_name_mismatch() {
        let mut artifact = create_test_artifact();
        artifact.feature_names[0] = "math_score".to_string();

        let err = build_predictor(&artifact).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)));
    }

    #[test]
    fn test_rejects_short_feature_list() {
        let mut artifact = create_test_artifact();
        artifact.feature_names.pop();

        assert!(build_predictor(&artifact).is_err());
    }

    #[test]
    fn test_rejects_mis_sized_coefficients() {
        let mut artifact = create_test_artifact();
        artifact.regression.coefficients.pop();

        assert!(build_predictor(&artifact).is_err());
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut artifact = create_test_artifact();
        artifact.scaler.scale[3] = 0.0;

        assert!(build_predictor(&artifact).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ArtifactStore::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ArtifactError::IoError(_)));
    }
}
