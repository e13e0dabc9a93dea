//! Scorecast - exam performance prediction service
//!
//! This library wraps a standardize-then-regress inference pipeline in an
//! HTTP service: an HTML form for interactive use and a JSON API for
//! programmatic clients. Model parameters come from a versioned artifact
//! loaded at startup.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{encode_features, Predictor, FEATURE_COUNT, FEATURE_NAMES};
pub use models::{ExamRecord, ModelArtifact, PredictRequest, Prediction};
pub use services::{ArtifactStore, TemplateEngine};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_NAMES[0], "reading_score");
    }
}
