// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ExamRecord, Gender, Lunch, ModelArtifact, ParentalEducation, Prediction, RaceEthnicity,
    RegressionParams, ScalerParams, TestPreparation,
};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, PredictResponse};
