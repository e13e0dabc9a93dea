// Core pipeline exports
pub mod encoder;
pub mod predictor;
pub mod regression;
pub mod scaler;

pub use encoder::{encode_features, FEATURE_COUNT, FEATURE_NAMES};
pub use predictor::{Predictor, MAX_SCORE, MIN_SCORE};
pub use regression::LinearModel;
pub use scaler::StandardScaler;
