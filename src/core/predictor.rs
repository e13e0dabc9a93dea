use crate::core::{
    encoder::{encode_features, FEATURE_COUNT},
    regression::LinearModel,
    scaler::StandardScaler,
};
use crate::models::{ExamRecord, Prediction};

/// Lower bound of a valid exam score
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of a valid exam score
pub const MAX_SCORE: f64 = 100.0;

/// Main prediction orchestrator - implements the inference pipeline
///
/// # Pipeline stages
/// 1. One-hot feature encoding
/// 2. Standardization
/// 3. Linear regression
/// 4. Clamping to the valid score range
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler: StandardScaler,
    model: LinearModel,
}

impl Predictor {
    /// Assemble the pipeline from a fitted scaler and model
    ///
    /// Returns None when either component disagrees with the encoder's
    /// feature layout; the artifact loader reports that as a startup error.
    pub fn new(scaler: StandardScaler, model: LinearModel) -> Option<Self> {
        if scaler.len() != FEATURE_COUNT || model.len() != FEATURE_COUNT {
            return None;
        }

        Some(Self { scaler, model })
    }

    /// Predict the math score for a single exam record
    pub fn predict(&self, record: &ExamRecord) -> Prediction {
        let mut features = encode_features(record);
        self.scaler.transform(&mut features);

        let raw_score = self.model.predict(&features);
        let score = raw_score.clamp(MIN_SCORE, MAX_SCORE);

        Prediction { score, raw_score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Gender, Lunch, ParentalEducation, RaceEthnicity, RegressionParams, ScalerParams,
        TestPreparation,
    };

    fn identity_scaler() -> StandardScaler {
        StandardScaler::from_params(&ScalerParams {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        })
        .unwrap()
    }

    fn create_test_record(reading: f64, writing: f64) -> ExamRecord {
        ExamRecord {
            gender: Gender::Female,
            race_ethnicity: RaceEthnicity::GroupC,
            parental_level_of_education: ParentalEducation::SomeCollege,
            lunch: Lunch::Standard,
            test_preparation_course: TestPreparation::None,
            reading_score: reading,
            writing_score: writing,
        }
    }

    #[test]
    fn test_rejects_wrong_feature_count() {
        let scaler = StandardScaler::from_params(&ScalerParams {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        })
        .unwrap();
        let model = LinearModel::from_params(&RegressionParams {
            intercept: 0.0,
            coefficients: vec![1.0; 3],
        })
        .unwrap();

        assert!(Predictor::new(scaler, model).is_none());
    }

    #[test]
    fn test_predict_stays_in_range() {
        // Coefficients chosen so the raw output overshoots 100
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[0] = 2.0;
        let model = LinearModel::from_params(&RegressionParams {
            intercept: 50.0,
            coefficients,
        })
        .unwrap();

        let predictor = Predictor::new(identity_scaler(), model).unwrap();
        let prediction = predictor.predict(&create_test_record(95.0, 80.0));

        assert_eq!(prediction.score, MAX_SCORE);
        assert!(prediction.raw_score > MAX_SCORE);
        assert!(prediction.clamped());
    }

    #[test]
    fn test_predict_monotonic_in_reading_score() {
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[0] = 0.4;
        coefficients[1] = 0.5;
        let model = LinearModel::from_params(&RegressionParams {
            intercept: 5.0,
            coefficients,
        })
        .unwrap();

        let predictor = Predictor::new(identity_scaler(), model).unwrap();

        let low = predictor.predict(&create_test_record(40.0, 60.0));
        let high = predictor.predict(&create_test_record(80.0, 60.0));

        assert!(high.score > low.score);
    }
}
