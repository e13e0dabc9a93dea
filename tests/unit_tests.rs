// Pipeline-level tests for Scorecast, run against the checked-in artifact

use scorecast::models::{
    ExamRecord, Gender, Lunch, ParentalEducation, RaceEthnicity, TestPreparation,
};
use scorecast::{encode_features, ArtifactStore, FEATURE_COUNT};

fn create_test_record() -> ExamRecord {
    ExamRecord {
        gender: Gender::Female,
        race_ethnicity: RaceEthnicity::GroupC,
        parental_level_of_education: ParentalEducation::SomeCollege,
        lunch: Lunch::Standard,
        test_preparation_course: TestPreparation::None,
        reading_score: 70.0,
        writing_score: 68.0,
    }
}

fn load_store() -> ArtifactStore {
    ArtifactStore::load("model/artifact.json").expect("checked-in artifact should load")
}

#[test]
fn test_artifact_matches_encoder_layout() {
    let store = load_store();

    assert_eq!(store.target(), "math_score");
    assert!(!store.version().is_empty());

    // A record encodes to the width the artifact was fitted on
    let features = encode_features(&create_test_record());
    assert_eq!(features.len(), FEATURE_COUNT);
}

#[test]
fn test_prediction_within_score_range() {
    let store = load_store();
    let predictor = store.predictor();

    let prediction = predictor.predict(&create_test_record());

    assert!(
        prediction.score >= 0.0 && prediction.score <= 100.0,
        "Score {} is out of range [0, 100]",
        prediction.score
    );
}

#[test]
fn test_extreme_inputs_are_clamped() {
    let store = load_store();
    let predictor = store.predictor();

    let mut top = create_test_record();
    top.reading_score = 100.0;
    top.writing_score = 100.0;
    top.gender = Gender::Male;
    top.race_ethnicity = RaceEthnicity::GroupE;

    let mut bottom = create_test_record();
    bottom.reading_score = 0.0;
    bottom.writing_score = 0.0;
    bottom.lunch = Lunch::FreeReduced;

    let high = predictor.predict(&top);
    let low = predictor.predict(&bottom);

    assert!(high.score <= 100.0);
    assert!(low.score >= 0.0);
    assert!(high.score > low.score);
}

#[test]
fn test_prediction_monotonic_in_prior_scores() {
    let store = load_store();
    let predictor = store.predictor();

    let mut weaker = create_test_record();
    weaker.reading_score = 50.0;
    weaker.writing_score = 50.0;

    let mut stronger = create_test_record();
    stronger.reading_score = 90.0;
    stronger.writing_score = 90.0;

    let low = predictor.predict(&weaker);
    let high = predictor.predict(&stronger);

    assert!(
        high.score > low.score,
        "Expected {} > {} for stronger prior scores",
        high.score,
        low.score
    );
}

#[test]
fn test_prediction_is_deterministic() {
    let store = load_store();
    let predictor = store.predictor();
    let record = create_test_record();

    let first = predictor.predict(&record);
    let second = predictor.predict(&record);

    assert_eq!(first.score, second.score);
    assert_eq!(first.raw_score, second.raw_score);
}

#[test]
fn test_average_student_predicts_near_average() {
    let store = load_store();
    let predictor = store.predictor();

    // Dataset-average prior scores should land near the dataset-average
    // math score, not at an extreme
    let mut record = create_test_record();
    record.reading_score = 69.0;
    record.writing_score = 68.0;

    let prediction = predictor.predict(&record);

    assert!(
        prediction.score > 40.0 && prediction.score < 90.0,
        "Average inputs predicted {}",
        prediction.score
    );
}
