use crate::models::{ExamRecord, Gender, Lunch, ParentalEducation, RaceEthnicity, TestPreparation};

/// Canonical feature layout the model was trained against
///
/// Two numeric columns followed by drop-first one-hot dummies for each
/// categorical column. The dropped baselines are: female, free/reduced
/// lunch, no test preparation, group A, and some high school. A model
/// artifact is only accepted when its `feature_names` match this list
/// exactly.
pub const FEATURE_NAMES: [&str; 14] = [
    "reading_score",
    "writing_score",
    "gender_male",
    "lunch_standard",
    "test_preparation_course_completed",
    "race_ethnicity_group_b",
    "race_ethnicity_group_c",
    "race_ethnicity_group_d",
    "race_ethnicity_group_e",
    "parental_level_of_education_high_school",
    "parental_level_of_education_some_college",
    "parental_level_of_education_associates_degree",
    "parental_level_of_education_bachelors_degree",
    "parental_level_of_education_masters_degree",
];

/// Number of columns in the encoded feature vector
pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Encode an exam record into the fixed-order feature vector
pub fn encode_features(record: &ExamRecord) -> Vec<f64> {
    let mut features = Vec::with_capacity(FEATURE_COUNT);

    features.push(record.reading_score);
    features.push(record.writing_score);

    features.push(dummy(record.gender == Gender::Male));
    features.push(dummy(record.lunch == Lunch::Standard));
    features.push(dummy(record.test_preparation_course == TestPreparation::Completed));

    features.push(dummy(record.race_ethnicity == RaceEthnicity::GroupB));
    features.push(dummy(record.race_ethnicity == RaceEthnicity::GroupC));
    features.push(dummy(record.race_ethnicity == RaceEthnicity::GroupD));
    features.push(dummy(record.race_ethnicity == RaceEthnicity::GroupE));

    features.push(dummy(
        record.parental_level_of_education == ParentalEducation::HighSchool,
    ));
    features.push(dummy(
        record.parental_level_of_education == ParentalEducation::SomeCollege,
    ));
    features.push(dummy(
        record.parental_level_of_education == ParentalEducation::AssociatesDegree,
    ));
    features.push(dummy(
        record.parental_level_of_education == ParentalEducation::BachelorsDegree,
    ));
    features.push(dummy(
        record.parental_level_of_education == ParentalEducation::MastersDegree,
    ));

    features
}

#[inline]
fn dummy(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}
