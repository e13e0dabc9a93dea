use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    ExamRecord, Gender, Lunch, ParentalEducation, RaceEthnicity, TestPreparation,
};

/// Request to predict a math score
///
/// Accepted both as an HTML form post and as a JSON body. Categorical
/// fields arrive as the dataset's string labels and are parsed into domain
/// enums by the handler; an unknown label is a 400, not a panic.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    #[serde(alias = "raceEthnicity")]
    pub race_ethnicity: String,
    #[validate(length(min = 1))]
    #[serde(alias = "parentalLevelOfEducation")]
    pub parental_level_of_education: String,
    #[validate(length(min = 1))]
    pub lunch: String,
    #[validate(length(min = 1))]
    #[serde(alias = "testPreparationCourse")]
    pub test_preparation_course: String,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(alias = "readingScore")]
    pub reading_score: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(alias = "writingScore")]
    pub writing_score: f64,
}

impl PredictRequest {
    /// Parse the categorical string fields into a typed record
    ///
    /// Returns the name of the first offending field on failure so the
    /// handler can report it back to the client.
    pub fn into_record(self) -> Result<ExamRecord, String> {
        let gender = Gender::parse(&self.gender).ok_or("gender")?;
        let race_ethnicity = RaceEthnicity::parse(&self.race_ethnicity).ok_or("race_ethnicity")?;
        let parental_level_of_education = ParentalEducation::parse(&self.parental_level_of_education)
            .ok_or("parental_level_of_education")?;
        let lunch = Lunch::parse(&self.lunch).ok_or("lunch")?;
        let test_preparation_course = TestPreparation::parse(&self.test_preparation_course)
            .ok_or("test_preparation_course")?;

        Ok(ExamRecord {
            gender,
            race_ethnicity,
            parental_level_of_education,
            lunch,
            test_preparation_course,
            reading_score: self.reading_score,
            writing_score: self.writing_score,
        })
    }
}
