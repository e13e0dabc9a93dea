use serde::{Deserialize, Serialize};

/// Student gender as recorded in the exam dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Parse the dataset string form ("female" / "male")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "female" => Some(Gender::Female),
            "male" => Some(Gender::Male),
            _ => None,
        }
    }
}

/// Race/ethnicity cohort label ("group A" through "group E")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceEthnicity {
    #[serde(rename = "group A")]
    GroupA,
    #[serde(rename = "group B")]
    GroupB,
    #[serde(rename = "group C")]
    GroupC,
    #[serde(rename = "group D")]
    GroupD,
    #[serde(rename = "group E")]
    GroupE,
}

impl RaceEthnicity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "group a" => Some(RaceEthnicity::GroupA),
            "group b" => Some(RaceEthnicity::GroupB),
            "group c" => Some(RaceEthnicity::GroupC),
            "group d" => Some(RaceEthnicity::GroupD),
            "group e" => Some(RaceEthnicity::GroupE),
            _ => None,
        }
    }
}

/// Highest level of education reached by a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentalEducation {
    #[serde(rename = "some high school")]
    SomeHighSchool,
    #[serde(rename = "high school")]
    HighSchool,
    #[serde(rename = "some college")]
    SomeCollege,
    #[serde(rename = "associate's degree")]
    AssociatesDegree,
    #[serde(rename = "bachelor's degree")]
    BachelorsDegree,
    #[serde(rename = "master's degree")]
    MastersDegree,
}

impl ParentalEducation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "some high school" => Some(ParentalEducation::SomeHighSchool),
            "high school" => Some(ParentalEducation::HighSchool),
            "some college" => Some(ParentalEducation::SomeCollege),
            "associate's degree" => Some(ParentalEducation::AssociatesDegree),
            "bachelor's degree" => Some(ParentalEducation::BachelorsDegree),
            "master's degree" => Some(ParentalEducation::MastersDegree),
            _ => None,
        }
    }
}

/// Lunch plan ("standard" or "free/reduced")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lunch {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "free/reduced")]
    FreeReduced,
}

impl Lunch {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "standard" => Some(Lunch::Standard),
            "free/reduced" => Some(Lunch::FreeReduced),
            _ => None,
        }
    }
}

/// Whether the student completed the test preparation course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestPreparation {
    None,
    Completed,
}

impl TestPreparation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" => Some(TestPreparation::None),
            "completed" => Some(TestPreparation::Completed),
            _ => None,
        }
    }
}

/// A fully parsed input record for the prediction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    pub gender: Gender,
    #[serde(rename = "raceEthnicity")]
    pub race_ethnicity: RaceEthnicity,
    #[serde(rename = "parentalLevelOfEducation")]
    pub parental_level_of_education: ParentalEducation,
    pub lunch: Lunch,
    #[serde(rename = "testPreparationCourse")]
    pub test_preparation_course: TestPreparation,
    #[serde(rename = "readingScore")]
    pub reading_score: f64,
    #[serde(rename = "writingScore")]
    pub writing_score: f64,
}

/// A single prediction produced by the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted math score, clamped to [0, 100]
    pub score: f64,
    /// Raw regression output before clamping
    pub raw_score: f64,
}

impl Prediction {
    /// Whether clamping changed the regression output
    pub fn clamped(&self) -> bool {
        (self.score - self.raw_score).abs() > f64::EPSILON
    }
}

/// Standard-scaler statistics stored in the model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Linear regression parameters stored in the model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionParams {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

/// Trained model artifact as persisted on disk
///
/// The artifact is produced offline by the training pipeline and consumed
/// read-only by this service. `feature_names` pins the column order the
/// scaler statistics and coefficients were fitted against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    pub target: String,
    pub feature_names: Vec<String>,
    pub scaler: ScalerParams,
    pub regression: RegressionParams,
}
