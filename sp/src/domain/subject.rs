//! Subject records and their scored forms

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::urgency::Urgency;

/// Difficulty and priority fall back to this when a record omits them
pub const DEFAULT_RATING: u8 = 3;

/// Inverse urgency used for scoring when no urgency has been computed
pub const DEFAULT_INVERSE_URGENCY: f64 = 1.0;

fn default_rating() -> u8 {
    DEFAULT_RATING
}

/// One exam or course to study for, as supplied by the subject file
///
/// Field aliases accept the French keys used by older subject files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique name within a planning run
    #[serde(alias = "nom")]
    pub name: String,

    /// Exam date as `YYYY-MM-DD`; parsed during urgency calculation
    #[serde(alias = "date_examen")]
    pub exam_date: String,

    /// Subjective difficulty, 1-5
    #[serde(alias = "difficulte", default = "default_rating")]
    pub difficulty: u8,

    /// User-assigned importance, 1-5
    #[serde(alias = "priorite", default = "default_rating")]
    pub priority: u8,

    /// Total study time needed, in hours
    #[serde(alias = "heures_necessaires")]
    pub required_hours: f64,
}

impl Subject {
    /// Create a subject record
    pub fn new(
        name: impl Into<String>,
        exam_date: impl Into<String>,
        difficulty: u8,
        priority: u8,
        required_hours: f64,
    ) -> Self {
        Self {
            name: name.into(),
            exam_date: exam_date.into(),
            difficulty,
            priority,
            required_hours,
        }
    }
}

/// A subject with its exam date parsed and urgency derived
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessedSubject {
    #[serde(flatten)]
    pub subject: Subject,

    #[serde(skip)]
    pub exam: NaiveDate,

    #[serde(flatten)]
    pub urgency: Urgency,
}

/// An assessed subject carrying its priority score
///
/// Only produced by ranking, so a score always exists next to the urgency it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSubject {
    #[serde(flatten)]
    pub assessed: AssessedSubject,

    pub score: f64,
}

impl RankedSubject {
    pub fn name(&self) -> &str {
        &self.assessed.subject.name
    }

    pub fn subject(&self) -> &Subject {
        &self.assessed.subject
    }

    pub fn urgency(&self) -> &Urgency {
        &self.assessed.urgency
    }

    pub fn required_hours(&self) -> f64 {
        self.assessed.subject.required_hours
    }
}
