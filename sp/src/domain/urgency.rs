//! Exam urgency derived from days remaining

use serde::{Deserialize, Serialize};

/// Urgency of one subject relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Urgency {
    /// Whole days until the exam, never below 1
    pub days_remaining: i64,

    /// Grows as the exam approaches
    pub inverse_urgency: f64,
}

impl Urgency {
    /// Derive urgency from a raw day difference
    ///
    /// Exams today or already past count as one day away so they get maximal urgency.
    pub fn from_days(days: i64, scale: f64) -> Self {
        let days_remaining = days.max(1);
        Self {
            days_remaining,
            inverse_urgency: scale / days_remaining as f64,
        }
    }

    pub fn level(&self) -> UrgencyLevel {
        UrgencyLevel::from_days(self.days_remaining)
    }
}

/// Coarse urgency bucket used when reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Ample,
    Moderate,
    Urgent,
}

impl UrgencyLevel {
    /// Less than a week is urgent, less than two weeks moderate
    pub fn from_days(days_remaining: i64) -> Self {
        if days_remaining < 7 {
            Self::Urgent
        } else if days_remaining < 14 {
            Self::Moderate
        } else {
            Self::Ample
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urgent => write!(f, "URGENT"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::Ample => write!(f, "AMPLE TIME"),
        }
    }
}
