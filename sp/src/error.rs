//! Planning error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading subjects or building a plan
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid exam date for {subject}: '{value}' ({source})")]
    InvalidExamDate {
        subject: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Hours per day must be a positive number, got {0}")]
    InvalidDailyBudget(f64),

    #[error("No subjects to compute statistics for")]
    NoSubjects,

    #[error("Duplicate subject name: {0}")]
    DuplicateSubject(String),

    #[error("Invalid {field} for {subject}: {reason}")]
    InvalidField {
        subject: String,
        field: &'static str,
        reason: String,
    },

    #[error("Invalid planner configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Check if this error came from the subject data rather than the environment
    pub fn is_data_error(&self) -> bool {
        match self {
            PlanError::InvalidExamDate { .. } => true,
            PlanError::DuplicateSubject(_) => true,
            PlanError::InvalidField { .. } => true,
            PlanError::Json(_) => true,
            PlanError::InvalidDailyBudget(_) => false,
            PlanError::NoSubjects => false,
            PlanError::InvalidConfig(_) => false,
            PlanError::Io { .. } => false,
        }
    }
}

/// Result alias for planning operations
pub type PlanResult<T> = Result<T, PlanError>;
