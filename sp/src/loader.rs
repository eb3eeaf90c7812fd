//! Subject file loading and validation

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::Subject;
use crate::error::{PlanError, PlanResult};

/// Lowest accepted difficulty or priority
pub const MIN_RATING: u8 = 1;

/// Highest accepted difficulty or priority
pub const MAX_RATING: u8 = 5;

/// On-disk layout: `{"subjects": [...]}` or the older `{"matières": [...]}`
#[derive(Debug, Deserialize)]
struct SubjectFile {
    #[serde(default, alias = "matières")]
    subjects: Vec<Subject>,
}

/// Read and validate subjects from a JSON file
pub fn load_subjects(path: impl AsRef<Path>) -> PlanResult<Vec<Subject>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "load_subjects: called");
    let content = fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let subjects = parse_subjects(&content)?;
    info!(count = subjects.len(), path = %path.display(), "Loaded subjects");
    Ok(subjects)
}

/// Parse and validate subjects from JSON text
pub fn parse_subjects(json: &str) -> PlanResult<Vec<Subject>> {
    let file: SubjectFile = serde_json::from_str(json)?;
    validate_subjects(&file.subjects)?;
    Ok(file.subjects)
}

/// Check ratings, hours and name uniqueness
///
/// Exam dates are left alone; they are parsed when urgency is calculated.
pub fn validate_subjects(subjects: &[Subject]) -> PlanResult<()> {
    let mut seen = HashSet::new();
    for subject in subjects {
        validate_subject(subject)?;
        if !seen.insert(subject.name.as_str()) {
            return Err(PlanError::DuplicateSubject(subject.name.clone()));
        }
    }
    Ok(())
}

fn validate_subject(subject: &Subject) -> PlanResult<()> {
    let invalid = |field, reason: String| PlanError::InvalidField {
        subject: subject.name.clone(),
        field,
        reason,
    };

    if subject.name.trim().is_empty() {
        return Err(invalid("name", "must not be empty".to_string()));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&subject.difficulty) {
        return Err(invalid(
            "difficulty",
            format!("{} is outside {}-{}", subject.difficulty, MIN_RATING, MAX_RATING),
        ));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&subject.priority) {
        return Err(invalid(
            "priority",
            format!("{} is outside {}-{}", subject.priority, MIN_RATING, MAX_RATING),
        ));
    }
    if !subject.required_hours.is_finite() || subject.required_hours < 0.0 {
        return Err(invalid(
            "required_hours",
            format!("{} is not a non-negative number", subject.required_hours),
        ));
    }
    Ok(())
}
