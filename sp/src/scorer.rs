//! Urgency and priority scoring
//!
//! Turns raw subjects into [`AssessedSubject`]s (days remaining and inverse
//! urgency relative to a reference date) and then into [`RankedSubject`]s
//! ordered by descending priority score.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{AssessedSubject, DEFAULT_INVERSE_URGENCY, RankedSubject, Subject, Urgency};
use crate::error::{PlanError, PlanResult};

/// Format of exam dates in subject records
pub const EXAM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an exam date, attributing failures to the subject
pub fn parse_exam_date(subject: &Subject) -> PlanResult<NaiveDate> {
    NaiveDate::parse_from_str(subject.exam_date.trim(), EXAM_DATE_FORMAT).map_err(|source| {
        PlanError::InvalidExamDate {
            subject: subject.name.clone(),
            value: subject.exam_date.clone(),
            source,
        }
    })
}

/// Derive days remaining and inverse urgency for every subject
///
/// Output order matches input order. Fails on the first unparseable exam date.
pub fn calculate_urgency(subjects: &[Subject], reference: NaiveDate, scale: f64) -> PlanResult<Vec<AssessedSubject>> {
    debug!(count = subjects.len(), %reference, "calculate_urgency: called");
    subjects
        .iter()
        .map(|subject| {
            let exam = parse_exam_date(subject)?;
            let days = (exam - reference).num_days();
            let urgency = Urgency::from_days(days, scale);
            debug!(subject = %subject.name, days, ?urgency, "calculate_urgency: assessed");
            Ok(AssessedSubject {
                subject: subject.clone(),
                exam,
                urgency,
            })
        })
        .collect()
}

/// `priority * 2 + difficulty + inverse_urgency`
///
/// Without an urgency the inverse urgency counts as 1.
pub fn priority_score(subject: &Subject, urgency: Option<&Urgency>) -> f64 {
    let inverse_urgency = urgency.map_or(DEFAULT_INVERSE_URGENCY, |u| u.inverse_urgency);
    f64::from(subject.priority) * 2.0 + f64::from(subject.difficulty) + inverse_urgency
}

/// Score every subject and order by descending score
///
/// Equal scores keep their input order.
pub fn sort_by_priority(subjects: Vec<AssessedSubject>) -> Vec<RankedSubject> {
    let mut ranked: Vec<RankedSubject> = subjects
        .into_iter()
        .map(|assessed| {
            let score = priority_score(&assessed.subject, Some(&assessed.urgency));
            RankedSubject { assessed, score }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(order = ?ranked.iter().map(RankedSubject::name).collect::<Vec<_>>(), "sort_by_priority: ranked");
    ranked
}
