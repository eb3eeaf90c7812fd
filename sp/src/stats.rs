//! Subject and plan statistics

use serde::Serialize;

use crate::domain::{RankedSubject, Schedule, Subject};
use crate::error::{PlanError, PlanResult};
use crate::planner::is_exhausted;

/// Aggregate figures over the loaded subjects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectStatistics {
    pub total_hours: f64,
    pub subject_count: usize,
    pub average_difficulty: f64,
}

impl SubjectStatistics {
    /// Fails with [`PlanError::NoSubjects`] on an empty list
    pub fn compute(subjects: &[Subject]) -> PlanResult<Self> {
        if subjects.is_empty() {
            return Err(PlanError::NoSubjects);
        }
        let total_hours = subjects.iter().map(|s| s.required_hours).sum();
        let difficulty: f64 = subjects.iter().map(|s| f64::from(s.difficulty)).sum();
        Ok(Self {
            total_hours,
            subject_count: subjects.len(),
            average_difficulty: difficulty / subjects.len() as f64,
        })
    }
}

/// Totals for a generated schedule
///
/// `unscheduled_hours` is non-zero when the safety bound or the minimum
/// session length left part of the required hours unallocated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanSummary {
    pub days: usize,
    pub total_hours: f64,
    pub average_per_day: f64,
    pub required_hours: f64,
    pub unscheduled_hours: f64,
}

impl PlanSummary {
    pub fn new(schedule: &Schedule, subjects: &[RankedSubject]) -> Self {
        let days = schedule.day_count();
        let total_hours = schedule.total_hours();
        let required_hours: f64 = subjects.iter().map(RankedSubject::required_hours).sum();
        let unscheduled = required_hours - total_hours;
        Self {
            days,
            total_hours,
            average_per_day: if days == 0 { 0.0 } else { total_hours / days as f64 },
            required_hours,
            unscheduled_hours: if is_exhausted(unscheduled) { 0.0 } else { unscheduled },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unscheduled_hours == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Session, StudyDay};
    use chrono::NaiveDate;

    #[test]
    fn test_subject_statistics() {
        let subjects = vec![
            Subject::new("Math", "2026-10-23", 4, 5, 6.0),
            Subject::new("History", "2026-11-07", 2, 2, 4.0),
            Subject::new("Physics", "2026-11-01", 3, 3, 5.5),
        ];
        let stats = SubjectStatistics::compute(&subjects).unwrap();
        assert_eq!(stats.subject_count, 3);
        assert_eq!(stats.total_hours, 15.5);
        assert_eq!(stats.average_difficulty, 3.0);
    }

    #[test]
    fn test_subject_statistics_empty() {
        assert!(matches!(SubjectStatistics::compute(&[]), Err(PlanError::NoSubjects)));
    }

    #[test]
    fn test_plan_summary_empty_schedule() {
        let summary = PlanSummary::new(&Schedule::new(), &[]);
        assert_eq!(summary.days, 0);
        assert_eq!(summary.average_per_day, 0.0);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_plan_summary_average() {
        let mut schedule = Schedule::new();
        for (day, hours) in [(19, 3.0), (20, 1.0)] {
            let mut d = StudyDay::new(NaiveDate::from_ymd_opt(2026, 10, day).unwrap());
            d.sessions.push(Session {
                subject: "Math".to_string(),
                duration: hours,
            });
            schedule.push_day(d);
        }
        let summary = PlanSummary::new(&schedule, &[]);
        assert_eq!(summary.days, 2);
        assert_eq!(summary.total_hours, 4.0);
        assert_eq!(summary.average_per_day, 2.0);
    }
}
