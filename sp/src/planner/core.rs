//! Planner implementation

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{AssessedSubject, RankedSubject, Schedule, Session, StudyDay, Subject};
use crate::error::{PlanError, PlanResult};
use crate::scorer;
use crate::stats::PlanSummary;

use super::config::{PlannerConfig, is_exhausted};

/// Everything produced by one planning run
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub reference_date: NaiveDate,
    pub hours_per_day: f64,
    pub subjects: Vec<RankedSubject>,
    pub schedule: Schedule,
    pub summary: PlanSummary,
}

/// The Planner ranks subjects by urgency-weighted priority and allocates
/// study sessions day by day under a daily budget.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner, rejecting inconsistent policy
    pub fn new(config: PlannerConfig) -> PlanResult<Self> {
        debug!(?config, "Planner::new: called");
        config.validate()?;
        Ok(Self { config })
    }

    /// Days remaining and inverse urgency relative to `reference`
    pub fn assess(&self, subjects: &[Subject], reference: NaiveDate) -> PlanResult<Vec<AssessedSubject>> {
        scorer::calculate_urgency(subjects, reference, self.config.urgency_scale)
    }

    /// Assess and order by descending priority score
    pub fn rank(&self, subjects: &[Subject], reference: NaiveDate) -> PlanResult<Vec<RankedSubject>> {
        Ok(scorer::sort_by_priority(self.assess(subjects, reference)?))
    }

    /// Greedily allocate sessions day by day starting at `start`
    ///
    /// Subjects are served in slice order, so pass them highest score first.
    /// Stops when every subject is exhausted or after `max_days` simulated days;
    /// in the latter case the partial schedule is returned.
    pub fn generate_schedule(
        &self,
        subjects: &[RankedSubject],
        hours_per_day: f64,
        start: NaiveDate,
    ) -> PlanResult<Schedule> {
        debug!(count = subjects.len(), hours_per_day, %start, "Planner::generate_schedule: called");
        if !(hours_per_day.is_finite() && hours_per_day > 0.0) {
            return Err(PlanError::InvalidDailyBudget(hours_per_day));
        }

        let mut remaining: Vec<f64> = subjects.iter().map(RankedSubject::required_hours).collect();
        let mut schedule = Schedule::new();
        let mut cursor = start;
        let mut day_count = 0;

        while !remaining.iter().all(|&h| is_exhausted(h)) && day_count < self.config.max_days {
            let mut day = StudyDay::new(cursor);
            let mut hours_allocated = 0.0;

            for (subject, left) in subjects.iter().zip(remaining.iter_mut()) {
                if is_exhausted(*left) {
                    continue;
                }

                let available = hours_per_day - hours_allocated;
                if available <= 0.0 {
                    break;
                }

                let allocate = left.min(available).min(self.config.max_session_hours);
                if allocate < self.config.min_session_hours {
                    debug!(subject = %subject.name(), allocate, "Planner::generate_schedule: below minimum session, skipped");
                    continue;
                }

                day.sessions.push(Session {
                    subject: subject.name().to_string(),
                    duration: allocate,
                });
                *left -= allocate;
                hours_allocated += allocate;
            }

            if day.sessions.is_empty() {
                debug!(label = %day.label, "Planner::generate_schedule: no sessions, day omitted");
            }
            schedule.push_day(day);

            cursor = match cursor.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
            day_count += 1;
        }

        let unscheduled: f64 = remaining.iter().filter(|&&h| !is_exhausted(h)).sum();
        if !is_exhausted(unscheduled) {
            warn!(
                unscheduled,
                day_count,
                max_days = self.config.max_days,
                "Planner::generate_schedule: stopped with unscheduled hours"
            );
        }
        info!(
            days = schedule.day_count(),
            hours = schedule.total_hours(),
            "Planner::generate_schedule: done"
        );
        Ok(schedule)
    }

    /// Rank the subjects and build their schedule from `reference` onwards
    pub fn plan(&self, subjects: &[Subject], hours_per_day: f64, reference: NaiveDate) -> PlanResult<Plan> {
        let ranked = self.rank(subjects, reference)?;
        let schedule = self.generate_schedule(&ranked, hours_per_day, reference)?;
        let summary = PlanSummary::new(&schedule, &ranked);
        Ok(Plan {
            reference_date: reference,
            hours_per_day,
            subjects: ranked,
            schedule,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::EXAM_DATE_FORMAT;
    use chrono::Duration;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn subject_in(name: &str, days: i64, difficulty: u8, priority: u8, hours: f64) -> Subject {
        let exam = today() + Duration::days(days);
        Subject::new(name, exam.format(EXAM_DATE_FORMAT).to_string(), difficulty, priority, hours)
    }

    fn planner() -> Planner {
        Planner::new(PlannerConfig::default()).unwrap()
    }

    #[test]
    fn test_math_and_history() {
        let subjects = vec![
            subject_in("History", 20, 2, 2, 4.0),
            subject_in("Math", 5, 4, 5, 6.0),
        ];
        let plan = planner().plan(&subjects, 3.0, today()).unwrap();

        assert_eq!(plan.subjects[0].name(), "Math");
        let first = &plan.schedule.days()[0];
        assert_eq!(first.label, "Sunday 2026-10-18");
        assert_eq!(first.sessions[0].subject, "Math");
        assert_eq!(first.sessions[0].duration, 2.0);
        assert_eq!(first.sessions[1].subject, "History");
        assert_eq!(first.sessions[1].duration, 1.0);

        assert!((plan.schedule.total_hours() - 10.0).abs() < TOLERANCE);
        assert!((plan.schedule.hours_for("Math") - 6.0).abs() < TOLERANCE);
        assert!((plan.schedule.hours_for("History") - 4.0).abs() < TOLERANCE);
        for day in &plan.schedule {
            assert!(day.load() <= 3.0 + TOLERANCE, "{} over budget", day.label);
        }
        assert_eq!(plan.summary.unscheduled_hours, 0.0);
    }

    #[test]
    fn test_zero_hour_subject_never_scheduled() {
        let subjects = vec![subject_in("Done", 3, 5, 5, 0.0), subject_in("Math", 5, 4, 5, 3.0)];
        let plan = planner().plan(&subjects, 2.0, today()).unwrap();
        assert!(plan.schedule.sessions().all(|s| s.subject != "Done"));
        assert!((plan.schedule.total_hours() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_budget_below_minimum_session_is_empty() {
        let subjects = vec![subject_in("Math", 5, 4, 5, 6.0)];
        let plan = planner().plan(&subjects, 0.4, today()).unwrap();
        assert!(plan.schedule.is_empty());
        assert_eq!(plan.summary.unscheduled_hours, 6.0);
    }

    #[test]
    fn test_empty_subjects_give_empty_schedule() {
        let schedule = planner().generate_schedule(&[], 3.0, today()).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_rejects_non_positive_budget() {
        let ranked = planner().rank(&[subject_in("Math", 5, 4, 5, 6.0)], today()).unwrap();
        assert!(matches!(
            planner().generate_schedule(&ranked, 0.0, today()),
            Err(PlanError::InvalidDailyBudget(_))
        ));
        assert!(planner().generate_schedule(&ranked, -2.0, today()).is_err());
        assert!(planner().generate_schedule(&ranked, f64::NAN, today()).is_err());
    }

    #[test]
    fn test_sub_threshold_residue_is_left_alone() {
        // 2.3h with a 2h budget: 2.0 on day one, 0.3 never reaches the minimum
        let subjects = vec![subject_in("Math", 5, 4, 5, 2.3)];
        let plan = planner().plan(&subjects, 2.0, today()).unwrap();
        assert_eq!(plan.schedule.day_count(), 1);
        assert!((plan.summary.unscheduled_hours - 0.3).abs() < TOLERANCE);
    }

    #[test]
    fn test_sub_threshold_residue_does_not_block_later_subjects() {
        // Day two: A has 0.3h left, below the minimum, so B still gets its session
        let subjects = vec![subject_in("A", 1, 5, 5, 2.3), subject_in("B", 30, 1, 1, 2.0)];
        let plan = planner().plan(&subjects, 2.0, today()).unwrap();

        let days = plan.schedule.days();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].sessions, vec![Session { subject: "A".to_string(), duration: 2.0 }]);
        assert_eq!(days[1].label, "Monday 2026-10-19");
        assert_eq!(days[1].sessions, vec![Session { subject: "B".to_string(), duration: 2.0 }]);
        assert!((plan.summary.unscheduled_hours - 0.3).abs() < TOLERANCE);
    }

    #[test]
    fn test_float_residue_counts_as_done() {
        // 1.0000000000000002h against a 1h budget leaves a ~2e-16 residue
        let subjects = vec![subject_in("Math", 5, 4, 5, 1.000_000_000_000_000_2)];
        let plan = planner().plan(&subjects, 1.0, today()).unwrap();
        assert_eq!(plan.schedule.day_count(), 1);
        assert_eq!(plan.schedule.days()[0].sessions[0].duration, 1.0);
        assert!(plan.summary.is_complete());
    }

    #[test]
    fn test_safety_bound_returns_partial_schedule() {
        let config = PlannerConfig {
            max_days: 5,
            ..Default::default()
        };
        let planner = Planner::new(config).unwrap();
        let subjects = vec![subject_in("Thesis", 30, 5, 5, 100.0)];
        let plan = planner.plan(&subjects, 2.0, today()).unwrap();
        assert_eq!(plan.schedule.day_count(), 5);
        assert!((plan.schedule.total_hours() - 10.0).abs() < TOLERANCE);
        assert!((plan.summary.unscheduled_hours - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_budget_exhaustion_stops_later_subjects() {
        let subjects = vec![
            subject_in("A", 1, 5, 5, 4.0),
            subject_in("B", 2, 5, 5, 4.0),
            subject_in("C", 30, 1, 1, 4.0),
        ];
        let plan = planner().plan(&subjects, 4.0, today()).unwrap();
        let first = &plan.schedule.days()[0];
        let names: Vec<_> = first.sessions.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_days_are_consecutive_from_reference() {
        let subjects = vec![subject_in("Math", 5, 4, 5, 6.0)];
        let plan = planner().plan(&subjects, 2.0, today()).unwrap();
        let labels: Vec<_> = plan.schedule.days().iter().map(|d| d.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Sunday 2026-10-18", "Monday 2026-10-19", "Tuesday 2026-10-20"]
        );
    }

    #[test]
    fn test_custom_session_policy() {
        let config = PlannerConfig {
            max_session_hours: 1.0,
            min_session_hours: 0.25,
            ..Default::default()
        };
        let planner = Planner::new(config).unwrap();
        let subjects = vec![subject_in("Math", 5, 4, 5, 2.5)];
        let plan = planner.plan(&subjects, 4.0, today()).unwrap();
        let durations: Vec<_> = plan.schedule.sessions().map(|s| s.duration).collect();
        // Each subject gets at most one session per day
        assert_eq!(durations, vec![1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_invalid_exam_date_aborts_plan() {
        let subjects = vec![Subject::new("Math", "not-a-date", 4, 5, 6.0)];
        assert!(matches!(
            planner().plan(&subjects, 3.0, today()),
            Err(PlanError::InvalidExamDate { .. })
        ));
    }

    fn arb_subjects() -> impl Strategy<Value = Vec<Subject>> {
        prop::collection::vec((-5i64..90, 1u8..=5, 1u8..=5, 0.0f64..40.0), 0..8).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (days, difficulty, priority, hours))| {
                    subject_in(&format!("S{}", i), days, difficulty, priority, hours)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_sessions_within_bounds(subjects in arb_subjects(), budget in 0.1f64..12.0) {
            let plan = planner().plan(&subjects, budget, today()).unwrap();
            for session in plan.schedule.sessions() {
                prop_assert!(session.duration >= 0.5);
                prop_assert!(session.duration <= 2.0);
            }
        }

        #[test]
        fn prop_daily_load_within_budget(subjects in arb_subjects(), budget in 0.1f64..12.0) {
            let plan = planner().plan(&subjects, budget, today()).unwrap();
            for day in &plan.schedule {
                prop_assert!(day.load() <= budget + TOLERANCE);
            }
        }

        #[test]
        fn prop_terminates_within_max_days(subjects in arb_subjects(), budget in 0.1f64..12.0) {
            let plan = planner().plan(&subjects, budget, today()).unwrap();
            prop_assert!(plan.schedule.day_count() <= 60);
            if let Some(last) = plan.schedule.days().last() {
                prop_assert!((last.date - today()).num_days() < 60);
            }
        }

        #[test]
        fn prop_never_overallocates(subjects in arb_subjects(), budget in 0.1f64..12.0) {
            let plan = planner().plan(&subjects, budget, today()).unwrap();
            for subject in &subjects {
                prop_assert!(plan.schedule.hours_for(&subject.name) <= subject.required_hours + TOLERANCE);
            }
        }

        #[test]
        fn prop_ranking_is_non_increasing(subjects in arb_subjects()) {
            let ranked = planner().rank(&subjects, today()).unwrap();
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for r in &ranked {
                let s = r.subject();
                let expected = f64::from(s.priority) * 2.0 + f64::from(s.difficulty) + r.urgency().inverse_urgency;
                prop_assert_eq!(r.score, expected);
                prop_assert!(r.urgency().days_remaining >= 1);
                prop_assert!(r.urgency().inverse_urgency > 0.0);
            }
        }
    }
}
