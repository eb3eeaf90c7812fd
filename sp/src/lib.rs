//! StudyPlan - exam revision planner
//!
//! Builds a day-by-day revision schedule from a list of subjects, each with an
//! exam date, difficulty, priority and required study hours.
//!
//! # Pipeline
//!
//! ```text
//! subjects.json ─► loader ─► scorer ─► planner ─► report
//!                  Subject   Assessed  Schedule
//!                            Ranked
//! ```
//!
//! - Urgency is `30 / days_remaining`, with exams today or past counting as one day away.
//! - Priority score is `priority * 2 + difficulty + urgency`.
//! - Sessions are allocated greedily, highest score first, within a daily budget,
//!   capped at 2h and never shorter than 30 minutes, for at most 60 days.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use studyplan::{Planner, PlannerConfig, Subject};
//!
//! let subjects = vec![
//!     Subject::new("Math", "2026-10-23", 4, 5, 6.0),
//!     Subject::new("History", "2026-11-07", 2, 2, 4.0),
//! ];
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let planner = Planner::new(PlannerConfig::default()).unwrap();
//! let plan = planner.plan(&subjects, 3.0, today).unwrap();
//! assert_eq!(plan.subjects[0].name(), "Math");
//! assert_eq!(plan.schedule.total_hours(), 10.0);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod planner;
pub mod report;
pub mod scorer;
pub mod stats;

pub use config::Config;
pub use domain::{AssessedSubject, RankedSubject, Schedule, Session, StudyDay, Subject, Urgency, UrgencyLevel};
pub use error::{PlanError, PlanResult};
pub use loader::{load_subjects, parse_subjects};
pub use planner::{Plan, Planner, PlannerConfig};
pub use scorer::{calculate_urgency, priority_score, sort_by_priority};
pub use stats::{PlanSummary, SubjectStatistics};

/// Subject file used when neither the command line nor config names one
pub const DEFAULT_SUBJECTS_PATH: &str = "data/subjects.json";
