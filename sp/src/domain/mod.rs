//! Domain types for the study planner
//!
//! Raw subject records, the enriched forms produced by scoring, and the
//! schedule produced by the planner.

mod schedule;
mod subject;
mod urgency;

pub use schedule::{Schedule, Session, StudyDay, day_label};
pub use subject::{AssessedSubject, DEFAULT_INVERSE_URGENCY, DEFAULT_RATING, RankedSubject, Subject};
pub use urgency::{Urgency, UrgencyLevel};
