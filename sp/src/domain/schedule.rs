//! Generated study schedule

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single contiguous block of study for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub subject: String,
    /// Hours
    pub duration: f64,
}

/// One calendar day of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDay {
    pub date: NaiveDate,
    pub label: String,
    pub sessions: Vec<Session>,
}

impl StudyDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            label: day_label(date),
            sessions: Vec::new(),
        }
    }

    /// Sum of session durations for this day
    pub fn load(&self) -> f64 {
        self.sessions.iter().map(|s| s.duration).sum()
    }
}

/// Format a day as `<weekday> <YYYY-MM-DD>`, e.g. `Monday 2026-10-19`
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A %Y-%m-%d").to_string()
}

/// Days in calendar order, each with its ordered sessions
///
/// Days without sessions are never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<StudyDay>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a day; empty days are dropped
    pub fn push_day(&mut self, day: StudyDay) {
        if !day.sessions.is_empty() {
            self.days.push(day);
        }
    }

    pub fn days(&self) -> &[StudyDay] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.days.iter().flat_map(|d| d.sessions.iter())
    }

    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(StudyDay::load).sum()
    }

    /// Total hours scheduled for one subject
    pub fn hours_for(&self, subject: &str) -> f64 {
        self.sessions().filter(|s| s.subject == subject).map(|s| s.duration).sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a StudyDay;
    type IntoIter = std::slice::Iter<'a, StudyDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
