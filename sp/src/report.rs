//! Text rendering of subjects, priorities and schedules

use colored::*;

use crate::domain::{RankedSubject, Schedule, Subject, UrgencyLevel};
use crate::stats::{PlanSummary, SubjectStatistics};

const RULE_WIDTH: usize = 60;

/// Horizontal rule used between report sections
pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

/// Section header framed by rules
pub fn section(title: &str) -> String {
    format!("{}\n{}\n{}\n", rule('-'), title.bold(), rule('-'))
}

fn urgency_label(level: UrgencyLevel) -> ColoredString {
    let text = level.to_string();
    match level {
        UrgencyLevel::Urgent => text.red().bold(),
        UrgencyLevel::Moderate => text.yellow(),
        UrgencyLevel::Ample => text.green(),
    }
}

/// Subjects as loaded, before scoring
pub fn render_subjects(subjects: &[Subject]) -> String {
    let mut out = section("Loaded subjects");
    for subject in subjects {
        out.push_str(&format!(" • {}\n", subject.name.cyan()));
        out.push_str(&format!("   Exam date: {}\n", subject.exam_date));
        out.push_str(&format!("   Difficulty: {}/5\n", subject.difficulty));
        out.push_str(&format!("   Priority: {}/5\n", subject.priority));
        out.push_str(&format!("   Required hours: {}h\n\n", subject.required_hours));
    }
    out
}

/// Ranked subjects with score, exam date, days remaining and urgency level
pub fn render_priorities(subjects: &[RankedSubject]) -> String {
    let mut out = section("Priority analysis");
    for (i, ranked) in subjects.iter().enumerate() {
        let urgency = ranked.urgency();
        out.push_str(&format!("{}. {}\n", i + 1, ranked.name().cyan()));
        out.push_str(&format!("   Priority score: {:.2}\n", ranked.score));
        out.push_str(&format!("   Exam date: {}\n", ranked.assessed.exam.format("%A %d %B %Y")));
        out.push_str(&format!(
            "   Days remaining: {} ({})\n",
            urgency.days_remaining,
            urgency_label(urgency.level())
        ));
        out.push_str(&format!("   Required hours: {}h\n\n", ranked.required_hours()));
    }
    out
}

/// Day-by-day sessions with each day's load
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = format!("{}\n{}\n{}\n\n", rule('='), "Your study schedule".bold(), rule('='));
    for day in schedule {
        out.push_str(&format!("{}\n", day.label.to_uppercase().bright_cyan()));
        out.push_str(&format!("   Load: {:.1}h\n\n", day.load()));
        for session in &day.sessions {
            out.push_str(&format!("   • {}: {:.1}h\n", session.subject, session.duration));
        }
        out.push('\n');
    }
    out
}

/// Totals for the generated plan
pub fn render_summary(summary: &PlanSummary) -> String {
    let mut out = format!("{}\n{}\n{}\n", rule('='), "Plan statistics".bold(), rule('='));
    out.push_str(&format!("Duration: {} days\n", summary.days));
    out.push_str(&format!("Total volume: {:.1} hours\n", summary.total_hours));
    out.push_str(&format!("Average per day: {:.1}h\n", summary.average_per_day));
    if !summary.is_complete() {
        out.push_str(&format!(
            "{} {:.1}h of {:.1}h could not be scheduled\n",
            "!".yellow(),
            summary.unscheduled_hours,
            summary.required_hours
        ));
    }
    out
}

/// Aggregate figures over the loaded subjects
pub fn render_statistics(stats: &SubjectStatistics) -> String {
    let mut out = section("Subject statistics");
    out.push_str(&format!("Subjects: {}\n", stats.subject_count));
    out.push_str(&format!("Total hours: {:.1}h\n", stats.total_hours));
    out.push_str(&format!("Average difficulty: {:.2}/5\n", stats.average_difficulty));
    out
}
