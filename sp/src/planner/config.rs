//! Planner policy configuration

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Safety bound on simulated days
pub const DEFAULT_MAX_DAYS: u32 = 60;

/// Longest single session, in hours
pub const DEFAULT_MAX_SESSION_HOURS: f64 = 2.0;

/// Shortest session worth scheduling, in hours
pub const DEFAULT_MIN_SESSION_HOURS: f64 = 0.5;

/// Numerator of the inverse urgency
pub const DEFAULT_URGENCY_SCALE: f64 = 30.0;

/// Remaining hours at or below this count as done
pub const EXHAUSTED_EPSILON: f64 = 1e-9;

/// Whether a remaining-hours counter is used up, absorbing float residue
pub fn is_exhausted(hours: f64) -> bool {
    hours <= EXHAUSTED_EPSILON
}

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Days simulated before giving up on unscheduled hours
    #[serde(default = "default_max_days", rename = "max-days")]
    pub max_days: u32,

    /// Cap on a single session
    #[serde(default = "default_max_session_hours", rename = "max-session-hours")]
    pub max_session_hours: f64,

    /// Allocations shorter than this are skipped for the day
    #[serde(default = "default_min_session_hours", rename = "min-session-hours")]
    pub min_session_hours: f64,

    /// Scale factor for inverse urgency
    #[serde(default = "default_urgency_scale", rename = "urgency-scale")]
    pub urgency_scale: f64,
}

fn default_max_days() -> u32 {
    DEFAULT_MAX_DAYS
}

fn default_max_session_hours() -> f64 {
    DEFAULT_MAX_SESSION_HOURS
}

fn default_min_session_hours() -> f64 {
    DEFAULT_MIN_SESSION_HOURS
}

fn default_urgency_scale() -> f64 {
    DEFAULT_URGENCY_SCALE
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_DAYS,
            max_session_hours: DEFAULT_MAX_SESSION_HOURS,
            min_session_hours: DEFAULT_MIN_SESSION_HOURS,
            urgency_scale: DEFAULT_URGENCY_SCALE,
        }
    }
}

impl PlannerConfig {
    /// Reject policies the allocator cannot honor
    pub fn validate(&self) -> PlanResult<()> {
        if self.max_days == 0 {
            return Err(PlanError::InvalidConfig("max-days must be at least 1".to_string()));
        }
        if !(self.min_session_hours.is_finite() && self.min_session_hours > 0.0) {
            return Err(PlanError::InvalidConfig(format!(
                "min-session-hours must be positive, got {}",
                self.min_session_hours
            )));
        }
        if !self.max_session_hours.is_finite() || self.max_session_hours < self.min_session_hours {
            return Err(PlanError::InvalidConfig(format!(
                "max-session-hours ({}) must not be below min-session-hours ({})",
                self.max_session_hours, self.min_session_hours
            )));
        }
        if !(self.urgency_scale.is_finite() && self.urgency_scale > 0.0) {
            return Err(PlanError::InvalidConfig(format!(
                "urgency-scale must be positive, got {}",
                self.urgency_scale
            )));
        }
        Ok(())
    }
}
