//! Study planner
//!
//! Ranks subjects and allocates study sessions across consecutive days.

mod config;
mod core;

pub use config::{
    DEFAULT_MAX_DAYS, DEFAULT_MAX_SESSION_HOURS, DEFAULT_MIN_SESSION_HOURS, DEFAULT_URGENCY_SCALE, EXHAUSTED_EPSILON,
    PlannerConfig, is_exhausted,
};
pub use core::{Plan, Planner};
