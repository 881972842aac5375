//! Default-value policy for activity form fields.

use jiff::{civil::Date, ToSpan};

use crate::{
    models::{ActionReason, GoalPriority},
    settings::Settings,
};

/// How a missing date is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDefault {
    Today,
    /// Today plus the configured activity duration
    ActivityDue,
    /// Today plus the configured plan duration
    PlanEnd,
    DaysFromToday(i64),
}

impl DateDefault {
    pub fn resolve(&self, settings: &Settings) -> Date {
        match self {
            DateDefault::Today => settings.today(),
            DateDefault::ActivityDue => settings.activity_due_date(),
            DateDefault::PlanEnd => settings.plan_end_date(),
            DateDefault::DaysFromToday(days) => settings.today().saturating_add((*days).days()),
        }
    }
}

/// What each activity field falls back to when the source leaves it unset.
///
/// Text fields always fall back to an empty string and are not listed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFieldDefaults {
    pub goal_due: DateDefault,
    pub timing_period_start: DateDefault,
    pub timing_period_end: DateDefault,
    pub goal_priority: GoalPriority,
    pub goal_value: f64,
    /// Reason preselected on a blank activity row
    pub action_reason: ActionReason,
}

impl Default for ActivityFieldDefaults {
    fn default() -> Self {
        Self {
            goal_due: DateDefault::ActivityDue,
            timing_period_start: DateDefault::Today,
            timing_period_end: DateDefault::ActivityDue,
            goal_priority: GoalPriority::MediumPriority,
            goal_value: 0.0,
            action_reason: ActionReason::Investigation,
        }
    }
}
