//! Form rows → plan actions and goals.

use log::{debug, warn};

use super::PlanActivityFormFields;
use crate::{
    dates::format_wire_date,
    identifiers::generate_action_identifier,
    models::{ActionCode, ActionReason, GoalPriority, PlanAction, PlanGoal, TimingPeriod},
    settings::Settings,
    templates::{plan_activities, ActivityTemplates},
};

/// Parallel action and goal lists composed from the form, one pair per
/// recognised row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposedActivities {
    pub action: Vec<PlanAction>,
    pub goal: Vec<PlanGoal>,
}

impl ComposedActivities {
    pub fn len(&self) -> usize {
        self.action.len()
    }

    pub fn is_empty(&self) -> bool {
        self.action.is_empty()
    }
}

/// Composes actions and goals from edited form rows using the built-in
/// templates. See [`compose_activities_with`].
pub fn compose_activities(
    rows: &[PlanActivityFormFields],
    plan_identifier: Option<&str>,
    settings: &Settings,
) -> ComposedActivities {
    compose_activities_with(plan_activities(), rows, plan_identifier, settings)
}

/// Composes actions and goals from edited form rows.
///
/// Each recognised row starts from a fresh copy of its template, so template
/// fields the form does not edit (goal id, task template, target comparator,
/// unit and measure) carry through unchanged. The action prefix is the row's
/// 1-based position in `rows`. Rows with an unknown action code, reason or
/// priority are skipped.
pub fn compose_activities_with(
    templates: &ActivityTemplates,
    rows: &[PlanActivityFormFields],
    plan_identifier: Option<&str>,
    settings: &Settings,
) -> ComposedActivities {
    let mut composed = ComposedActivities::default();

    for (index, row) in rows.iter().enumerate() {
        let Some((code, reason, priority)) = parse_row(index, row) else {
            continue;
        };
        let Some(mut activity) = templates.instantiate(code) else {
            warn!("activities[{index}]: no template for {code}, skipping");
            continue;
        };

        let identifier = if row.action_identifier.trim().is_empty() {
            generate_action_identifier(
                plan_identifier.unwrap_or_default(),
                &activity.action.goal_id,
                settings.action_namespace(),
            )
        } else {
            row.action_identifier.clone()
        };

        let action = &mut activity.action;
        action.description = row.action_description.clone();
        action.identifier = identifier;
        action.prefix = index as u32 + 1;
        action.reason = Some(reason);
        action.timing_period = TimingPeriod {
            end: format_wire_date(row.timing_period_end),
            start: format_wire_date(row.timing_period_start),
        };
        action.title = row.action_title.clone();

        let goal = &mut activity.goal;
        goal.description = row.goal_description.clone();
        goal.priority = Some(priority);
        if let Some(target) = goal.target.first_mut() {
            target.detail.detail_quantity.value = row.goal_value;
            target.due = format_wire_date(row.goal_due);
        }

        composed.action.push(activity.action);
        composed.goal.push(activity.goal);
    }

    debug!(
        "composed {} of {} activity rows",
        composed.len(),
        rows.len()
    );
    composed
}

fn parse_row(
    index: usize,
    row: &PlanActivityFormFields,
) -> Option<(ActionCode, ActionReason, GoalPriority)> {
    let code = match row.action_code.parse::<ActionCode>() {
        Ok(code) => code,
        Err(e) => {
            debug!("activities[{index}]: {e}, skipping");
            return None;
        }
    };
    let reason = match row.action_reason.parse::<ActionReason>() {
        Ok(reason) => reason,
        Err(e) => {
            warn!("activities[{index}]: {e}, skipping");
            return None;
        }
    };
    let priority = match row.goal_priority.parse::<GoalPriority>() {
        Ok(priority) => priority,
        Err(e) => {
            warn!("activities[{index}]: {e}, skipping");
            return None;
        }
    };
    Some((code, reason, priority))
}
