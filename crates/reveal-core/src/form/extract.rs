//! Plan activity → form row extraction and activity list building.

use jiff::civil::Date;
use log::warn;

use super::{DateDefault, PlanActivityFormFields};
use crate::{
    dates::parse_wire_date,
    models::{ActionCode, InterventionType, PlanActivity},
    settings::Settings,
    templates::{plan_activities, ActivityTemplates},
};

/// Converts a plan activity into a row of the plan form.
///
/// Never fails: absent text becomes an empty string and absent or
/// unparseable dates, priority and quantity fall back to the policy in
/// [`Settings::activity_defaults`].
pub fn extract_activity_for_form(
    activity: &PlanActivity,
    settings: &Settings,
) -> PlanActivityFormFields {
    let defaults = settings.activity_defaults();
    let action = &activity.action;
    let goal = &activity.goal;
    let target = goal.primary_target();

    let goal_value = target
        .map(|target| target.detail.detail_quantity.value)
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(defaults.goal_value);

    PlanActivityFormFields {
        action_code: action.code.clone(),
        action_description: action.description.clone(),
        action_identifier: action.identifier.clone(),
        action_reason: action
            .reason
            .map(|reason| reason.as_str().to_string())
            .unwrap_or_default(),
        action_title: action.title.clone(),
        goal_description: goal.description.clone(),
        goal_due: resolve_date(
            target.map(|target| target.due.as_str()).unwrap_or_default(),
            "goal.target.due",
            defaults.goal_due,
            settings,
        ),
        goal_priority: goal
            .priority
            .unwrap_or(defaults.goal_priority)
            .as_str()
            .to_string(),
        goal_value,
        timing_period_end: resolve_date(
            &action.timing_period.end,
            "action.timingPeriod.end",
            defaults.timing_period_end,
            settings,
        ),
        timing_period_start: resolve_date(
            &action.timing_period.start,
            "action.timingPeriod.start",
            defaults.timing_period_start,
            settings,
        ),
    }
}

/// Parses a stored date, falling back to `default` when it is empty and
/// warning when it is present but unparseable.
pub(super) fn resolve_date(
    value: &str,
    source: &str,
    default: DateDefault,
    settings: &Settings,
) -> Date {
    if value.trim().is_empty() {
        return default.resolve(settings);
    }
    parse_wire_date(value).unwrap_or_else(|| {
        warn!("unparseable date {value:?} in {source}, using default");
        default.resolve(settings)
    })
}

/// Form rows for every template in `templates`, ordered by action prefix.
///
/// The sort is stable, so templates sharing a prefix keep table order.
pub fn build_activity_list(
    templates: &ActivityTemplates,
    settings: &Settings,
) -> Vec<PlanActivityFormFields> {
    let mut activities: Vec<&PlanActivity> = templates.iter().map(|(_, activity)| activity).collect();
    activities.sort_by_key(|activity| activity.action.prefix);
    activities
        .into_iter()
        .map(|activity| extract_activity_for_form(activity, settings))
        .collect()
}

/// The activity rows shown for an intervention type, e.g. after the user
/// switches the intervention type on the form.
pub fn activities_for_intervention(
    intervention: InterventionType,
    settings: &Settings,
) -> Vec<PlanActivityFormFields> {
    build_activity_list(&plan_activities().for_intervention(intervention), settings)
}

/// Activity codes offered for `intervention` that no row in `rows` uses yet.
pub fn missing_activities(
    rows: &[PlanActivityFormFields],
    intervention: InterventionType,
) -> Vec<ActionCode> {
    let mut missing: Vec<(u32, ActionCode)> = plan_activities()
        .for_intervention(intervention)
        .iter()
        .filter(|(code, _)| !rows.iter().any(|row| row.action_code == code.as_str()))
        .map(|(code, activity)| (activity.action.prefix, code))
        .collect();
    missing.sort_by_key(|(prefix, _)| *prefix);
    missing.into_iter().map(|(_, code)| code).collect()
}
