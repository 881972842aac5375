//! Initial form values for new plans and form values for existing plans.

use log::warn;

use super::{
    activities_for_intervention, extract::resolve_date, extract_activity_for_form, DateDefault,
    PlanActivityFormFields, PlanFormFields, PlanJurisdictionFormFields,
};
use crate::{
    models::{
        definition::{
            USE_CONTEXT_CASE_NUM, USE_CONTEXT_FI_REASON, USE_CONTEXT_FI_STATUS,
            USE_CONTEXT_INTERVENTION_TYPE, USE_CONTEXT_OPENSRP_EVENT_ID,
        },
        InterventionType, PlanAction, PlanActivity, PlanDefinition, PlanGoal, PlanStatus,
    },
    settings::Settings,
};

/// Values of the plan form when creating a new FI plan.
pub fn initial_plan_form(settings: &Settings) -> PlanFormFields {
    let today = settings.today();
    PlanFormFields {
        activities: activities_for_intervention(InterventionType::Fi, settings),
        case_num: None,
        date: today,
        end: settings.plan_end_date(),
        fi_reason: None,
        fi_status: None,
        identifier: String::new(),
        intervention_type: InterventionType::Fi,
        jurisdictions: Vec::new(),
        name: String::new(),
        opensrp_event_id: None,
        start: today,
        status: PlanStatus::Draft,
        title: String::new(),
        version: settings.default_plan_version().to_string(),
    }
}

/// A blank activity row with every default applied.
pub fn initial_activity_fields(settings: &Settings) -> PlanActivityFormFields {
    let defaults = settings.activity_defaults();
    PlanActivityFormFields {
        action_code: String::new(),
        action_description: String::new(),
        action_identifier: String::new(),
        action_reason: defaults.action_reason.as_str().to_string(),
        action_title: String::new(),
        goal_description: String::new(),
        goal_due: defaults.goal_due.resolve(settings),
        goal_priority: defaults.goal_priority.as_str().to_string(),
        goal_value: defaults.goal_value,
        timing_period_end: defaults.timing_period_end.resolve(settings),
        timing_period_start: defaults.timing_period_start.resolve(settings),
    }
}

/// Form values for editing an existing plan.
///
/// Actions are paired with goals by goal id, falling back to the goal at the
/// same position; actions with neither are left out. Jurisdiction names are
/// not part of a plan definition and come back empty.
pub fn plan_form_from_definition(plan: &PlanDefinition, settings: &Settings) -> PlanFormFields {
    let mut actions: Vec<(usize, &PlanAction)> = plan.action.iter().enumerate().collect();
    actions.sort_by_key(|(_, action)| action.prefix);

    let activities = actions
        .into_iter()
        .filter_map(|(position, action)| {
            let Some(goal) = find_goal(plan, action, position) else {
                warn!(
                    "plan {}: no goal for action {:?}, leaving it out",
                    plan.identifier, action.identifier
                );
                return None;
            };
            let activity = PlanActivity {
                action: action.clone(),
                goal: goal.clone(),
            };
            Some(extract_activity_for_form(&activity, settings))
        })
        .collect();

    let intervention_type = match plan.use_context_value(USE_CONTEXT_INTERVENTION_TYPE) {
        Some(value) => value.parse::<InterventionType>().unwrap_or_else(|e| {
            warn!("plan {}: {e}, assuming FI", plan.identifier);
            InterventionType::Fi
        }),
        None => InterventionType::Fi,
    };
    let context = |code: &str| {
        plan.use_context_value(code)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    PlanFormFields {
        activities,
        case_num: context(USE_CONTEXT_CASE_NUM),
        date: resolve_date(&plan.date, "date", DateDefault::Today, settings),
        end: resolve_date(
            &plan.effective_period.end,
            "effectivePeriod.end",
            DateDefault::PlanEnd,
            settings,
        ),
        fi_reason: context(USE_CONTEXT_FI_REASON),
        fi_status: context(USE_CONTEXT_FI_STATUS),
        identifier: plan.identifier.clone(),
        intervention_type,
        jurisdictions: plan
            .jurisdiction
            .iter()
            .map(|jurisdiction| PlanJurisdictionFormFields {
                id: jurisdiction.code.clone(),
                name: String::new(),
            })
            .collect(),
        name: plan.name.clone(),
        opensrp_event_id: context(USE_CONTEXT_OPENSRP_EVENT_ID),
        start: resolve_date(
            &plan.effective_period.start,
            "effectivePeriod.start",
            DateDefault::Today,
            settings,
        ),
        status: plan.status,
        title: plan.title.clone(),
        version: plan.version.clone(),
    }
}

fn find_goal<'a>(plan: &'a PlanDefinition, action: &PlanAction, position: usize) -> Option<&'a PlanGoal> {
    plan.goal
        .iter()
        .find(|goal| !action.goal_id.is_empty() && goal.id == action.goal_id)
        .or_else(|| plan.goal.get(position))
}
