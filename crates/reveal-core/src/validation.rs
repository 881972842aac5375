//! Schema validation of plan form values.
//!
//! Validation never fails with a Rust error. It returns every problem it
//! finds as a [`FieldError`] keyed by the form path of the offending value
//! (`activities[0].actionTitle`, `jurisdictions[1].id`, `name`, ...), so the
//! form can mark each field individually.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    form::{field, PlanActivityFormFields, PlanFormFields},
    models::{ActionCode, ActionReason, FiReason, FiStatus, GoalPriority, InterventionType},
};

/// Message for a missing required value.
pub const REQUIRED: &str = "Required";

/// A problem with a single form value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// All problems found in a plan form, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Whether any error is recorded for exactly `path`.
    pub fn has_error(&self, path: &str) -> bool {
        self.errors.iter().any(|error| error.path == path)
    }

    /// Messages recorded for exactly `path`.
    pub fn messages_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |error| error.path == path)
            .map(|error| error.message.as_str())
    }

    /// Whether `field` of activity row `index` has an error.
    pub fn activity_field_has_error(&self, index: usize, field: &str) -> bool {
        self.has_error(&indexed_path(field::ACTIVITIES, index, field))
    }

    /// Whether `field` of jurisdiction row `index` has an error.
    pub fn jurisdiction_field_has_error(&self, index: usize, field: &str) -> bool {
        self.has_error(&indexed_path(field::JURISDICTIONS, index, field))
    }

    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            path: path.into(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "- {}: {}", error.path, error.message)?;
        }
        Ok(())
    }
}

/// Validates the plan form.
pub fn validate_plan_form(form: &PlanFormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for (index, activity) in form.activities.iter().enumerate() {
        validate_activity(index, activity, &mut errors);
    }

    let case_triggered = form.fi_reason.as_deref() == Some(FiReason::CaseTriggered.as_str());
    if form.intervention_type == InterventionType::Fi
        && case_triggered
        && is_blank(form.case_num.as_deref().unwrap_or_default())
    {
        errors.push(field::CASE_NUM, REQUIRED);
    }

    if form.end < form.start {
        errors.push(field::END, "End date must not be before start date");
    }

    if let Some(reason) = non_blank(form.fi_reason.as_deref()) {
        one_of::<FiReason>(
            field::FI_REASON,
            reason,
            &FiReason::ALL.map(|reason| reason.as_str()),
            &mut errors,
        );
    }
    if let Some(status) = non_blank(form.fi_status.as_deref()) {
        one_of::<FiStatus>(
            field::FI_STATUS,
            status,
            &FiStatus::ALL.map(|status| status.as_str()),
            &mut errors,
        );
    }

    for (index, jurisdiction) in form.jurisdictions.iter().enumerate() {
        if is_blank(&jurisdiction.id) {
            errors.push(
                indexed_path(field::JURISDICTIONS, index, field::JURISDICTION_ID),
                REQUIRED,
            );
        }
    }

    if is_blank(&form.name) {
        errors.push(field::NAME, "Name is Required");
    }
    if is_blank(&form.title) {
        errors.push(field::TITLE, REQUIRED);
    }

    errors
}

fn validate_activity(index: usize, activity: &PlanActivityFormFields, errors: &mut ValidationErrors) {
    let path = |name: &str| indexed_path(field::ACTIVITIES, index, name);

    one_of::<ActionCode>(
        &path(field::ACTION_CODE),
        &activity.action_code,
        &ActionCode::ALL.map(|code| code.as_str()),
        errors,
    );

    for (name, value) in [
        (field::ACTION_DESCRIPTION, &activity.action_description),
        (field::ACTION_TITLE, &activity.action_title),
        (field::GOAL_DESCRIPTION, &activity.goal_description),
    ] {
        if is_blank(value) {
            errors.push(path(name), REQUIRED);
        }
    }

    required_one_of::<ActionReason>(
        &path(field::ACTION_REASON),
        &activity.action_reason,
        &ActionReason::ALL.map(|reason| reason.as_str()),
        errors,
    );
    required_one_of::<GoalPriority>(
        &path(field::GOAL_PRIORITY),
        &activity.goal_priority,
        &GoalPriority::ALL.map(|priority| priority.as_str()),
        errors,
    );

    if !activity.goal_value.is_finite() || activity.goal_value < 1.0 {
        errors.push(
            path(field::GOAL_VALUE),
            format!("{} must be greater than or equal to 1", field::GOAL_VALUE),
        );
    }
}

fn required_one_of<T: FromStr>(
    path: &str,
    value: &str,
    allowed: &[&str],
    errors: &mut ValidationErrors,
) {
    if is_blank(value) {
        errors.push(path, REQUIRED);
    } else {
        one_of::<T>(path, value, allowed, errors);
    }
}

fn one_of<T: FromStr>(
    path: &str,
    value: &str,
    allowed: &[&str],
    errors: &mut ValidationErrors,
) {
    if value.parse::<T>().is_err() {
        let field_name = path.rsplit('.').next().unwrap_or(path);
        errors.push(
            path,
            format!(
                "{field_name} must be one of the following values: {}",
                allowed.join(", ")
            ),
        );
    }
}

fn indexed_path(list: &str, index: usize, name: &str) -> String {
    format!("{list}[{index}].{name}")
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !is_blank(value))
}
