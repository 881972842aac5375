//! Flat, UI-facing plan form values.
//!
//! Enumerated values the user picks from a list (action code, reason,
//! priority, FI status and reason) are carried as raw strings so that a bad
//! selection surfaces as a validation error instead of a deserialisation
//! failure. Dates are calendar dates, not strings.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{InterventionType, PlanStatus};

/// Form field names as they appear in validation paths.
pub mod field {
    pub const ACTION_CODE: &str = "actionCode";
    pub const ACTION_DESCRIPTION: &str = "actionDescription";
    pub const ACTION_REASON: &str = "actionReason";
    pub const ACTION_TITLE: &str = "actionTitle";
    pub const GOAL_DESCRIPTION: &str = "goalDescription";
    pub const GOAL_PRIORITY: &str = "goalPriority";
    pub const GOAL_VALUE: &str = "goalValue";

    pub const ACTIVITIES: &str = "activities";
    pub const CASE_NUM: &str = "caseNum";
    pub const END: &str = "end";
    pub const FI_REASON: &str = "fiReason";
    pub const FI_STATUS: &str = "fiStatus";
    pub const JURISDICTIONS: &str = "jurisdictions";
    pub const JURISDICTION_ID: &str = "id";
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
}

/// One editable activity row of the plan form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanActivityFormFields {
    pub action_code: String,
    pub action_description: String,
    /// Empty for rows whose action has not been saved yet
    #[serde(default)]
    pub action_identifier: String,
    pub action_reason: String,
    pub action_title: String,
    pub goal_description: String,
    pub goal_due: Date,
    pub goal_priority: String,
    pub goal_value: f64,
    pub timing_period_end: Date,
    pub timing_period_start: Date,
}

/// A jurisdiction selected on the plan form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanJurisdictionFormFields {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Every value of the plan form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanFormFields {
    pub activities: Vec<PlanActivityFormFields>,
    #[serde(default)]
    pub case_num: Option<String>,
    pub date: Date,
    pub end: Date,
    #[serde(default)]
    pub fi_reason: Option<String>,
    #[serde(default)]
    pub fi_status: Option<String>,
    /// Empty when creating a new plan
    #[serde(default)]
    pub identifier: String,
    pub intervention_type: InterventionType,
    #[serde(default)]
    pub jurisdictions: Vec<PlanJurisdictionFormFields>,
    pub name: String,
    #[serde(default)]
    pub opensrp_event_id: Option<String>,
    pub start: Date,
    pub status: PlanStatus,
    pub title: String,
    #[serde(default)]
    pub version: String,
}

impl PlanFormFields {
    /// Whether the form edits a plan that already exists on the server.
    pub fn is_existing_plan(&self) -> bool {
        !self.identifier.trim().is_empty()
    }
}
