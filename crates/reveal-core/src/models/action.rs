//! Plan action model.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ActionReason;

/// Start and end of an action as wire-format date strings.
///
/// Empty strings mean "not scheduled yet".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TimingPeriod {
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub start: String,
}

/// The kind of entity an action's tasks are raised against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubjectCodableConcept {
    #[serde(default)]
    pub text: String,
}

/// A single task within a plan: what to do and when.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanAction {
    /// Activity code, one of the recognised action codes for composable plans
    pub code: String,

    #[serde(default)]
    pub description: String,

    /// Identifier of the goal this action works towards
    #[serde(default)]
    pub goal_id: String,

    /// Empty until the action is composed into a plan
    #[serde(default)]
    pub identifier: String,

    /// 1-based position of the action within its plan
    #[serde(default)]
    pub prefix: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ActionReason>,

    #[serde(default)]
    pub subject_codable_concept: SubjectCodableConcept,

    #[serde(default)]
    pub task_template: String,

    #[serde(default)]
    pub timing_period: TimingPeriod,

    #[serde(default)]
    pub title: String,
}
