//! Plan goal model.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::GoalPriority;

/// Quantity a goal target aims for, e.g. `>= 90 Percent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DetailQuantity {
    #[serde(default)]
    pub comparator: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GoalDetail {
    #[serde(default)]
    pub detail_quantity: DetailQuantity,
}

/// One measurable target of a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GoalTarget {
    #[serde(default)]
    pub detail: GoalDetail,
    /// Wire-format due date; empty when unscheduled
    #[serde(default)]
    pub due: String,
    #[serde(default)]
    pub measure: String,
}

/// The measurable target associated with an action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanGoal {
    #[serde(default)]
    pub description: String,

    /// Matches the `goalId` of the action working towards this goal
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<GoalPriority>,

    /// Only the first target is editable through the plan form
    #[serde(default)]
    pub target: Vec<GoalTarget>,
}

impl PlanGoal {
    /// The first target, which is the one the plan form edits.
    pub fn primary_target(&self) -> Option<&GoalTarget> {
        self.target.first()
    }
}
