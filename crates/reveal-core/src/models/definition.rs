//! Plan definition document exchanged with the plans API.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{PlanAction, PlanGoal, PlanStatus};
use crate::error::Result;

/// `useContext` code carrying the intervention type.
pub const USE_CONTEXT_INTERVENTION_TYPE: &str = "interventionType";
pub const USE_CONTEXT_FI_REASON: &str = "fiReason";
pub const USE_CONTEXT_FI_STATUS: &str = "fiStatus";
pub const USE_CONTEXT_CASE_NUM: &str = "caseNum";
pub const USE_CONTEXT_OPENSRP_EVENT_ID: &str = "opensrpEventId";

/// A coded value describing the context a plan applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UseContext {
    pub code: String,
    pub value_codable_concept: String,
}

impl UseContext {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value_codable_concept: value.into(),
        }
    }
}

/// Reference to a jurisdiction the plan covers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanJurisdiction {
    pub code: String,
}

/// Wire-format start and end dates of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EffectivePeriod {
    pub end: String,
    pub start: String,
}

/// A complete plan: metadata plus parallel action and goal lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub identifier: String,
    pub version: String,
    pub name: String,
    pub title: String,
    pub status: PlanStatus,
    pub date: String,
    pub effective_period: EffectivePeriod,
    #[serde(default)]
    pub use_context: Vec<UseContext>,
    #[serde(default)]
    pub jurisdiction: Vec<PlanJurisdiction>,
    #[serde(default)]
    pub action: Vec<PlanAction>,
    #[serde(default)]
    pub goal: Vec<PlanGoal>,
}

impl PlanDefinition {
    /// Value of the first `useContext` entry with the given code.
    pub fn use_context_value(&self, code: &str) -> Option<&str> {
        self.use_context
            .iter()
            .find(|context| context.code == code)
            .map(|context| context.value_codable_concept.as_str())
    }

    /// Serialises the plan as the JSON body expected by the plans API.
    ///
    /// # Errors
    ///
    /// Returns `RevealError::Serialization` if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a plan definition received from the plans API.
    ///
    /// # Errors
    ///
    /// Returns `RevealError::Serialization` if the document does not match
    /// the plan definition shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
