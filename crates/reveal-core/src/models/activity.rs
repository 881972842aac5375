//! Plan activities: an action paired with its goal.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{PlanAction, PlanGoal};

/// Recognised activity codes. Only actions with one of these codes can be
/// composed into a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ActionCode {
    #[serde(rename = "BCC")]
    Bcc,
    #[serde(rename = "IRS")]
    Irs,
    #[serde(rename = "Bednet Distribution")]
    BednetDistribution,
    #[serde(rename = "Blood Screening")]
    BloodScreening,
    #[serde(rename = "Case Confirmation")]
    CaseConfirmation,
    #[serde(rename = "RACD Register Family")]
    FamilyRegistration,
    #[serde(rename = "Larval Dipping")]
    LarvalDipping,
    #[serde(rename = "Mosquito Collection")]
    MosquitoCollection,
}

impl ActionCode {
    pub const ALL: [ActionCode; 8] = [
        ActionCode::Bcc,
        ActionCode::Irs,
        ActionCode::BednetDistribution,
        ActionCode::BloodScreening,
        ActionCode::CaseConfirmation,
        ActionCode::FamilyRegistration,
        ActionCode::LarvalDipping,
        ActionCode::MosquitoCollection,
    ];

    /// Wire representation used as `action.code`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCode::Bcc => "BCC",
            ActionCode::Irs => "IRS",
            ActionCode::BednetDistribution => "Bednet Distribution",
            ActionCode::BloodScreening => "Blood Screening",
            ActionCode::CaseConfirmation => "Case Confirmation",
            ActionCode::FamilyRegistration => "RACD Register Family",
            ActionCode::LarvalDipping => "Larval Dipping",
            ActionCode::MosquitoCollection => "Mosquito Collection",
        }
    }

    /// Whether this activity belongs to IRS plans rather than FI plans.
    pub fn is_irs(&self) -> bool {
        matches!(self, ActionCode::Irs)
    }
}

impl FromStr for ActionCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("Unrecognised action code: {s}"))
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action together with the goal it works towards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanActivity {
    pub action: PlanAction,
    pub goal: PlanGoal,
}

impl PlanActivity {
    /// The recognised code of this activity's action, if any.
    pub fn code(&self) -> Option<ActionCode> {
        self.action.code.parse().ok()
    }
}
