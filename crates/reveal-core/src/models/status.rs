//! Closed enumerations used by plans, actions and goals.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a plan definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Complete,
    /// New plans start as drafts
    #[default]
    Draft,
    Retired,
}

impl PlanStatus {
    pub const ALL: [PlanStatus; 4] = [
        PlanStatus::Active,
        PlanStatus::Complete,
        PlanStatus::Draft,
        PlanStatus::Retired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Complete => "complete",
            PlanStatus::Draft => "draft",
            PlanStatus::Retired => "retired",
        }
    }
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "complete" => Ok(PlanStatus::Complete),
            "draft" => Ok(PlanStatus::Draft),
            "retired" => Ok(PlanStatus::Retired),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

/// The kind of field campaign a plan describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum InterventionType {
    /// Focus Investigation
    #[default]
    #[serde(rename = "FI")]
    Fi,
    /// Indoor Residual Spraying
    #[serde(rename = "IRS")]
    Irs,
}

impl InterventionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionType::Fi => "FI",
            InterventionType::Irs => "IRS",
        }
    }
}

impl FromStr for InterventionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FI" => Ok(InterventionType::Fi),
            "IRS" => Ok(InterventionType::Irs),
            _ => Err(format!("Invalid intervention type: {s}")),
        }
    }
}

/// Why an action is being carried out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ActionReason {
    Investigation,
    Routine,
}

impl ActionReason {
    pub const ALL: [ActionReason; 2] = [ActionReason::Investigation, ActionReason::Routine];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionReason::Investigation => "Investigation",
            ActionReason::Routine => "Routine",
        }
    }
}

impl FromStr for ActionReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| format!("Invalid action reason: {s}"))
    }
}

/// Priority attached to a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum GoalPriority {
    LowPriority,
    #[default]
    MediumPriority,
    HighPriority,
}

impl GoalPriority {
    pub const ALL: [GoalPriority; 3] = [
        GoalPriority::LowPriority,
        GoalPriority::MediumPriority,
        GoalPriority::HighPriority,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPriority::LowPriority => "low-priority",
            GoalPriority::MediumPriority => "medium-priority",
            GoalPriority::HighPriority => "high-priority",
        }
    }
}

impl FromStr for GoalPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalPriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| format!("Invalid goal priority: {s}"))
    }
}

/// Reason a focus investigation was opened.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum FiReason {
    Routine,
    #[serde(rename = "Case Triggered")]
    CaseTriggered,
}

impl FiReason {
    pub const ALL: [FiReason; 2] = [FiReason::Routine, FiReason::CaseTriggered];

    pub fn as_str(&self) -> &'static str {
        match self {
            FiReason::Routine => "Routine",
            FiReason::CaseTriggered => "Case Triggered",
        }
    }
}

impl FromStr for FiReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FiReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| format!("Invalid FI reason: {s}"))
    }
}

/// Focus investigation case classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum FiStatus {
    A1,
    A2,
    B1,
    B2,
}

impl FiStatus {
    pub const ALL: [FiStatus; 4] = [FiStatus::A1, FiStatus::A2, FiStatus::B1, FiStatus::B2];

    pub fn as_str(&self) -> &'static str {
        match self {
            FiStatus::A1 => "A1",
            FiStatus::A2 => "A2",
            FiStatus::B1 => "B1",
            FiStatus::B2 => "B2",
        }
    }

    /// Human readable classification name.
    pub fn name(&self) -> &'static str {
        match self {
            FiStatus::A1 => "Active",
            FiStatus::A2 => "Residual Non-Active",
            FiStatus::B1 => "Cleared Receptive",
            FiStatus::B2 => "Cleared Non-Receptive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FiStatus::A1 => "Indigenous case recorded within the last year.",
            FiStatus::A2 => {
                "No indigenous case during the last year, but within the last 3 years."
            }
            FiStatus::B1 => "Receptive area but no indigenous cases within the last 3 years.",
            FiStatus::B2 => "Non-receptive area.",
        }
    }
}

impl FromStr for FiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FiStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid FI status: {s}"))
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    PlanStatus,
    InterventionType,
    ActionReason,
    GoalPriority,
    FiReason,
    FiStatus
);
