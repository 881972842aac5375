//! Domain models for plan definitions.
//!
//! These mirror the FHIR-like plan definition documents served by the plans
//! API. Field names serialise in camelCase and dates travel as `YYYY-MM-DD`
//! strings; the plan form works on [`jiff::civil::Date`] values instead and
//! converts at the boundary (see [`crate::dates`]).
//!
//! # Examples
//!
//! ```rust
//! use reveal_core::models::{ActionCode, GoalPriority, PlanStatus};
//!
//! assert_eq!(ActionCode::FamilyRegistration.as_str(), "RACD Register Family");
//! assert_eq!("medium-priority".parse::<GoalPriority>(), Ok(GoalPriority::MediumPriority));
//! assert_eq!(PlanStatus::default(), PlanStatus::Draft);
//! ```

pub mod action;
pub mod activity;
pub mod definition;
pub mod goal;
pub mod status;


pub use action::{PlanAction, SubjectCodableConcept, TimingPeriod};
pub use activity::{ActionCode, PlanActivity};
pub use definition::{EffectivePeriod, PlanDefinition, PlanJurisdiction, UseContext};
pub use goal::{DetailQuantity, GoalDetail, GoalTarget, PlanGoal};
pub use status::{ActionReason, FiReason, FiStatus, GoalPriority, InterventionType, PlanStatus};
