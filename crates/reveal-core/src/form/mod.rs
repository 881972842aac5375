//! Plan form logic.
//!
//! The plan form edits a flat view of a plan definition. This module converts
//! between the two:
//!
//! ```text
//! ┌─────────────────┐  extract   ┌─────────────────┐  compose   ┌─────────────────┐
//! │  PlanActivity   │───────────▶│ PlanActivity-   │───────────▶│ PlanAction +    │
//! │  (template or   │            │ FormFields      │            │ PlanGoal        │
//! │   saved plan)   │            │ (user edits)    │            │ (fresh copies)  │
//! └─────────────────┘            └─────────────────┘            └─────────────────┘
//! ```
//!
//! - [`extract`]: activity → form row, and ordered row lists per intervention
//! - [`compose`]: form rows → actions and goals
//! - [`assemble`]: whole form → [`PlanDefinition`](crate::models::PlanDefinition)
//! - [`edit`]: initial values for new plans, form values for saved plans
//! - [`naming`]: derived plan name and title
//!
//! # Examples
//!
//! ```rust
//! use reveal_core::{form, SettingsBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SettingsBuilder::new().build()?;
//!
//! let mut values = form::initial_plan_form(&settings);
//! values.fi_status = Some("A1".to_string());
//! let (name, title) = form::plan_name_and_title(&values);
//! values.name = name;
//! values.title = title;
//!
//! let plan = form::generate_plan_definition(&values, &settings);
//! assert_eq!(plan.action.len(), values.activities.len());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod assemble;
pub mod compose;
pub mod defaults;
pub mod edit;
pub mod extract;
pub mod fields;
pub mod naming;

#[cfg(test)]
mod tests;

pub use assemble::{generate_plan_definition, next_plan_version};
pub use compose::{compose_activities, compose_activities_with, ComposedActivities};
pub use defaults::{ActivityFieldDefaults, DateDefault};
pub use edit::{initial_activity_fields, initial_plan_form, plan_form_from_definition};
pub use extract::{
    activities_for_intervention, build_activity_list, extract_activity_for_form,
    missing_activities,
};
pub use fields::{field, PlanActivityFormFields, PlanFormFields, PlanJurisdictionFormFields};
pub use naming::plan_name_and_title;
