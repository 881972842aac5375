//! Core library for the Reveal plan form.
//!
//! This crate holds the logic behind the dashboard's plan form for Focus
//! Investigation (FI) and Indoor Residual Spraying (IRS) campaigns: turning
//! plan activities into editable form rows, validating the form, and
//! composing the edited rows back into a plan definition for the plans API.
//!
//! Everything here is synchronous and pure. The activity templates are
//! process-wide constants; every composition works on fresh copies of them.
//!
//! # Quick Start
//!
//! ```rust
//! use reveal_core::{
//!     form::{generate_plan_definition, initial_plan_form},
//!     validate_plan_form, SettingsBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SettingsBuilder::from_env()?.build()?;
//!
//! let mut values = initial_plan_form(&settings);
//! values.name = "A1-Lusaka-2019-05-19".to_string();
//! values.title = "A1 Lusaka 2019-05-19".to_string();
//!
//! let errors = validate_plan_form(&values);
//! if errors.is_empty() {
//!     let plan = generate_plan_definition(&values, &settings);
//!     println!("{}", plan.to_json()?);
//! } else {
//!     println!("{errors}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod error;
pub mod form;
pub mod identifiers;
pub mod models;
pub mod settings;
pub mod templates;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, RevealError};
pub use form::{
    compose_activities, extract_activity_for_form, generate_plan_definition,
    PlanActivityFormFields, PlanFormFields, PlanJurisdictionFormFields,
};
pub use models::{
    ActionCode, InterventionType, PlanAction, PlanActivity, PlanDefinition, PlanGoal, PlanStatus,
};
pub use settings::{Settings, SettingsBuilder};
pub use templates::{plan_activities, ActivityTemplates};
pub use validation::{validate_plan_form, FieldError, ValidationErrors};
