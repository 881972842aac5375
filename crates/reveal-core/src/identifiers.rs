//! Namespaced identifier generation for plans and actions.
//!
//! Identifiers are UUID v5 values derived from a seed that includes the
//! current timestamp. The hash is deterministic, the seed is not: two calls
//! with the same logical input at different instants yield different
//! identifiers. Uniqueness is what the plans API needs.

use jiff::Timestamp;
use log::debug;
use uuid::Uuid;

/// UUID v5 of `seed` within `namespace`.
pub fn namespaced_uuid(seed: &str, namespace: &Uuid) -> String {
    Uuid::new_v5(namespace, seed.as_bytes()).to_string()
}

/// A fresh plan identifier.
pub fn generate_plan_identifier(namespace: &Uuid) -> String {
    let identifier = namespaced_uuid(&Timestamp::now().to_string(), namespace);
    debug!("generated plan identifier {identifier}");
    identifier
}

/// A fresh action identifier seeded with the owning plan and goal.
///
/// The plan segment is left out of the seed when `plan_identifier` is empty.
pub fn generate_action_identifier(plan_identifier: &str, goal_id: &str, namespace: &Uuid) -> String {
    let now = Timestamp::now();
    let seed = if plan_identifier.is_empty() {
        format!("{now}-{goal_id}")
    } else {
        format!("{now}-{plan_identifier}-{goal_id}")
    };
    let identifier = namespaced_uuid(&seed, namespace);
    debug!("generated action identifier {identifier} for goal {goal_id}");
    identifier
}
