//! Plan form → plan definition assembly.

use log::{debug, warn};

use super::{compose_activities, PlanFormFields};
use crate::{
    dates::format_wire_date,
    identifiers::generate_plan_identifier,
    models::{
        definition::{
            USE_CONTEXT_CASE_NUM, USE_CONTEXT_FI_REASON, USE_CONTEXT_FI_STATUS,
            USE_CONTEXT_INTERVENTION_TYPE, USE_CONTEXT_OPENSRP_EVENT_ID,
        },
        EffectivePeriod, PlanDefinition, PlanJurisdiction, UseContext,
    },
    settings::Settings,
};

/// Builds the plan definition sent to the plans API from the form values.
///
/// An existing plan keeps its identifier and gets its version bumped; a new
/// plan gets a freshly generated identifier and the form's version as is.
pub fn generate_plan_definition(form: &PlanFormFields, settings: &Settings) -> PlanDefinition {
    let identifier = if form.is_existing_plan() {
        form.identifier.trim().to_string()
    } else {
        generate_plan_identifier(settings.plan_namespace())
    };
    let version = next_plan_version(form, settings);

    let composed = compose_activities(&form.activities, Some(&identifier), settings);

    debug!(
        "assembled plan {identifier} version {version} with {} actions",
        composed.len()
    );

    PlanDefinition {
        identifier,
        version,
        name: form.name.clone(),
        title: form.title.clone(),
        status: form.status,
        date: format_wire_date(form.date),
        effective_period: EffectivePeriod {
            end: format_wire_date(form.end),
            start: format_wire_date(form.start),
        },
        use_context: use_context(form),
        jurisdiction: form
            .jurisdictions
            .iter()
            .map(|jurisdiction| PlanJurisdiction {
                code: jurisdiction.id.clone(),
            })
            .collect(),
        action: composed.action,
        goal: composed.goal,
    }
}

/// Version to store for the submitted form.
///
/// New plans keep the form's version. Edited plans get the leading integer
/// of their current version plus one, or the default version plus one when
/// the current version has no leading integer.
pub fn next_plan_version(form: &PlanFormFields, settings: &Settings) -> String {
    if !form.is_existing_plan() {
        return form.version.clone();
    }
    if let Some(next) = increment_leading_int(&form.version) {
        return next;
    }
    warn!(
        "plan {}: version {:?} has no leading integer, using default version {:?}",
        form.identifier,
        form.version,
        settings.default_plan_version()
    );
    increment_leading_int(settings.default_plan_version()).unwrap_or_else(|| "2".to_string())
}

/// The leading base-10 integer of `value` plus one, ignoring leading
/// whitespace and any trailing text (`"3rd"` → `"4"`). Digit runs of any
/// length are incremented exactly.
pub(crate) fn increment_leading_int(value: &str) -> Option<String> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    if negative {
        let magnitude: i128 = digits.parse().ok()?;
        return Some((1 - magnitude).to_string());
    }
    Some(increment_digits(digits))
}

fn increment_digits(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.trim_start_matches('0').bytes().collect();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    bytes.into_iter().map(char::from).collect()
}

fn use_context(form: &PlanFormFields) -> Vec<UseContext> {
    let mut contexts = vec![UseContext::new(
        USE_CONTEXT_INTERVENTION_TYPE,
        form.intervention_type.as_str(),
    )];

    let optional = [
        (USE_CONTEXT_FI_REASON, &form.fi_reason),
        (USE_CONTEXT_FI_STATUS, &form.fi_status),
        (USE_CONTEXT_CASE_NUM, &form.case_num),
        (USE_CONTEXT_OPENSRP_EVENT_ID, &form.opensrp_event_id),
    ];
    for (code, value) in optional {
        if let Some(value) = value.as_deref().filter(|value| !value.trim().is_empty()) {
            contexts.push(UseContext::new(code, value));
        }
    }

    contexts
}

#[cfg(test)]
mod tests {
    use super::increment_leading_int;

    #[test]
    fn test_increment_leading_int() {
        assert_eq!(increment_leading_int("2").as_deref(), Some("3"));
        assert_eq!(increment_leading_int("  12").as_deref(), Some("13"));
        assert_eq!(increment_leading_int("3rd").as_deref(), Some("4"));
        assert_eq!(increment_leading_int("0").as_deref(), Some("1"));
        assert_eq!(increment_leading_int("007").as_deref(), Some("8"));
        assert_eq!(increment_leading_int("-4").as_deref(), Some("-3"));
        assert_eq!(increment_leading_int("not-a-number"), None);
        assert_eq!(increment_leading_int(""), None);
        assert_eq!(increment_leading_int("-"), None);
    }

    #[test]
    fn test_increment_leading_int_beyond_machine_integers() {
        assert_eq!(
            increment_leading_int("9223372036854775807").as_deref(),
            Some("9223372036854775808")
        );
        assert_eq!(
            increment_leading_int("99999999999999999999").as_deref(),
            Some("100000000000000000000")
        );
    }
}
