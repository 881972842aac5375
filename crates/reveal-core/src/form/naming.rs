//! Derived plan name and title.

use super::PlanFormFields;
use crate::{dates::format_wire_date, models::InterventionType};

/// The `(name, title)` pair the form derives whenever the intervention type,
/// FI status, jurisdictions or plan date change.
///
/// FI plans are named after their FI status, first jurisdiction and date;
/// IRS plans after the intervention type and date. Missing parts stay as
/// empty segments so the shape of the name is constant. The name joins its
/// parts with `-`, the title with spaces.
pub fn plan_name_and_title(form: &PlanFormFields) -> (String, String) {
    let date = format_wire_date(form.date);
    let parts: Vec<&str> = match form.intervention_type {
        InterventionType::Fi => vec![
            form.fi_status.as_deref().unwrap_or_default(),
            form.jurisdictions
                .first()
                .map(|jurisdiction| jurisdiction.name.as_str())
                .unwrap_or_default(),
            date.as_str(),
        ],
        InterventionType::Irs => vec![form.intervention_type.as_str(), date.as_str()],
    };

    (parts.join("-"), parts.join(" "))
}
