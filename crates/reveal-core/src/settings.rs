//! Runtime settings for form defaults and identifier generation.
//!
//! [`Settings`] carries the values the dashboard reads from its environment:
//! how far in the future defaulted activity and plan dates land, the version
//! assumed for plans whose stored version is unusable, and the UUID
//! namespaces used for plan and action identifiers.

use std::env;

use jiff::{civil::Date, ToSpan, Zoned};
use log::debug;
use uuid::Uuid;

use crate::{
    error::{ConfigResultExt, Result, RevealError},
    form::ActivityFieldDefaults,
};

/// Namespace shared by plan and action identifiers unless overridden.
pub const DEFAULT_UUID_NAMESPACE: &str = "1bb3c217-af1c-4749-b3df-4f6108582e3c";

/// Days between "today" and a defaulted activity end or goal due date.
pub const DEFAULT_ACTIVITY_DURATION_DAYS: i64 = 7;

/// Days between "today" and a defaulted plan end date.
pub const DEFAULT_PLAN_DURATION_DAYS: i64 = 20;

/// Version assumed for an edited plan whose version does not parse.
pub const DEFAULT_PLAN_VERSION: &str = "1";

const ENV_ACTIVITY_DURATION_DAYS: &str = "REVEAL_DEFAULT_ACTIVITY_DURATION_DAYS";
const ENV_PLAN_DURATION_DAYS: &str = "REVEAL_DEFAULT_PLAN_DURATION_DAYS";
const ENV_PLAN_VERSION: &str = "REVEAL_DEFAULT_PLAN_VERSION";
const ENV_PLAN_NAMESPACE: &str = "REVEAL_PLAN_UUID_NAMESPACE";
const ENV_ACTION_NAMESPACE: &str = "REVEAL_ACTION_UUID_NAMESPACE";

/// Resolved settings used by the form extractor, composer and assembler.
#[derive(Debug, Clone)]
pub struct Settings {
    activity_duration_days: i64,
    plan_duration_days: i64,
    default_plan_version: String,
    plan_namespace: Uuid,
    action_namespace: Uuid,
    fixed_today: Option<Date>,
    activity_defaults: ActivityFieldDefaults,
}

impl Settings {
    /// Today's date, or the fixed date configured with
    /// [`SettingsBuilder::with_today`].
    pub fn today(&self) -> Date {
        self.fixed_today.unwrap_or_else(|| Zoned::now().date())
    }

    /// Today plus the activity duration offset.
    pub fn activity_due_date(&self) -> Date {
        self.today()
            .saturating_add(self.activity_duration_days.days())
    }

    /// Today plus the plan duration offset.
    pub fn plan_end_date(&self) -> Date {
        self.today().saturating_add(self.plan_duration_days.days())
    }

    pub fn activity_duration_days(&self) -> i64 {
        self.activity_duration_days
    }

    pub fn plan_duration_days(&self) -> i64 {
        self.plan_duration_days
    }

    pub fn default_plan_version(&self) -> &str {
        &self.default_plan_version
    }

    pub fn plan_namespace(&self) -> &Uuid {
        &self.plan_namespace
    }

    pub fn action_namespace(&self) -> &Uuid {
        &self.action_namespace
    }

    /// Per-field default policy applied when extracting activities.
    pub fn activity_defaults(&self) -> &ActivityFieldDefaults {
        &self.activity_defaults
    }
}

/// Builder for creating and configuring [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    activity_duration_days: Option<i64>,
    plan_duration_days: Option<i64>,
    default_plan_version: Option<String>,
    plan_namespace: Option<String>,
    action_namespace: Option<String>,
    fixed_today: Option<Date>,
    activity_defaults: Option<ActivityFieldDefaults>,
}

impl SettingsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from `REVEAL_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `RevealError::Configuration` if a duration variable is not an
    /// integer or a variable is not valid unicode.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::new();

        if let Some(days) = read_env(ENV_ACTIVITY_DURATION_DAYS)? {
            builder.activity_duration_days =
                Some(days.parse::<i64>().config_context(ENV_ACTIVITY_DURATION_DAYS)?);
        }
        if let Some(days) = read_env(ENV_PLAN_DURATION_DAYS)? {
            builder.plan_duration_days =
                Some(days.parse::<i64>().config_context(ENV_PLAN_DURATION_DAYS)?);
        }
        builder.default_plan_version = read_env(ENV_PLAN_VERSION)?;
        builder.plan_namespace = read_env(ENV_PLAN_NAMESPACE)?;
        builder.action_namespace = read_env(ENV_ACTION_NAMESPACE)?;

        Ok(builder)
    }

    pub fn with_activity_duration_days(mut self, days: i64) -> Self {
        self.activity_duration_days = Some(days);
        self
    }

    pub fn with_plan_duration_days(mut self, days: i64) -> Self {
        self.plan_duration_days = Some(days);
        self
    }

    pub fn with_default_plan_version(mut self, version: impl Into<String>) -> Self {
        self.default_plan_version = Some(version.into());
        self
    }

    pub fn with_plan_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.plan_namespace = Some(namespace.into());
        self
    }

    pub fn with_action_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.action_namespace = Some(namespace.into());
        self
    }

    /// Pins "today" to a fixed date instead of the system clock.
    pub fn with_today(mut self, today: Date) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn with_activity_defaults(mut self, defaults: ActivityFieldDefaults) -> Self {
        self.activity_defaults = Some(defaults);
        self
    }

    /// Builds the configured settings.
    ///
    /// # Errors
    ///
    /// Returns `RevealError::InvalidInput` if a duration is negative and
    /// `RevealError::InvalidNamespace` if a namespace is not a UUID.
    pub fn build(self) -> Result<Settings> {
        let activity_duration_days = non_negative(
            "activity_duration_days",
            self.activity_duration_days
                .unwrap_or(DEFAULT_ACTIVITY_DURATION_DAYS),
        )?;
        let plan_duration_days = non_negative(
            "plan_duration_days",
            self.plan_duration_days.unwrap_or(DEFAULT_PLAN_DURATION_DAYS),
        )?;

        let settings = Settings {
            activity_duration_days,
            plan_duration_days,
            default_plan_version: self
                .default_plan_version
                .unwrap_or_else(|| DEFAULT_PLAN_VERSION.to_string()),
            plan_namespace: parse_namespace(self.plan_namespace.as_deref())?,
            action_namespace: parse_namespace(self.action_namespace.as_deref())?,
            fixed_today: self.fixed_today,
            activity_defaults: self.activity_defaults.unwrap_or_default(),
        };

        debug!("settings: {settings:?}");
        Ok(settings)
    }
}

fn read_env(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(RevealError::configuration(format!("{name}: {e}"))),
    }
}

fn non_negative(field: &str, days: i64) -> Result<i64> {
    if days < 0 {
        return Err(RevealError::invalid_input(field).with_reason("must not be negative"));
    }
    Ok(days)
}

fn parse_namespace(value: Option<&str>) -> Result<Uuid> {
    let value = value.unwrap_or(DEFAULT_UUID_NAMESPACE);
    Uuid::parse_str(value).map_err(|source| RevealError::InvalidNamespace {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::form::DateDefault;

    #[test]
    fn test_builder_defaults() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings.activity_duration_days(), DEFAULT_ACTIVITY_DURATION_DAYS);
        assert_eq!(settings.plan_duration_days(), DEFAULT_PLAN_DURATION_DAYS);
        assert_eq!(settings.default_plan_version(), DEFAULT_PLAN_VERSION);
        assert_eq!(settings.plan_namespace().to_string(), DEFAULT_UUID_NAMESPACE);
        assert_eq!(settings.action_namespace().to_string(), DEFAULT_UUID_NAMESPACE);
    }

    #[test]
    fn test_fixed_today_offsets() {
        let settings = SettingsBuilder::new()
            .with_today(date(2019, 5, 19))
            .with_activity_duration_days(7)
            .with_plan_duration_days(20)
            .build()
            .unwrap();

        assert_eq!(settings.today(), date(2019, 5, 19));
        assert_eq!(settings.activity_due_date(), date(2019, 5, 26));
        assert_eq!(settings.plan_end_date(), date(2019, 6, 8));
    }

    #[test]
    fn test_custom_activity_defaults() {
        let defaults = ActivityFieldDefaults {
            goal_due: DateDefault::DaysFromToday(3),
            goal_value: 1.0,
            ..ActivityFieldDefaults::default()
        };
        let settings = SettingsBuilder::new()
            .with_today(date(2019, 5, 19))
            .with_activity_defaults(defaults)
            .build()
            .unwrap();

        let defaults = settings.activity_defaults();
        assert_eq!(defaults.goal_due.resolve(&settings), date(2019, 5, 22));
        assert_eq!(defaults.timing_period_start.resolve(&settings), date(2019, 5, 19));
        assert_eq!(defaults.goal_value, 1.0);
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let result = SettingsBuilder::new()
            .with_plan_namespace("not-a-uuid")
            .build();
        assert!(matches!(result, Err(RevealError::InvalidNamespace { .. })));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = SettingsBuilder::new()
            .with_activity_duration_days(-1)
            .build();
        assert!(matches!(result, Err(RevealError::InvalidInput { .. })));
    }
}
