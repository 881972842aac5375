use jiff::civil::{date, Date};
use reveal_core::{Settings, SettingsBuilder};

/// Date every test treats as "today"
pub fn test_today() -> Date {
    date(2019, 5, 19)
}

/// Helper function to create settings pinned to [`test_today`], with test
/// logging enabled
pub fn create_test_settings() -> Settings {
    let _ = env_logger::builder().is_test(true).try_init();
    SettingsBuilder::new()
        .with_today(test_today())
        .with_default_plan_version("2")
        .build()
        .expect("Failed to build settings")
}
