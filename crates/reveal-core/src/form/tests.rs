#[cfg(test)]
mod form_tests {
    use jiff::civil::{date, Date};

    use crate::{
        form::{
            build_activity_list, compose_activities, compose_activities_with,
            extract_activity_for_form, generate_plan_definition, initial_activity_fields,
            initial_plan_form, missing_activities, plan_form_from_definition,
            plan_name_and_title, PlanActivityFormFields, PlanJurisdictionFormFields,
        },
        models::{ActionCode, GoalPriority, InterventionType, PlanActivity, PlanStatus},
        settings::{Settings, SettingsBuilder},
        templates::{plan_activities, ActivityTemplates},
    };

    fn today() -> Date {
        date(2019, 5, 19)
    }

    fn create_test_settings() -> Settings {
        SettingsBuilder::new()
            .with_today(today())
            .with_activity_duration_days(7)
            .with_plan_duration_days(20)
            .build()
            .unwrap()
    }

    fn create_scheduled_activity(code: ActionCode) -> PlanActivity {
        let mut activity = plan_activities().instantiate(code).unwrap();
        activity.action.identifier = "c7da5e1b-3e6c-4ec5-a4d4-cd2cdcbd6bf4".to_string();
        activity.action.timing_period.start = "2019-06-01".to_string();
        activity.action.timing_period.end = "2019-06-10".to_string();
        activity.goal.priority = Some(GoalPriority::HighPriority);
        activity.goal.target[0].due = "2019-06-12".to_string();
        activity.goal.target[0].detail.detail_quantity.value = 75.0;
        activity
    }

    fn create_test_row(code: &str) -> PlanActivityFormFields {
        PlanActivityFormFields {
            action_code: code.to_string(),
            action_description: "Edited description".to_string(),
            action_identifier: String::new(),
            action_reason: "Routine".to_string(),
            action_title: "Edited title".to_string(),
            goal_description: "Edited goal".to_string(),
            goal_due: date(2019, 7, 1),
            goal_priority: "low-priority".to_string(),
            goal_value: 12.0,
            timing_period_end: date(2019, 6, 30),
            timing_period_start: date(2019, 6, 2),
        }
    }

    fn templates_with_prefixes(prefixes: &[(ActionCode, u32)]) -> ActivityTemplates {
        ActivityTemplates::new(prefixes.iter().map(|(code, prefix)| {
            let mut activity = plan_activities().instantiate(*code).unwrap();
            activity.action.prefix = *prefix;
            (*code, activity)
        }))
    }

    #[test]
    fn test_extract_scheduled_activity() {
        let settings = create_test_settings();
        let row = extract_activity_for_form(
            &create_scheduled_activity(ActionCode::BloodScreening),
            &settings,
        );

        assert_eq!(row.action_code, "Blood Screening");
        assert_eq!(row.action_title, "RACD Blood screening");
        assert_eq!(row.action_identifier, "c7da5e1b-3e6c-4ec5-a4d4-cd2cdcbd6bf4");
        assert_eq!(row.action_reason, "Investigation");
        assert_eq!(row.goal_priority, "high-priority");
        assert_eq!(row.goal_value, 75.0);
        assert_eq!(row.goal_due, date(2019, 6, 12));
        assert_eq!(row.timing_period_start, date(2019, 6, 1));
        assert_eq!(row.timing_period_end, date(2019, 6, 10));
    }

    #[test]
    fn test_extract_fills_missing_dates() {
        let settings = create_test_settings();
        let template = plan_activities().get(ActionCode::Bcc).unwrap();
        let row = extract_activity_for_form(template, &settings);

        assert_eq!(row.timing_period_start, today());
        assert_eq!((row.goal_due - today()).get_days(), 7);
        assert_eq!((row.timing_period_end - today()).get_days(), 7);
    }

    #[test]
    fn test_extract_defaults_for_unset_fields() {
        let settings = create_test_settings();
        let mut activity = plan_activities().instantiate(ActionCode::LarvalDipping).unwrap();
        activity.action.reason = None;
        activity.goal.priority = None;
        activity.goal.target[0].detail.detail_quantity.value = 0.0;
        activity.action.timing_period.end = "sometime soon".to_string();

        let row = extract_activity_for_form(&activity, &settings);
        assert_eq!(row.action_reason, "");
        assert_eq!(row.action_identifier, "");
        assert_eq!(row.goal_priority, "medium-priority");
        assert_eq!(row.goal_value, 0.0);
        assert_eq!(row.timing_period_end, date(2019, 5, 26));
    }

    #[test]
    fn test_extract_goal_without_target() {
        let settings = create_test_settings();
        let mut activity = plan_activities().instantiate(ActionCode::LarvalDipping).unwrap();
        activity.goal.target.clear();

        let row = extract_activity_for_form(&activity, &settings);
        assert_eq!(row.goal_value, 0.0);
        assert_eq!(row.goal_due, date(2019, 5, 26));
    }

    #[test]
    fn test_build_activity_list_sorts_by_prefix() {
        let settings = create_test_settings();
        let templates = templates_with_prefixes(&[
            (ActionCode::Bcc, 3),
            (ActionCode::LarvalDipping, 1),
            (ActionCode::MosquitoCollection, 2),
        ]);

        let codes: Vec<String> = build_activity_list(&templates, &settings)
            .into_iter()
            .map(|row| row.action_code)
            .collect();
        assert_eq!(codes, vec!["Larval Dipping", "Mosquito Collection", "BCC"]);
    }

    #[test]
    fn test_build_activity_list_keeps_table_order_on_ties() {
        let settings = create_test_settings();
        let templates = templates_with_prefixes(&[
            (ActionCode::MosquitoCollection, 2),
            (ActionCode::Bcc, 1),
            (ActionCode::LarvalDipping, 2),
        ]);

        let codes: Vec<String> = build_activity_list(&templates, &settings)
            .into_iter()
            .map(|row| row.action_code)
            .collect();
        assert_eq!(codes, vec!["BCC", "Mosquito Collection", "Larval Dipping"]);
    }

    #[test]
    fn test_compose_drops_unknown_codes() {
        let settings = create_test_settings();
        let rows = vec![
            create_test_row("Case Confirmation"),
            create_test_row("NOT_A_REAL_CODE"),
            create_test_row("Larval Dipping"),
        ];

        let composed = compose_activities(&rows, None, &settings);
        assert_eq!(composed.action.len(), 2);
        assert_eq!(composed.goal.len(), 2);
        assert_eq!(composed.action[0].code, "Case Confirmation");
        assert_eq!(composed.action[1].code, "Larval Dipping");
        // prefixes follow the submitted positions
        assert_eq!(composed.action[0].prefix, 1);
        assert_eq!(composed.action[1].prefix, 3);
    }

    #[test]
    fn test_compose_drops_rows_with_bad_reason_or_priority() {
        let settings = create_test_settings();
        let mut bad_reason = create_test_row("BCC");
        bad_reason.action_reason = "Because".to_string();
        let mut bad_priority = create_test_row("BCC");
        bad_priority.goal_priority = String::new();

        let composed = compose_activities(&[bad_reason, bad_priority], None, &settings);
        assert!(composed.is_empty());
    }

    #[test]
    fn test_compose_reuses_identifier() {
        let settings = create_test_settings();
        let mut row = create_test_row("Mosquito Collection");
        row.action_identifier = "existing-action-id".to_string();

        let composed = compose_activities(&[row], Some("plan-1"), &settings);
        assert_eq!(composed.action[0].identifier, "existing-action-id");
    }

    #[test]
    fn test_compose_generates_missing_identifiers() {
        let settings = create_test_settings();
        let rows = vec![create_test_row("BCC"), create_test_row("Larval Dipping")];

        let composed = compose_activities(&rows, Some("plan-1"), &settings);
        let first = &composed.action[0].identifier;
        let second = &composed.action[1].identifier;
        assert!(uuid::Uuid::parse_str(first).is_ok());
        assert!(uuid::Uuid::parse_str(second).is_ok());
        assert_ne!(first, second);
    }

    #[test]
    fn test_compose_writes_form_values_over_template() {
        let settings = create_test_settings();
        let composed = compose_activities(&[create_test_row("Bednet Distribution")], None, &settings);

        let action = &composed.action[0];
        assert_eq!(action.title, "Edited title");
        assert_eq!(action.description, "Edited description");
        assert_eq!(action.timing_period.start, "2019-06-02");
        assert_eq!(action.timing_period.end, "2019-06-30");
        assert_eq!(action.goal_id, "RACD_bednet_distribution");
        assert_eq!(action.task_template, "ITN_Visit_Structures");

        let goal = &composed.goal[0];
        assert_eq!(goal.description, "Edited goal");
        assert_eq!(goal.priority, Some(GoalPriority::LowPriority));
        let target = &goal.target[0];
        assert_eq!(target.due, "2019-07-01");
        assert_eq!(target.detail.detail_quantity.value, 12.0);
        assert_eq!(target.detail.detail_quantity.comparator, ">=");
        assert_eq!(target.detail.detail_quantity.unit, "percent");
        assert_eq!(target.measure, "Percent of residential structures received nets");
    }

    #[test]
    fn test_compose_leaves_templates_untouched() {
        let settings = create_test_settings();
        let templates = templates_with_prefixes(&[(ActionCode::Bcc, 7)]);

        let first = compose_activities_with(&templates, &[create_test_row("BCC")], None, &settings);
        let second = compose_activities_with(&templates, &[create_test_row("BCC")], None, &settings);

        let template = templates.get(ActionCode::Bcc).unwrap();
        assert_eq!(template.action.title, "Behaviour Change Communication");
        assert_eq!(template.action.identifier, "");
        assert_eq!(template.action.prefix, 7);
        assert_eq!(template.goal.target[0].due, "");
        assert_ne!(first.action[0].identifier, "");
        assert_eq!(second.action[0].title, "Edited title");
    }

    #[test]
    fn test_plan_name_and_title_for_fi() {
        let settings = create_test_settings();
        let mut form = initial_plan_form(&settings);
        form.fi_status = Some("A1".to_string());
        form.jurisdictions = vec![PlanJurisdictionFormFields {
            id: "3952".to_string(),
            name: "Akros_2".to_string(),
        }];

        let (name, title) = plan_name_and_title(&form);
        assert_eq!(name, "A1-Akros_2-2019-05-19");
        assert_eq!(title, "A1 Akros_2 2019-05-19");
    }

    #[test]
    fn test_plan_name_and_title_keeps_empty_segments() {
        let settings = create_test_settings();
        let form = initial_plan_form(&settings);

        let (name, title) = plan_name_and_title(&form);
        assert_eq!(name, "--2019-05-19");
        assert_eq!(title, "  2019-05-19");
    }

    #[test]
    fn test_plan_name_and_title_for_irs() {
        let settings = create_test_settings();
        let mut form = initial_plan_form(&settings);
        form.intervention_type = InterventionType::Irs;
        form.fi_status = Some("A1".to_string());

        let (name, title) = plan_name_and_title(&form);
        assert_eq!(name, "IRS-2019-05-19");
        assert_eq!(title, "IRS 2019-05-19");
    }

    #[test]
    fn test_initial_plan_form() {
        let settings = create_test_settings();
        let form = initial_plan_form(&settings);

        assert_eq!(form.intervention_type, InterventionType::Fi);
        assert_eq!(form.status, PlanStatus::Draft);
        assert_eq!(form.date, today());
        assert_eq!(form.start, today());
        assert_eq!(form.end, date(2019, 6, 8));
        assert_eq!(form.version, "1");
        assert!(form.identifier.is_empty());
        assert_eq!(form.activities.len(), 7);
        assert_eq!(form.activities[0].action_code, "Case Confirmation");
        assert!(form.activities.iter().all(|row| row.action_code != "IRS"));
    }

    #[test]
    fn test_initial_activity_fields() {
        let settings = create_test_settings();
        let row = initial_activity_fields(&settings);

        assert_eq!(row.action_code, "");
        assert_eq!(row.action_reason, "Investigation");
        assert_eq!(row.goal_priority, "medium-priority");
        assert_eq!(row.goal_value, 0.0);
        assert_eq!(row.timing_period_start, today());
        assert_eq!(row.goal_due, date(2019, 5, 26));
    }

    #[test]
    fn test_missing_activities() {
        let settings = create_test_settings();
        let mut form = initial_plan_form(&settings);
        form.activities
            .retain(|row| row.action_code != "BCC" && row.action_code != "Larval Dipping");

        assert_eq!(
            missing_activities(&form.activities, InterventionType::Fi),
            vec![ActionCode::LarvalDipping, ActionCode::Bcc]
        );
        assert_eq!(
            missing_activities(&form.activities, InterventionType::Irs),
            vec![ActionCode::Irs]
        );
    }

    #[test]
    fn test_plan_form_from_definition_falls_back_on_bad_dates() {
        let settings = create_test_settings();
        let mut form = initial_plan_form(&settings);
        form.start = date(2019, 5, 1);
        form.end = date(2019, 5, 31);
        let mut plan = generate_plan_definition(&form, &settings);
        plan.date = "someday".to_string();
        plan.effective_period.start = String::new();
        plan.effective_period.end = "2019-02-30".to_string();

        let reloaded = plan_form_from_definition(&plan, &settings);

        assert_eq!(reloaded.date, today());
        assert_eq!(reloaded.start, today());
        assert_eq!(reloaded.end, date(2019, 6, 8));
    }
}
