//! Activity templates.
//!
//! Each recognised [`ActionCode`] has one template activity holding the
//! defaults loaded when that activity is added to a plan. The table is built
//! once per process and never handed out mutably: callers that need to edit a
//! template receive a clone through [`ActivityTemplates::instantiate`].

use std::sync::LazyLock;

use crate::models::{
    ActionCode, ActionReason, DetailQuantity, GoalDetail, GoalPriority, GoalTarget,
    InterventionType, PlanAction, PlanActivity, PlanGoal, SubjectCodableConcept, TimingPeriod,
};

static PLAN_ACTIVITIES: LazyLock<ActivityTemplates> = LazyLock::new(ActivityTemplates::builtin);

/// The process-wide template table.
pub fn plan_activities() -> &'static ActivityTemplates {
    &PLAN_ACTIVITIES
}

/// Lookup table from action code to template activity, kept in declaration
/// order so that ties on `prefix` sort deterministically.
#[derive(Debug, Clone)]
pub struct ActivityTemplates {
    entries: Vec<(ActionCode, PlanActivity)>,
}

impl ActivityTemplates {
    /// Builds a table from explicit entries. Later entries for a code that is
    /// already present are ignored.
    pub fn new(entries: impl IntoIterator<Item = (ActionCode, PlanActivity)>) -> Self {
        let mut table: Vec<(ActionCode, PlanActivity)> = Vec::new();
        for (code, activity) in entries {
            if !table.iter().any(|(existing, _)| *existing == code) {
                table.push((code, activity));
            }
        }
        Self { entries: table }
    }

    /// The template for `code`.
    pub fn get(&self, code: ActionCode) -> Option<&PlanActivity> {
        self.entries
            .iter()
            .find(|(entry_code, _)| *entry_code == code)
            .map(|(_, activity)| activity)
    }

    /// A fresh copy of the template for `code`, safe to mutate.
    pub fn instantiate(&self, code: ActionCode) -> Option<PlanActivity> {
        self.get(code).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionCode, &PlanActivity)> {
        self.entries.iter().map(|(code, activity)| (*code, activity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The subset offered for an intervention type: IRS plans only carry the
    /// IRS activity, FI plans carry everything else.
    pub fn for_intervention(&self, intervention: InterventionType) -> ActivityTemplates {
        let want_irs = intervention == InterventionType::Irs;
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(code, _)| code.is_irs() == want_irs)
                .cloned()
                .collect(),
        }
    }

    fn builtin() -> Self {
        Self::new(SEEDS.iter().map(|seed| (seed.code, seed.to_activity())))
    }
}

struct TemplateSeed {
    code: ActionCode,
    prefix: u32,
    title: &'static str,
    description: &'static str,
    goal_id: &'static str,
    reason: ActionReason,
    subject: &'static str,
    task_template: &'static str,
    goal_description: &'static str,
    comparator: &'static str,
    unit: &'static str,
    value: f64,
    measure: &'static str,
}

impl TemplateSeed {
    fn to_activity(&self) -> PlanActivity {
        PlanActivity {
            action: PlanAction {
                code: self.code.as_str().to_string(),
                description: self.description.to_string(),
                goal_id: self.goal_id.to_string(),
                identifier: String::new(),
                prefix: self.prefix,
                reason: Some(self.reason),
                subject_codable_concept: SubjectCodableConcept {
                    text: self.subject.to_string(),
                },
                task_template: self.task_template.to_string(),
                timing_period: TimingPeriod::default(),
                title: self.title.to_string(),
            },
            goal: PlanGoal {
                description: self.goal_description.to_string(),
                id: self.goal_id.to_string(),
                priority: Some(GoalPriority::MediumPriority),
                target: vec![GoalTarget {
                    detail: GoalDetail {
                        detail_quantity: DetailQuantity {
                            comparator: self.comparator.to_string(),
                            unit: self.unit.to_string(),
                            value: self.value,
                        },
                    },
                    due: String::new(),
                    measure: self.measure.to_string(),
                }],
            },
        }
    }
}

const SEEDS: [TemplateSeed; 8] = [
    TemplateSeed {
        code: ActionCode::Bcc,
        prefix: 7,
        title: "Behaviour Change Communication",
        description: "Conduct BCC activity",
        goal_id: "BCC_Focus",
        reason: ActionReason::Investigation,
        subject: "Operational_Area",
        task_template: "BCC_Focus",
        goal_description: "Complete at least 1 BCC activity for the operational area",
        comparator: ">=",
        unit: "activities",
        value: 1.0,
        measure: "Number of BCC Activities Completed",
    },
    TemplateSeed {
        code: ActionCode::Irs,
        prefix: 1,
        title: "Spray Structures",
        description: "Visit each structure in the operational area and attempt to spray",
        goal_id: "IRS",
        reason: ActionReason::Routine,
        subject: "Residential_Structure",
        task_template: "Spray_Structures",
        goal_description: "Spray structures in the operational area",
        comparator: ">=",
        unit: "percent",
        value: 90.0,
        measure: "Percent of structures sprayed",
    },
    TemplateSeed {
        code: ActionCode::BednetDistribution,
        prefix: 4,
        title: "Bednet Distribution",
        description: "Visit 100% of residential structures in the operational area and provide nets",
        goal_id: "RACD_bednet_distribution",
        reason: ActionReason::Investigation,
        subject: "Residential_Structure",
        task_template: "ITN_Visit_Structures",
        goal_description: "Complete bednet distribution for all residential structures in the operational area",
        comparator: ">=",
        unit: "percent",
        value: 100.0,
        measure: "Percent of residential structures received nets",
    },
    TemplateSeed {
        code: ActionCode::BloodScreening,
        prefix: 3,
        title: "RACD Blood screening",
        description: "Visit all residential structures (100%) within a 1 km radius of a confirmed index case and test each registered person",
        goal_id: "RACD_Blood_Screening",
        reason: ActionReason::Investigation,
        subject: "Person",
        task_template: "RACD_Blood_Screening",
        goal_description: "Visit all residential structures (100%) within a 1 km radius of a confirmed index case and test each registered person",
        comparator: ">=",
        unit: "Person(s)",
        value: 50.0,
        measure: "Number of registered people tested",
    },
    TemplateSeed {
        code: ActionCode::CaseConfirmation,
        prefix: 1,
        title: "Case Confirmation",
        description: "Confirm the index case",
        goal_id: "Case_Confirmation",
        reason: ActionReason::Investigation,
        subject: "Case_Confirmation",
        task_template: "Case_Confirmation",
        goal_description: "Confirm the index case",
        comparator: ">=",
        unit: "case",
        value: 1.0,
        measure: "Number of cases confirmed",
    },
    TemplateSeed {
        code: ActionCode::FamilyRegistration,
        prefix: 2,
        title: "Family Registration",
        description: "Register all families & family members in all residential structures enumerated (100%) within the operational area",
        goal_id: "RACD_register_families",
        reason: ActionReason::Investigation,
        subject: "Residential_Structure",
        task_template: "RACD_register_families",
        goal_description: "Register all families & family members in all residential structures enumerated (100%) within the operational area",
        comparator: ">=",
        unit: "percent",
        value: 100.0,
        measure: "Percent of residential structures with full family registration",
    },
    TemplateSeed {
        code: ActionCode::LarvalDipping,
        prefix: 5,
        title: "Larval Dipping",
        description: "Perform a minimum of three larval dipping activities in the operational area",
        goal_id: "Larval_Dipping",
        reason: ActionReason::Investigation,
        subject: "Breeding_Site",
        task_template: "Larval_Dipping",
        goal_description: "Perform a minimum of three larval dipping activities in the operational area",
        comparator: ">=",
        unit: "activities",
        value: 3.0,
        measure: "Number of larval dipping activities completed",
    },
    TemplateSeed {
        code: ActionCode::MosquitoCollection,
        prefix: 6,
        title: "Mosquito Collection",
        description: "Set a minimum of three mosquito collection traps and complete the mosquito collection process",
        goal_id: "Mosquito_Collection",
        reason: ActionReason::Investigation,
        subject: "Mosquito_Collection_Point",
        task_template: "Mosquito_Collection_Point",
        goal_description: "Set a minimum of three mosquito collection traps and complete the mosquito collection process",
        comparator: ">=",
        unit: "activities",
        value: 3.0,
        measure: "Number of mosquito collection activities completed",
    },
];
