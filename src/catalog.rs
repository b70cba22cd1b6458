use serde::{Deserialize, Serialize};

use crate::models::RoutineError;

/// Closed set of activity kinds the planner can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityId {
    WakeUp,
    Meditation,
    Exercise,
    Breakfast,
    StudyFocused,
    Class,
    Lunch,
    ProjectWork,
    Hobby,
    Rest,
    Revision,
    Dinner,
    Planning,
    SleepPrep,
}

impl ActivityId {
    pub const ALL: [ActivityId; 14] = [
        ActivityId::WakeUp,
        ActivityId::Meditation,
        ActivityId::Exercise,
        ActivityId::Breakfast,
        ActivityId::StudyFocused,
        ActivityId::Class,
        ActivityId::Lunch,
        ActivityId::ProjectWork,
        ActivityId::Hobby,
        ActivityId::Rest,
        ActivityId::Revision,
        ActivityId::Dinner,
        ActivityId::Planning,
        ActivityId::SleepPrep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityId::WakeUp => "wake_up",
            ActivityId::Meditation => "meditation",
            ActivityId::Exercise => "exercise",
            ActivityId::Breakfast => "breakfast",
            ActivityId::StudyFocused => "study_focused",
            ActivityId::Class => "class",
            ActivityId::Lunch => "lunch",
            ActivityId::ProjectWork => "project_work",
            ActivityId::Hobby => "hobby",
            ActivityId::Rest => "rest",
            ActivityId::Revision => "revision",
            ActivityId::Dinner => "dinner",
            ActivityId::Planning => "planning",
            ActivityId::SleepPrep => "sleep_prep",
        }
    }
}

/// Catalog entry: default duration and description for one activity kind
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ActivityDefinition {
    pub id: ActivityId,
    pub duration_minutes: i64,
    pub description: &'static str,
}

const fn entry(id: ActivityId, duration_minutes: i64, description: &'static str) -> ActivityDefinition {
    ActivityDefinition {
        id,
        duration_minutes,
        description,
    }
}

/// Built once, read-only thereafter
const CATALOG: [ActivityDefinition; 14] = [
    entry(ActivityId::WakeUp, 15, "Wake up and freshen up"),
    entry(ActivityId::Meditation, 15, "Morning meditation and mindfulness"),
    entry(ActivityId::Exercise, 45, "Physical exercise (mix of cardio and strength)"),
    entry(ActivityId::Breakfast, 30, "Healthy breakfast and preparation"),
    entry(ActivityId::StudyFocused, 90, "Focused study session with breaks"),
    entry(ActivityId::Class, 60, "Attend classes/lectures"),
    entry(ActivityId::Lunch, 45, "Lunch break and short rest"),
    entry(ActivityId::ProjectWork, 90, "Work on assignments and projects"),
    entry(ActivityId::Hobby, 60, "Engage in hobbies or extracurricular activities"),
    entry(ActivityId::Rest, 30, "Short rest or power nap"),
    entry(ActivityId::Revision, 60, "Review of daily learning"),
    entry(ActivityId::Dinner, 45, "Dinner and relaxation"),
    entry(ActivityId::Planning, 20, "Plan next day activities"),
    entry(ActivityId::SleepPrep, 30, "Prepare for sleep, light reading"),
];

pub fn all() -> &'static [ActivityDefinition] {
    &CATALOG
}

/// Look up the catalog entry for an activity
/// A miss means a rule references an id the table lacks, which is a
/// defect in this crate rather than a user-input problem
pub fn lookup(id: ActivityId) -> Result<ActivityDefinition, RoutineError> {
    CATALOG
        .iter()
        .find(|def| def.id == id)
        .copied()
        .ok_or_else(|| RoutineError::UnknownActivity(id.as_str().to_string()))
}

/// Parse a wire-format id such as "wake_up"
pub fn parse(raw: &str) -> Result<ActivityId, RoutineError> {
    let trimmed = raw.trim();
    ActivityId::ALL
        .iter()
        .copied()
        .find(|id| id.as_str() == trimmed)
        .ok_or_else(|| RoutineError::UnknownActivity(trimmed.to_string()))
}

/// Nearest known id for "did you mean" diagnostics, if anything is close
pub fn closest(raw: &str) -> Option<&'static str> {
    ActivityId::ALL
        .iter()
        .map(|id| id.as_str())
        .map(|name| (name, strsim::jaro_winkler(name, raw)))
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .filter(|(_, score)| *score > 0.7)
        .map(|(name, _)| name)
}
