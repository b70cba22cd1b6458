use chrono::{Duration, NaiveTime};

use crate::catalog::{self, ActivityId};
use crate::models::{DailyInput, Routine, RoutineError, ScheduleBlock, StudyIntensity};


/// One decision point in the day plan
/// Evaluated top-to-bottom; each emits zero or one block and the emitted
/// block's duration advances the running clock
struct RoutineRule {
    activity: ActivityId,
    applies: fn(&DailyInput, StudyIntensity) -> bool,
    recommendation: &'static str,
    /// Rule-level deviation from the catalog's default duration
    duration_override: Option<i64>,
}

const RULES: [RoutineRule; 13] = [
    RoutineRule {
        activity: ActivityId::WakeUp,
        applies: |_, _| true,
        recommendation: "Start with deep breathing exercises",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Meditation,
        applies: |input, _| input.stress_level > 3,
        recommendation: "Focus on stress-reducing meditation",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Exercise,
        applies: |input, _| input.exercise_minutes < 30.0,
        recommendation: "Priority on physical activity today",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Breakfast,
        applies: |_, _| true,
        recommendation: "Include protein-rich foods for sustained energy",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::StudyFocused,
        applies: |input, _| input.exam_upcoming,
        recommendation: "Focus on exam preparation",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Class,
        applies: |input, _| !input.exam_upcoming,
        recommendation: "Active participation in class",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Lunch,
        applies: |_, _| true,
        recommendation: "Take a proper break, eat mindfully",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::ProjectWork,
        applies: |input, _| input.assignment_deadline,
        recommendation: "Focus on completing pending assignments",
        // Deadline days get a double session, regardless of the catalog default
        duration_override: Some(120),
    },
    RoutineRule {
        activity: ActivityId::StudyFocused,
        applies: |input, _| !input.assignment_deadline,
        recommendation: "Review and practice sessions",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Hobby,
        applies: |_, intensity| intensity == StudyIntensity::Normal,
        recommendation: "Engage in relaxing activities",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Dinner,
        applies: |_, _| true,
        recommendation: "Light and healthy dinner",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::Planning,
        applies: |_, _| true,
        recommendation: "Plan for tomorrow, set goals",
        duration_override: None,
    },
    RoutineRule {
        activity: ActivityId::SleepPrep,
        applies: |_, _| true,
        recommendation: "Prepare for restful sleep",
        duration_override: None,
    },
];

/// 06:00 by default, 07:00 after a short night (< 6 hours) for recovery
fn wake_time(input: &DailyInput) -> NaiveTime {
    let hour = if input.sleep_hours < 6.0 { 7 } else { 6 };
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// High intensity only gates the evening hobby block; it never adds
/// extra study activities
fn classify_intensity(input: &DailyInput) -> StudyIntensity {
    if input.stress_level > 3 || input.assignment_deadline || input.exam_upcoming {
        StudyIntensity::High
    } else {
        StudyIntensity::Normal
    }
}

/// Build the next-day routine for one validated input record
/// Deterministic and total over valid input; the produced blocks are
/// contiguous on the clock
pub fn build_routine(input: &DailyInput) -> Result<Routine, RoutineError> {
    input.validate()?;

    let intensity = classify_intensity(input);
    let mut current = wake_time(input);
    let mut blocks = Vec::with_capacity(RULES.len());

    for rule in &RULES {
        if !(rule.applies)(input, intensity) {
            continue;
        }
        let def = catalog::lookup(rule.activity)?;
        let minutes = rule.duration_override.unwrap_or(def.duration_minutes);
        let end = current + Duration::minutes(minutes);
        blocks.push(ScheduleBlock {
            start_time: current,
            end_time: end,
            activity: def.id,
            duration_minutes: minutes,
            description: def.description.to_string(),
            recommendation: rule.recommendation.to_string(),
        });
        current = end;
    }

    Ok(Routine { intensity, blocks })
}
