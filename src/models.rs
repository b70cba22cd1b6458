use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::catalog::ActivityId;

/// Self-reported metrics for one day, supplied once per request
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DailyInput {
    pub sleep_hours: f64,
    /// Accepted for input-collaborator compatibility; no rule reads it
    pub study_hours: f64,
    pub exercise_minutes: f64,
    pub stress_level: u8,
    #[serde(deserialize_with = "flag")]
    pub assignment_deadline: bool,
    #[serde(deserialize_with = "flag")]
    pub exam_upcoming: bool,
}

impl DailyInput {
    /// Bounds check every field
    /// Validation nominally happens at the edge, but the builder is the
    /// contract boundary and re-checks
    pub fn validate(&self) -> Result<(), RoutineError> {
        check_range("sleep_hours", self.sleep_hours, 0.0, 24.0)?;
        check_range("study_hours", self.study_hours, 0.0, 24.0)?;
        check_range("exercise_minutes", self.exercise_minutes, 0.0, 300.0)?;
        check_range("stress_level", f64::from(self.stress_level), 1.0, 5.0)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), RoutineError> {
    if !value.is_finite() || value < min || value > max {
        return Err(RoutineError::InvalidInput {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Flags arrive as JSON booleans or as 0/1 integers depending on the client
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(n) => Err(serde::de::Error::custom(format!(
            "flag must be 0 or 1, got {n}"
        ))),
    }
}

/// Derived classification gating the evening hobby block
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StudyIntensity {
    Normal,
    High,
}

impl StudyIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyIntensity::Normal => "normal",
            StudyIntensity::High => "high",
        }
    }
}

/// One time-boxed activity occurrence on the day's timeline
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduleBlock {
    #[serde(serialize_with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "hhmm")]
    pub end_time: NaiveTime,
    pub activity: ActivityId,
    pub duration_minutes: i64,
    pub description: String,
    pub recommendation: String,
}

/// Full ordered sequence of blocks for one day
/// Blocks are contiguous: each block starts where the previous one ends
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Routine {
    pub intensity: StudyIntensity,
    pub blocks: Vec<ScheduleBlock>,
}

fn hhmm<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format("%H:%M"))
}

/// API Response
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Error, PartialEq)]
pub enum RoutineError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A rule referenced an id missing from the catalog, or a caller asked
    /// for one: the former is a defect, not a user-input problem
    #[error("unknown activity '{0}'")]
    UnknownActivity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> DailyInput {
        DailyInput {
            sleep_hours: 7.0,
            study_hours: 5.0,
            exercise_minutes: 30.0,
            stress_level: 2,
            assignment_deadline: false,
            exam_upcoming: false,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(base_input().validate().is_ok());
    }

    #[test]
    fn out_of_range_field_is_named() {
        let mut input = base_input();
        input.sleep_hours = 30.0;
        let err = input.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "sleep_hours must be between 0 and 24, got 30"
        );
    }

    #[test]
    fn stress_level_zero_rejected() {
        let mut input = base_input();
        input.stress_level = 0;
        assert!(matches!(
            input.validate(),
            Err(RoutineError::InvalidInput {
                field: "stress_level",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_rejected() {
        let mut input = base_input();
        input.exercise_minutes = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn flags_accept_ints_and_bools() {
        let json = r#"{"sleep_hours":7,"study_hours":5,"exercise_minutes":30,
                       "stress_level":2,"assignment_deadline":1,"exam_upcoming":false}"#;
        let input: DailyInput = serde_json::from_str(json).unwrap();
        assert!(input.assignment_deadline);
        assert!(!input.exam_upcoming);
    }

    #[test]
    fn flag_two_rejected() {
        let json = r#"{"sleep_hours":7,"study_hours":5,"exercise_minutes":30,
                       "stress_level":2,"assignment_deadline":2,"exam_upcoming":0}"#;
        assert!(serde_json::from_str::<DailyInput>(json).is_err());
    }

    #[test]
    fn times_serialize_as_hhmm() {
        let block = ScheduleBlock {
            start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(6, 15, 0).unwrap(),
            activity: ActivityId::WakeUp,
            duration_minutes: 15,
            description: "Wake up and freshen up".to_string(),
            recommendation: "Start with deep breathing exercises".to_string(),
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["start_time"], "06:00");
        assert_eq!(value["end_time"], "06:15");
        assert_eq!(value["activity"], "wake_up");
    }
}
