use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::form::{
    parse_count_or_zero, parse_form_date, parse_non_negative, required, FormError,
};
use crate::services::activity::{classify, estimate, ActivityCategory};

/// One logged exercise session. `burned` is either what the user typed or
/// the estimate computed at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseRecord {
    pub id: i64,
    pub kind: String,
    pub minutes: i64,
    pub burned: i64,
    pub steps: i64,
    pub date: NaiveDateTime,
}

/// Raw body of POST /exercises.
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseForm {
    pub kind: Option<String>,
    pub minutes: Option<String>,
    pub burned: Option<String>,
    pub steps: Option<String>,
    pub date: Option<String>,
}

/// Where the stored `burned` value came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BurnedSource {
    Manual,
    Estimated(ActivityCategory),
}

impl BurnedSource {
    pub fn label(self) -> &'static str {
        match self {
            BurnedSource::Manual => "manual",
            BurnedSource::Estimated(_) => "estimated",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub kind: String,
    pub minutes: u32,
    pub burned: i64,
    pub steps: u32,
    pub date: NaiveDateTime,
    pub source: BurnedSource,
}

impl ExerciseForm {
    /// Validate the submission, estimating `burned` from the description
    /// when it was left blank.
    pub fn validate(&self, now: NaiveDateTime, weight_kg: f64) -> Result<NewExercise, FormError> {
        let (Some(kind), Some(date)) = (required(&self.kind), required(&self.date)) else {
            return Err(FormError::MissingExerciseFields);
        };

        let minutes = parse_count_or_zero(&self.minutes)?;
        let steps = parse_count_or_zero(&self.steps)?;

        let (burned, source) = match required(&self.burned) {
            Some(raw) => (
                parse_non_negative(raw).ok_or(FormError::BurnedNotANumber)?,
                BurnedSource::Manual,
            ),
            None => {
                let category = classify(kind);
                (
                    i64::from(estimate(category, minutes, steps, weight_kg)),
                    BurnedSource::Estimated(category),
                )
            }
        };

        Ok(NewExercise {
            kind: kind.to_string(),
            minutes,
            burned,
            steps,
            date: parse_form_date(date, now),
            source,
        })
    }
}

/// View-data for GET /exercises.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseListView {
    pub title: String,
    pub records: Vec<ExerciseRecord>,
    pub default_date: String,
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::activity::DEFAULT_WEIGHT_KG;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 3)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
    }

    fn form(kind: &str, minutes: &str, burned: &str, steps: &str) -> ExerciseForm {
        ExerciseForm {
            kind: Some(kind.into()),
            minutes: Some(minutes.into()),
            burned: Some(burned.into()),
            steps: Some(steps.into()),
            date: Some("2025-06-02".into()),
        }
    }

    #[test]
    fn blank_burned_is_estimated() {
        let new = form("morning run", "60", "", "2000")
            .validate(now(), DEFAULT_WEIGHT_KG)
            .unwrap();
        assert_eq!(new.burned, i64::from(estimate(ActivityCategory::Run, 60, 2000, 60.0)));
        assert_eq!(new.burned, 668);
        assert_eq!(new.source, BurnedSource::Estimated(ActivityCategory::Run));
    }

    #[test]
    fn explicit_burned_wins() {
        let new = form("run", "60", "123", "").validate(now(), DEFAULT_WEIGHT_KG).unwrap();
        assert_eq!(new.burned, 123);
        assert_eq!(new.steps, 0);
        assert_eq!(new.source, BurnedSource::Manual);
    }

    #[test]
    fn blank_minutes_and_steps_are_zero() {
        let new = form("stretching", "", "", "").validate(now(), DEFAULT_WEIGHT_KG).unwrap();
        assert_eq!(new.minutes, 0);
        assert_eq!(new.steps, 0);
        assert_eq!(new.burned, 0);
    }

    #[test]
    fn weight_changes_the_estimate() {
        let light = form("walk", "60", "", "").validate(now(), 50.0).unwrap();
        let heavy = form("walk", "60", "", "").validate(now(), 90.0).unwrap();
        assert_eq!(light.burned, 165);
        assert_eq!(heavy.burned, 297);
    }

    #[test]
    fn rejections() {
        let mut missing = form("", "10", "", "");
        assert_eq!(
            missing.validate(now(), DEFAULT_WEIGHT_KG),
            Err(FormError::MissingExerciseFields)
        );
        missing.kind = Some("walk".into());
        missing.date = None;
        assert_eq!(
            missing.validate(now(), DEFAULT_WEIGHT_KG),
            Err(FormError::MissingExerciseFields)
        );
        assert_eq!(
            form("walk", "ten", "", "").validate(now(), DEFAULT_WEIGHT_KG),
            Err(FormError::DurationNotANumber)
        );
        assert_eq!(
            form("walk", "10", "", "lots").validate(now(), DEFAULT_WEIGHT_KG),
            Err(FormError::DurationNotANumber)
        );
        assert_eq!(
            form("walk", "10", "many", "").validate(now(), DEFAULT_WEIGHT_KG),
            Err(FormError::BurnedNotANumber)
        );
        assert_eq!(
            form("walk", "4294967296", "", "").validate(now(), DEFAULT_WEIGHT_KG),
            Err(FormError::DurationTooLarge)
        );
    }
}
