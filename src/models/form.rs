//! Shared validation for the meal and exercise forms.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Input accepted by the date field of both forms.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a form submission was refused. The message is shown to the user
/// as a flash notice; nothing is written when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Some fields are missing.")]
    MissingMealFields,

    #[error("Calories must be a number.")]
    CalorieNotANumber,

    #[error("Exercise name and date are required.")]
    MissingExerciseFields,

    #[error("Minutes and steps must be numbers.")]
    DurationNotANumber,

    #[error("Minutes and steps must be at most 4294967295.")]
    DurationTooLarge,

    #[error("Burned calories must be a number.")]
    BurnedNotANumber,
}

impl FormError {
    /// Short label for metrics and logs.
    pub fn field(&self) -> &'static str {
        match self {
            FormError::MissingMealFields | FormError::MissingExerciseFields => "missing",
            FormError::CalorieNotANumber => "calorie",
            FormError::DurationNotANumber => "minutes_steps",
            FormError::DurationTooLarge => "minutes_steps_range",
            FormError::BurnedNotANumber => "burned",
        }
    }
}

/// Trimmed value of a form field, or `None` when absent or blank.
pub fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a non-negative integer. Surrounding whitespace is ignored.
pub fn parse_non_negative(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|v| *v >= 0)
}

/// Minutes or steps: blank counts as zero, anything else must be a
/// non-negative integer that fits the estimator's `u32` inputs.
pub fn parse_count_or_zero(field: &Option<String>) -> Result<u32, FormError> {
    let Some(raw) = required(field) else {
        return Ok(0);
    };
    let value = parse_non_negative(raw).ok_or(FormError::DurationNotANumber)?;
    u32::try_from(value).map_err(|_| FormError::DurationTooLarge)
}

/// Midnight of a `YYYY-MM-DD` date. Anything else silently becomes `now`.
pub fn parse_form_date(raw: &str, now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::parse_from_str(raw.trim(), FORM_DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_drops_blank() {
        assert_eq!(required(&Some("  rice ".into())), Some("rice"));
        assert_eq!(required(&Some("   ".into())), None);
        assert_eq!(required(&None), None);
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(parse_count_or_zero(&None), Ok(0));
        assert_eq!(parse_count_or_zero(&Some("".into())), Ok(0));
        assert_eq!(parse_count_or_zero(&Some(" 45 ".into())), Ok(45));
        assert_eq!(
            parse_count_or_zero(&Some("4.5".into())),
            Err(FormError::DurationNotANumber)
        );
        assert_eq!(
            parse_count_or_zero(&Some("-1".into())),
            Err(FormError::DurationNotANumber)
        );
    }

    #[test]
    fn counts_beyond_u32_have_their_own_message() {
        assert_eq!(parse_count_or_zero(&Some("4294967295".into())), Ok(u32::MAX));
        assert_eq!(
            parse_count_or_zero(&Some("4294967296".into())),
            Err(FormError::DurationTooLarge)
        );
    }

    #[test]
    fn non_negative_rejects_signs_and_text() {
        assert_eq!(parse_non_negative("0"), Some(0));
        assert_eq!(parse_non_negative(" 12 "), Some(12));
        assert_eq!(parse_non_negative("-12"), None);
        assert_eq!(parse_non_negative("12kcal"), None);
    }

    #[test]
    fn form_date_fallback() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        assert_eq!(
            parse_form_date("2024-12-31", now),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_time(NaiveTime::MIN)
        );
        assert_eq!(parse_form_date("2024-02-30", now), now);
        assert_eq!(parse_form_date("31/12/2024", now), now);
    }
}
