use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::form::{parse_form_date, parse_non_negative, required, FormError};

/// One logged meal. Rows are never updated once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealRecord {
    pub id: i64,
    pub meal: String,
    pub calorie: i64,
    pub date: NaiveDateTime,
}

/// Raw body of POST /meals. Every field arrives as optional text so that
/// missing and malformed input can be reported instead of rejected by axum.
#[derive(Debug, Default, Deserialize)]
pub struct MealForm {
    pub meal: Option<String>,
    pub calorie: Option<String>,
    pub date: Option<String>,
}

/// A meal form that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeal {
    pub meal: String,
    pub calorie: i64,
    pub date: NaiveDateTime,
}

impl MealForm {
    pub fn validate(&self, now: NaiveDateTime) -> Result<NewMeal, FormError> {
        let (Some(meal), Some(calorie), Some(date)) = (
            required(&self.meal),
            required(&self.calorie),
            required(&self.date),
        ) else {
            return Err(FormError::MissingMealFields);
        };

        let calorie = parse_non_negative(calorie).ok_or(FormError::CalorieNotANumber)?;

        Ok(NewMeal {
            meal: meal.to_string(),
            calorie,
            date: parse_form_date(date, now),
        })
    }
}

/// View-data for GET /meals.
#[derive(Debug, Serialize, Deserialize)]
pub struct MealListView {
    pub title: String,
    pub records: Vec<MealRecord>,
    /// Today as `YYYY-MM-DD`, used to pre-fill the form.
    pub default_date: String,
    pub messages: Vec<String>,
}
