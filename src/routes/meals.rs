use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Form, Json,
};
use chrono::Local;
use serde_json::{json, Value};

use crate::{
    middleware::flash::{self, redirect_with_flash, Flash},
    models::meal::{MealForm, MealListView},
    services::{
        meals::MealService,
        metrics::{FORM_REJECTIONS_COUNTER, MEALS_COUNTER},
    },
    AppState,
};

const MEALS_PATH: &str = "/meals";

/// GET /meals — all meals, newest first, plus the form's default date
pub async fn list_meals(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let records = MealService::list_desc(&state.db).await.map_err(|e| {
        tracing::error!("Failed to list meals: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    let view = MealListView {
        title: "Meals".into(),
        records,
        default_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        messages: flash.clone().into_messages(),
    };
    Ok(flash::consume(&flash, Json(view)))
}

/// POST /meals — validate, store, then redirect back to the list
pub async fn create_meal(
    State(state): State<AppState>,
    Form(form): Form<MealForm>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let new_meal = match form.validate(Local::now().naive_local()) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("Meal form rejected: {e}");
            FORM_REJECTIONS_COUNTER
                .with_label_values(&["meal", e.field()])
                .inc();
            return Ok(redirect_with_flash(MEALS_PATH, &e.to_string()));
        }
    };

    let id = MealService::insert(&state.db, &new_meal).await.map_err(|e| {
        tracing::error!("Failed to save meal: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    MEALS_COUNTER.inc();
    tracing::info!(id, calorie = new_meal.calorie, "Meal saved");
    Ok(redirect_with_flash(MEALS_PATH, "Meal saved."))
}
