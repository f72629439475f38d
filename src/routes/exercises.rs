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
    models::exercise::{BurnedSource, ExerciseForm, ExerciseListView},
    services::{
        exercises::ExerciseService,
        metrics::{EXERCISES_COUNTER, FORM_REJECTIONS_COUNTER},
    },
    AppState,
};

const EXERCISES_PATH: &str = "/exercises";

/// GET /exercises
pub async fn list_exercises(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let records = ExerciseService::list_desc(&state.db).await.map_err(|e| {
        tracing::error!("Failed to list exercises: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    let view = ExerciseListView {
        title: "Exercises".into(),
        records,
        default_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        messages: flash.clone().into_messages(),
    };
    Ok(flash::consume(&flash, Json(view)))
}

/// POST /exercises — a blank `burned` field is estimated from the
/// description, duration and steps
pub async fn create_exercise(
    State(state): State<AppState>,
    Form(form): Form<ExerciseForm>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let now = Local::now().naive_local();
    let new_exercise = match form.validate(now, state.config.user_weight_kg) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!("Exercise form rejected: {e}");
            FORM_REJECTIONS_COUNTER
                .with_label_values(&["exercise", e.field()])
                .inc();
            return Ok(redirect_with_flash(EXERCISES_PATH, &e.to_string()));
        }
    };

    let id = ExerciseService::insert(&state.db, &new_exercise)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save exercise: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })?;

    EXERCISES_COUNTER
        .with_label_values(&[new_exercise.source.label()])
        .inc();
    if let BurnedSource::Estimated(category) = new_exercise.source {
        tracing::info!(
            id,
            activity = category.key(),
            burned = new_exercise.burned,
            "Exercise saved with estimate"
        );
    } else {
        tracing::info!(id, burned = new_exercise.burned, "Exercise saved");
    }

    Ok(redirect_with_flash(
        EXERCISES_PATH,
        &format!("Exercise saved (estimated {} kcal).", new_exercise.burned),
    ))
}
