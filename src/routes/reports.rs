use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde_json::{json, Value};

use crate::{
    models::report::{ReportQuery, ReportView},
    services::reports::{ReportError, ReportService},
    AppState,
};

/// GET /reports?date=YYYY-MM-DD — totals and the seven days ending on `date`
/// (local today when omitted)
pub async fn get_report(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<ReportView>, (StatusCode, Json<Value>)> {
    let today = params.date.unwrap_or_else(|| Local::now().date_naive());

    ReportService::build(&state.db, today, state.config.daily_goal)
        .await
        .map(Json)
        .map_err(|e| match &e {
            ReportError::DateOutOfRange(_) => {
                tracing::warn!("Report refused: {e}");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
            }
            ReportError::Store(_) => {
                tracing::error!("Failed to build report for {today}: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
            }
        })
}
