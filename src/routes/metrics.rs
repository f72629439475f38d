use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use prometheus::{Encoder, TextEncoder};

/// GET /metrics — Prometheus text exposition of the healthlog counters.
pub async fn metrics_handler() -> Result<impl IntoResponse, StatusCode> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&prometheus::gather(), &mut buffer)
        .map_err(|e| {
            tracing::error!("Failed to encode metrics: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(([(header::CONTENT_TYPE, encoder.format_type().to_string())], buffer))
}
