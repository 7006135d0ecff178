//! 进程内计数器快照。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jal_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            feasibility_runs: snapshot.feasibility_runs,
            invalid_inputs: snapshot.invalid_inputs,
            geocode_success: snapshot.geocode_success,
            geocode_failure: snapshot.geocode_failure,
            weather_success: snapshot.weather_success,
            weather_failure: snapshot.weather_failure,
            login_success: snapshot.login_success,
            login_failure: snapshot.login_failure,
        })),
    )
        .into_response()
}
