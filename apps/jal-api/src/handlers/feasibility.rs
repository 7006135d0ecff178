//! 可行性评估 handlers
//!
//! - `POST /feasibility` - 完整评估报告
//! - `POST /feasibility/{rainfall,storage,cost,financial,sensitivity}` - 单步计算
//! - `POST /feasibility/located` - 按地名取历史降雨后评估
//!
//! 计算全部委托给 `domain`，这里只负责取参、记数与错误映射。

use crate::AppState;
use crate::utils::{
    engine_error, json_body, location_to_dto, normalize_required, resolve_year, weather_error,
};
use api_contract::{
    ApiResponse, CostRequest, FinancialRequest, LocatedFeasibilityRequest,
    LocatedFeasibilityResponse, RainfallSource, StorageRequest,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{
    ComplexityTier, EngineError, SensitivityBase, SiteInputs, assess, compute_cost_breakdown,
    compute_financial_analysis, compute_rainfall_analysis, compute_sensitivity_analysis,
    compute_storage_optimization, finite_non_negative,
};
use jal_telemetry::{
    record_feasibility_run, record_geocode_failure, record_geocode_success, record_invalid_input,
    record_weather_failure, record_weather_success,
};
use serde::Serialize;

fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

fn rejected(err: EngineError) -> Response {
    record_invalid_input();
    tracing::info!(error = %err, "feasibility input rejected");
    engine_error(err)
}

pub async fn evaluate_feasibility(payload: Result<Json<SiteInputs>, JsonRejection>) -> Response {
    let inputs = match json_body(payload) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };
    match assess(&inputs) {
        Ok(report) => {
            record_feasibility_run();
            ok(report)
        }
        Err(err) => rejected(err),
    }
}

pub async fn rainfall_analysis(payload: Result<Json<SiteInputs>, JsonRejection>) -> Response {
    let inputs = match json_body(payload) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };
    match inputs.validated() {
        Ok(inputs) => ok(compute_rainfall_analysis(&inputs)),
        Err(err) => rejected(err),
    }
}

pub async fn storage_optimization(
    payload: Result<Json<StorageRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    match finite_non_negative("effectiveHarvestL", req.effective_harvest_l) {
        Ok(effective) => ok(compute_storage_optimization(effective, req.dwellers)),
        Err(err) => rejected(err),
    }
}

/// 未指定分级时按容积推断。
pub async fn cost_breakdown(payload: Result<Json<CostRequest>, JsonRejection>) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let tier = req
        .tier
        .unwrap_or_else(|| ComplexityTier::for_volume(req.volume_m3.max(0.0).round() as u64));
    match compute_cost_breakdown(req.volume_m3, tier, req.roof_area_m2) {
        Ok(cost) => ok(cost),
        Err(err) => rejected(err),
    }
}

pub async fn financial_analysis(
    payload: Result<Json<FinancialRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    match compute_financial_analysis(
        req.effective_harvest_l,
        &req.cost,
        req.water_price_per_kl,
        req.discount_rate_pct,
        req.inflation_rate_pct,
    ) {
        Ok(analysis) => ok(analysis),
        Err(err) => rejected(err),
    }
}

pub async fn sensitivity_analysis(
    payload: Result<Json<SensitivityBase>, JsonRejection>,
) -> Response {
    let base = match json_body(payload) {
        Ok(base) => base,
        Err(response) => return response,
    };
    match base.validated() {
        Ok(base) => ok(compute_sensitivity_analysis(&base)),
        Err(err) => rejected(err),
    }
}

/// 地名 → 坐标 → 上一年（或指定年份）降雨总量 → 完整报告。
///
/// 请求已填写年降雨量时直接使用；历史数据不可用时退回默认降雨量，不视为失败。
pub async fn located_feasibility(
    State(state): State<AppState>,
    payload: Result<Json<LocatedFeasibilityRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let query = match normalize_required(Some(req.location), "location") {
        Ok(query) => query,
        Err(response) => return response,
    };
    let year = match resolve_year(req.year) {
        Ok(year) => year,
        Err(response) => return response,
    };

    let location = match state.geocoder.resolve(&query).await {
        Ok(location) => {
            record_geocode_success();
            location
        }
        Err(err) => {
            record_geocode_failure();
            return weather_error(err);
        }
    };

    let mut inputs = req.inputs;
    let rainfall_source = if inputs.annual_rainfall_mm.is_some() {
        RainfallSource::Request
    } else {
        match state
            .weather
            .annual_history(location.lat, location.lon, year)
            .await
        {
            Ok(history) => {
                record_weather_success();
                inputs.annual_rainfall_mm = Some(history.annual_total_mm);
                RainfallSource::History
            }
            Err(err) => {
                record_weather_failure();
                tracing::warn!(error = %err, year, "rainfall history unavailable, using default");
                RainfallSource::Default
            }
        }
    };

    let report = match assess(&inputs) {
        Ok(report) => report,
        Err(err) => return rejected(err),
    };
    record_feasibility_run();
    tracing::info!(
        location = %location.display_name,
        source = ?rainfall_source,
        "located feasibility assessed"
    );
    ok(LocatedFeasibilityResponse {
        location: location_to_dto(location),
        rainfall_source,
        report,
    })
}
