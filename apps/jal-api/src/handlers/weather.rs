//! 外部数据代理 handlers
//!
//! - `GET /geocode?q=` - 地名解析
//! - `GET /weather/forecast?lat=&lon=` - 24 小时降雨预报与提醒
//! - `GET /weather?lat=&lon=` - 实况天气（需 OPENWEATHER_API_KEY）
//! - `GET /rainfall/annual?lat=&lon=&year=` - 年度逐日降雨汇总

use crate::AppState;
use crate::utils::{
    annual_rainfall_to_dto, conditions_to_dto, forecast_to_dto, location_to_dto,
    normalize_required, query_params, require_coordinates, resolve_year, weather_error,
};
use api_contract::{AnnualRainfallQuery, ApiResponse, CoordinatesQuery, SearchQuery};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jal_telemetry::{
    record_geocode_failure, record_geocode_success, record_weather_failure,
    record_weather_success,
};

pub async fn geocode(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let q = match normalize_required(params.q, "q") {
        Ok(q) => q,
        Err(response) => return response,
    };
    match state.geocoder.resolve(&q).await {
        Ok(location) => {
            record_geocode_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(location_to_dto(location))),
            )
                .into_response()
        }
        Err(err) => {
            record_geocode_failure();
            weather_error(err)
        }
    }
}

pub async fn forecast(
    State(state): State<AppState>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> Response {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let (lat, lon) = match require_coordinates(params.lat, params.lon) {
        Ok(coordinates) => coordinates,
        Err(response) => return response,
    };
    match state.weather.forecast(lat, lon).await {
        Ok(forecast) => {
            record_weather_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(forecast_to_dto(forecast))),
            )
                .into_response()
        }
        Err(err) => {
            record_weather_failure();
            weather_error(err)
        }
    }
}

pub async fn current_conditions(
    State(state): State<AppState>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> Response {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let (lat, lon) = match require_coordinates(params.lat, params.lon) {
        Ok(coordinates) => coordinates,
        Err(response) => return response,
    };
    match state.conditions.current(lat, lon).await {
        Ok(conditions) => {
            record_weather_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(conditions_to_dto(conditions))),
            )
                .into_response()
        }
        Err(err) => {
            record_weather_failure();
            weather_error(err)
        }
    }
}

/// 年份缺省为上一年。
pub async fn annual_rainfall(
    State(state): State<AppState>,
    query: Result<Query<AnnualRainfallQuery>, QueryRejection>,
) -> Response {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let (lat, lon) = match require_coordinates(params.lat, params.lon) {
        Ok(coordinates) => coordinates,
        Err(response) => return response,
    };
    let year = match resolve_year(params.year) {
        Ok(year) => year,
        Err(response) => return response,
    };
    match state.weather.annual_history(lat, lon, year).await {
        Ok(history) => {
            record_weather_success();
            (
                StatusCode::OK,
                Json(ApiResponse::success(annual_rainfall_to_dto(history))),
            )
                .into_response()
        }
        Err(err) => {
            record_weather_failure();
            weather_error(err)
        }
    }
}
