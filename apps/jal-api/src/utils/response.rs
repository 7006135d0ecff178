//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：auth_error, bad_request_error, not_found_error, internal_auth_error, engine_error, weather_error
//! - DTO 转换：user_to_dto, location_to_dto, forecast_to_dto, conditions_to_dto, annual_rainfall_to_dto
//!
//! 所有错误返回统一的 ApiResponse 格式，HTTP 状态码与错误码一一对应。

use api_contract::{
    AnnualRainfallDto, ApiResponse, CurrentConditionsDto, ForecastDto, LocationDto, RainAlertDto,
    UserDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::EngineError;
use jal_auth::{AuthError, User};
use jal_weather::{
    AnnualRainfall, CurrentConditions, Forecast, GeoLocation, RainAlert, WeatherError,
};

/// 认证错误响应
pub fn auth_error(status: StatusCode) -> Response {
    (
        status,
        Json(ApiResponse::<()>::error("AUTH.UNAUTHORIZED", "unauthorized")),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 计算引擎拒绝输入
pub fn engine_error(err: EngineError) -> Response {
    bad_request_error(err.to_string())
}

/// 外部服务错误响应
pub fn weather_error(err: WeatherError) -> Response {
    let (status, code) = match &err {
        WeatherError::LocationNotFound => (StatusCode::NOT_FOUND, "LOCATION.NOT_FOUND"),
        WeatherError::DataUnavailable(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM.UNAVAILABLE"),
        WeatherError::MissingApiKey => {
            (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG.MISSING_API_KEY")
        }
        WeatherError::InvalidCoordinates { .. } => (StatusCode::BAD_REQUEST, "INVALID.REQUEST"),
    };
    (status, Json(ApiResponse::<()>::error(code, err.to_string()))).into_response()
}

/// User 转 UserDto
pub fn user_to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        name: user.name,
    }
}

/// GeoLocation 转 LocationDto
pub fn location_to_dto(location: GeoLocation) -> LocationDto {
    LocationDto {
        lat: location.lat,
        lon: location.lon,
        display_name: location.display_name,
    }
}

/// Forecast 转 ForecastDto，附带降雨提醒
pub fn forecast_to_dto(forecast: Forecast) -> ForecastDto {
    let alert = RainAlert::from_forecast(&forecast);
    ForecastDto {
        next_24h_precipitation_mm: forecast.next_24h_precipitation_mm,
        current_temperature_c: forecast.current_temperature_c,
        current_wind_kmh: forecast.current_wind_kmh,
        current_precipitation_mm: forecast.current_precipitation_mm,
        weather_code: forecast.weather_code,
        alert: RainAlertDto {
            expected: alert.expected,
            mm_next_24h: alert.mm_next_24h,
            message: alert.message,
        },
    }
}

/// CurrentConditions 转 CurrentConditionsDto
pub fn conditions_to_dto(conditions: CurrentConditions) -> CurrentConditionsDto {
    CurrentConditionsDto {
        temperature: conditions.temperature,
        feels_like: conditions.feels_like,
        humidity: conditions.humidity,
        wind_speed: conditions.wind_speed,
        description: conditions.description,
    }
}

/// AnnualRainfall 转 AnnualRainfallDto
pub fn annual_rainfall_to_dto(history: AnnualRainfall) -> AnnualRainfallDto {
    AnnualRainfallDto {
        year: history.year,
        annual_total_mm: history.annual_total_mm,
        monthly_mm: history.monthly_mm.to_vec(),
        days: history.daily_precipitation_mm.len(),
    }
}
