//! 输入验证辅助函数
//!
//! - normalize_required：验证必填字段，去除空格并检查非空
//! - json_body / query_params：提取失败时返回统一的 400 响应
//! - require_coordinates：lat/lon 必须同时提供
//! - resolve_year：年份缺省为上一年，且不早于历史数据起始年

use crate::utils::response::bad_request_error;
use axum::{
    Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
    response::Response,
};
use chrono::{Datelike, Utc};

/// 历史降雨数据最早年份。
pub const EARLIEST_HISTORY_YEAR: i32 = 1940;

/// 验证必填字段，去除空格并检查非空
pub fn normalize_required(value: Option<String>, field: &str) -> Result<String, Response> {
    let value = value.unwrap_or_default();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| bad_request_error(rejection.body_text()))
}

pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Response> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| bad_request_error(rejection.body_text()))
}

pub fn require_coordinates(lat: Option<f64>, lon: Option<f64>) -> Result<(f64, f64), Response> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok((lat, lon)),
        _ => Err(bad_request_error("lat and lon are required")),
    }
}

pub fn previous_year() -> i32 {
    Utc::now().year() - 1
}

/// 只接受已结束的年份。
pub fn resolve_year(year: Option<i32>) -> Result<i32, Response> {
    let latest = previous_year();
    let year = year.unwrap_or(latest);
    if !(EARLIEST_HISTORY_YEAR..=latest).contains(&year) {
        return Err(bad_request_error(format!(
            "year must be between {EARLIEST_HISTORY_YEAR} and {latest}"
        )));
    }
    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_values_are_trimmed() {
        assert_eq!(
            normalize_required(Some("  Pune ".to_string()), "q").ok(),
            Some("Pune".to_string())
        );
        assert!(normalize_required(Some("   ".to_string()), "q").is_err());
        assert!(normalize_required(None, "q").is_err());
    }

    #[test]
    fn coordinates_need_both_values() {
        assert_eq!(require_coordinates(Some(1.0), Some(2.0)).ok(), Some((1.0, 2.0)));
        assert!(require_coordinates(Some(1.0), None).is_err());
        assert!(require_coordinates(None, None).is_err());
    }

    #[test]
    fn year_defaults_to_last_finished_year() {
        assert_eq!(resolve_year(None).ok(), Some(previous_year()));
        assert_eq!(resolve_year(Some(2000)).ok(), Some(2000));
        assert!(resolve_year(Some(1900)).is_err());
        assert!(resolve_year(Some(previous_year() + 1)).is_err());
    }
}
