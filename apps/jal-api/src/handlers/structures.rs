//! 结构参考目录
//!
//! - `GET /structures` - 全部条目
//! - `GET /structures/search?q=` - 按名称查找（先精确、后包含）

use crate::utils::{normalize_required, not_found_error, query_params};
use api_contract::{ApiResponse, SearchQuery};
use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{CATALOG, find_structure};

pub async fn list_structures() -> Response {
    (StatusCode::OK, Json(ApiResponse::success(CATALOG.as_slice()))).into_response()
}

pub async fn search_structures(query: Result<Query<SearchQuery>, QueryRejection>) -> Response {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let q = match normalize_required(params.q, "q") {
        Ok(q) => q,
        Err(response) => return response,
    };
    match find_structure(&q) {
        Some(info) => (StatusCode::OK, Json(ApiResponse::success(info))).into_response(),
        None => not_found_error(),
    }
}
