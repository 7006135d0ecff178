//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 探针：/health, /livez, /ping
//! - 演示登录：/login, /logout, /session
//! - 可行性评估：/feasibility, /feasibility/*
//! - 外部数据代理：/geocode, /weather, /weather/forecast, /rainfall/annual
//! - 结构目录：/structures, /structures/search
//! - 计数器：/metrics

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，由调用方挂载到 / 和 /api/ 两种前缀
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/livez", get(livez))
        .route("/ping", get(ping))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(current_session))
        .route("/feasibility", post(evaluate_feasibility))
        .route("/feasibility/rainfall", post(rainfall_analysis))
        .route("/feasibility/storage", post(storage_optimization))
        .route("/feasibility/cost", post(cost_breakdown))
        .route("/feasibility/financial", post(financial_analysis))
        .route("/feasibility/sensitivity", post(sensitivity_analysis))
        .route("/feasibility/located", post(located_feasibility))
        .route("/geocode", get(geocode))
        .route("/weather", get(current_conditions))
        .route("/weather/forecast", get(forecast))
        .route("/rainfall/annual", get(annual_rainfall))
        .route("/structures", get(list_structures))
        .route("/structures/search", get(search_structures))
        .route("/metrics", get(get_metrics))
}
