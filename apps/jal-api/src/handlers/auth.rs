//! 探针与演示登录 handlers
//!
//! ## 提供的端点
//!
//! - `GET /health`、`GET /livez` - 存活探针，返回 `{"ok": true}`
//! - `GET /ping` - 返回配置的问候语
//! - `POST /login` - 演示账号登录，返回用户信息与会话 token
//! - `POST /logout` - 注销当前会话（需 Bearer token）
//! - `GET /session` - 查询当前会话用户（需 Bearer token）

use crate::AppState;
use crate::middleware::{bearer_token, require_session};
use crate::utils::{auth_error, internal_auth_error, json_body, user_to_dto};
use api_contract::{ApiResponse, LoginRequest, LoginResponse, PingResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use jal_auth::AuthError;
use jal_telemetry::{record_login_failure, record_login_success};

/// 健康检查端点
pub async fn health() -> impl IntoResponse {
    livez().await
}

/// Liveness 探针：只反映进程存活，不做外部依赖检查。
pub async fn livez() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 与探针一样返回裸 JSON，不套 ApiResponse。
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.ping_message.clone(),
    })
}

/// 登录接口
///
/// # Errors
///
/// - `400 BAD REQUEST`: 请求体不是合法 JSON
/// - `401 UNAUTHORIZED`: 邮箱或密码错误
/// - `500 INTERNAL SERVER ERROR`: 会话存储异常
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    match state.auth.login(&req.email, &req.password).await {
        Ok((user, token)) => {
            record_login_success();
            tracing::info!(user_id = %user.id, "login succeeded");
            let response = LoginResponse {
                user: user_to_dto(user),
                token,
            };
            (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            record_login_failure();
            tracing::info!("login rejected");
            auth_error(StatusCode::UNAUTHORIZED)
        }
        Err(err) => {
            record_login_failure();
            internal_auth_error(err)
        }
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return auth_error(StatusCode::UNAUTHORIZED);
    };
    match state.auth.logout(token).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({ "ok": true }))),
        )
            .into_response(),
        Err(AuthError::SessionInvalid) => auth_error(StatusCode::UNAUTHORIZED),
        Err(err) => internal_auth_error(err),
    }
}

pub async fn current_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match require_session(&state, &headers).await {
        Ok(user) => (StatusCode::OK, Json(ApiResponse::success(user_to_dto(user)))).into_response(),
        Err(response) => response,
    }
}
