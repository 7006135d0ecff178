//! JalRakshak HTTP API：可行性评估、气象/地理编码代理、演示登录与请求追踪 ID。

mod handlers;
mod middleware;
mod routes;
mod utils;


use axum::{Router, middleware as axum_middleware};
use jal_auth::{Authenticator, DemoAuthService, DemoCredentials, InMemorySessionStore};
use jal_config::AppConfig;
use jal_telemetry::init_tracing;
use jal_weather::{
    ConditionsProvider, Geocoder, HttpSettings, NominatimGeocoder, OpenMeteoClient,
    OpenWeatherClient, WeatherProvider,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// 共享状态：外部能力均以 trait 对象注入，测试时替换为假实现。
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn Authenticator>,
    pub geocoder: Arc<dyn Geocoder>,
    pub weather: Arc<dyn WeatherProvider>,
    pub conditions: Arc<dyn ConditionsProvider>,
    pub ping_message: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let upstream = &config.upstream;
    let settings = HttpSettings {
        timeout_ms: upstream.timeout_ms,
        user_agent: upstream.user_agent.clone(),
    };
    let geocoder = Arc::new(NominatimGeocoder::new(&upstream.nominatim_url, &settings)?);
    let weather = Arc::new(OpenMeteoClient::new(
        &upstream.open_meteo_url,
        &upstream.open_meteo_archive_url,
        &settings,
    )?);
    let conditions = Arc::new(OpenWeatherClient::new(
        &upstream.openweather_url,
        upstream.openweather_api_key.clone(),
        &settings,
    )?);
    if upstream.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set; /weather will return 500");
    }
    let demo = &config.demo_account;
    let sessions = InMemorySessionStore::with_limits(
        Duration::from_secs(demo.session_ttl_seconds),
        usize::try_from(demo.max_sessions).unwrap_or(usize::MAX),
    );
    let auth = Arc::new(DemoAuthService::with_session_store(
        DemoCredentials::new(demo.email.clone(), demo.password.clone()),
        sessions,
    ));

    let state = AppState {
        auth,
        geocoder,
        weather,
        conditions,
        ping_message: config.ping_message.clone(),
    };
    let app = build_app(state, config.cors_enabled);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, "jal-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// 组装完整应用：路由同时挂载在 `/` 与 `/api` 下。
pub fn build_app(state: AppState, cors_enabled: bool) -> Router {
    let api = routes::create_api_router();
    let app = Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(axum_middleware::from_fn(middleware::request_context));
    if cors_enabled {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
