//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 外部气象/地理编码服务的连接参数。
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub nominatim_url: String,
    pub open_meteo_url: String,
    pub open_meteo_archive_url: String,
    pub openweather_url: String,
    /// 未配置时 `/weather` 返回 500。
    pub openweather_api_key: Option<String>,
    pub timeout_ms: u64,
    /// Nominatim 使用策略要求带 User-Agent。
    pub user_agent: String,
}

/// 演示账号与会话限制。
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub session_ttl_seconds: u64,
    pub max_sessions: u64,
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub upstream: UpstreamConfig,
    pub demo_account: DemoAccount,
    pub ping_message: String,
    pub cors_enabled: bool,
}

impl AppConfig {
    /// 从环境变量读取配置，全部项均有默认值。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = read_with_default("JAL_HTTP_ADDR", "127.0.0.1:8080");
        let upstream = UpstreamConfig {
            nominatim_url: read_url("JAL_NOMINATIM_URL", "https://nominatim.openstreetmap.org")?,
            open_meteo_url: read_url("JAL_OPEN_METEO_URL", "https://api.open-meteo.com")?,
            open_meteo_archive_url: read_url(
                "JAL_OPEN_METEO_ARCHIVE_URL",
                "https://archive-api.open-meteo.com",
            )?,
            openweather_url: read_url("JAL_OPENWEATHER_URL", "https://api.openweathermap.org")?,
            openweather_api_key: read_optional("OPENWEATHER_API_KEY"),
            timeout_ms: read_positive_u64("JAL_HTTP_TIMEOUT_MS", 8_000)?,
            user_agent: read_with_default("JAL_USER_AGENT", "jalrakshak/0.1"),
        };
        let demo_account = DemoAccount {
            email: read_with_default("JAL_DEMO_EMAIL", "admin@jalrakshak.com"),
            password: read_with_default("JAL_DEMO_PASSWORD", "admin123"),
            session_ttl_seconds: read_positive_u64("JAL_SESSION_TTL_SECONDS", 28_800)?,
            max_sessions: read_positive_u64("JAL_MAX_SESSIONS", 1_024)?,
        };
        let ping_message = read_with_default("PING_MESSAGE", "ping");
        let cors_enabled = read_bool_with_default("JAL_CORS", true);

        Ok(Self {
            http_addr,
            upstream,
            demo_account,
            ping_message,
            cors_enabled,
        })
    }
}

fn read_with_default(key: &str, default: &str) -> String {
    read_optional(key).unwrap_or_else(|| default.to_string())
}

/// 读取基础 URL，去掉末尾的 `/`。
fn read_url(key: &str, default: &str) -> Result<String, ConfigError> {
    let value = read_with_default(key, default);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid(key.to_string(), value));
    }
    Ok(value.trim_end_matches('/').to_string())
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

/// 非零整数；为 0 时报错。
fn read_positive_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match read_u64_with_default(key, default)? {
        0 => Err(ConfigError::Invalid(key.to_string(), "0".to_string())),
        value => Ok(value),
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
