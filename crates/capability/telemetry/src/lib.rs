//! 追踪、请求 ID 生成与进程级计数器。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 计数器快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub feasibility_runs: u64,
    pub invalid_inputs: u64,
    pub geocode_success: u64,
    pub geocode_failure: u64,
    pub weather_success: u64,
    pub weather_failure: u64,
    pub login_success: u64,
    pub login_failure: u64,
}

/// 进程级计数器，只增不减。
pub struct TelemetryMetrics {
    feasibility_runs: AtomicU64,
    invalid_inputs: AtomicU64,
    geocode_success: AtomicU64,
    geocode_failure: AtomicU64,
    weather_success: AtomicU64,
    weather_failure: AtomicU64,
    login_success: AtomicU64,
    login_failure: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            feasibility_runs: AtomicU64::new(0),
            invalid_inputs: AtomicU64::new(0),
            geocode_success: AtomicU64::new(0),
            geocode_failure: AtomicU64::new(0),
            weather_success: AtomicU64::new(0),
            weather_failure: AtomicU64::new(0),
            login_success: AtomicU64::new(0),
            login_failure: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            feasibility_runs: self.feasibility_runs.load(Ordering::Relaxed),
            invalid_inputs: self.invalid_inputs.load(Ordering::Relaxed),
            geocode_success: self.geocode_success.load(Ordering::Relaxed),
            geocode_failure: self.geocode_failure.load(Ordering::Relaxed),
            weather_success: self.weather_success.load(Ordering::Relaxed),
            weather_failure: self.weather_failure.load(Ordering::Relaxed),
            login_success: self.login_success.load(Ordering::Relaxed),
            login_failure: self.login_failure.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录一次成功的可行性计算。
pub fn record_feasibility_run() {
    metrics().feasibility_runs.fetch_add(1, Ordering::Relaxed);
}

/// 记录被拒绝的输入。
pub fn record_invalid_input() {
    metrics().invalid_inputs.fetch_add(1, Ordering::Relaxed);
}

pub fn record_geocode_success() {
    metrics().geocode_success.fetch_add(1, Ordering::Relaxed);
}

pub fn record_geocode_failure() {
    metrics().geocode_failure.fetch_add(1, Ordering::Relaxed);
}

/// 记录气象接口（预报、历史、实况）调用成功。
pub fn record_weather_success() {
    metrics().weather_success.fetch_add(1, Ordering::Relaxed);
}

pub fn record_weather_failure() {
    metrics().weather_failure.fetch_add(1, Ordering::Relaxed);
}

pub fn record_login_success() {
    metrics().login_success.fetch_add(1, Ordering::Relaxed);
}

pub fn record_login_failure() {
    metrics().login_failure.fetch_add(1, Ordering::Relaxed);
}
