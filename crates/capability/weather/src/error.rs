/// 外部服务调用错误。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeatherError {
    #[error("location not found")]
    LocationNotFound,
    /// 网络、状态码或响应解析失败。
    #[error("upstream data unavailable: {0}")]
    DataUnavailable(String),
    #[error("Missing OPENWEATHER_API_KEY")]
    MissingApiKey,
    #[error("invalid coordinates: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
}

impl WeatherError {
    pub(crate) fn unavailable(context: &str, err: impl std::fmt::Display) -> Self {
        WeatherError::DataUnavailable(format!("{context}: {err}"))
    }
}
