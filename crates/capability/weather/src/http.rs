use crate::WeatherError;
use std::time::Duration;

/// 出站 HTTP 参数。
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 8_000,
            user_agent: "jalrakshak/0.1".to_string(),
        }
    }
}

pub(crate) fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, WeatherError> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(settings.timeout_ms))
        .user_agent(settings.user_agent.clone())
        .build()
        .map_err(|err| WeatherError::unavailable("failed to build HTTP client", err))
}

/// 发送请求并读取响应文本；非 2xx 视为数据不可用。
pub(crate) async fn fetch_text(
    request: reqwest::RequestBuilder,
    context: &str,
) -> Result<String, WeatherError> {
    let response = request.send().await.map_err(|err| {
        tracing::warn!(error = %err, "{context}");
        WeatherError::unavailable(context, err)
    })?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = %status, "{context}");
        return Err(WeatherError::unavailable(
            context,
            format!("status {status}"),
        ));
    }
    response
        .text()
        .await
        .map_err(|err| WeatherError::unavailable(context, err))
}
