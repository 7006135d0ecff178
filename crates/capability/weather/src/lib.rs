//! 外部气象与地理编码服务接入。
//!
//! - Nominatim：地名 → 经纬度
//! - Open-Meteo：24 小时降雨预报、历年逐日降雨
//! - OpenWeather：实况天气（需 API key）
//!
//! 每个服务都有一个 trait 作为接缝，HTTP 层只依赖 trait；响应解析为纯函数，可直接用 JSON 样本测试。

mod conditions;
mod error;
mod forecast;
mod geocoding;
mod http;
mod model;

use async_trait::async_trait;

pub use conditions::{OpenWeatherClient, parse_conditions};
pub use error::WeatherError;
pub use forecast::{OpenMeteoClient, parse_archive, parse_forecast};
pub use geocoding::{NominatimGeocoder, parse_geocode};
pub use http::HttpSettings;
pub use model::{
    AnnualRainfall, CurrentConditions, Forecast, GeoLocation, RAIN_ALERT_MESSAGE,
    RAIN_ALERT_THRESHOLD_MM, RainAlert, validate_coordinates,
};

/// 地名解析。
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// 返回第一个匹配结果；无结果时为 `LocationNotFound`。
    async fn resolve(&self, query: &str) -> Result<GeoLocation, WeatherError>;
}

/// 降雨预报与历史数据。
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn forecast(&self, lat: f64, lon: f64) -> Result<Forecast, WeatherError>;
    /// 指定年份 1 月 1 日至 12 月 31 日的逐日降雨。
    async fn annual_history(
        &self,
        lat: f64,
        lon: f64,
        year: i32,
    ) -> Result<AnnualRainfall, WeatherError>;
}

/// 实况天气。
#[async_trait]
pub trait ConditionsProvider: Send + Sync {
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherError>;
}
