//! OpenWeather 实况天气。

use crate::http::{HttpSettings, build_client, fetch_text};
use crate::{ConditionsProvider, CurrentConditions, WeatherError, validate_coordinates};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Deserialize)]
struct OpenWeatherBody {
    main: MainBlock,
    #[serde(default)]
    wind: Option<WindBlock>,
    #[serde(default)]
    weather: Vec<WeatherEntry>,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Deserialize)]
struct WeatherEntry {
    description: String,
}

/// 解析 `data/2.5/weather`（`units=metric`）响应。
pub fn parse_conditions(body: &str) -> Result<CurrentConditions, WeatherError> {
    let parsed: OpenWeatherBody = serde_json::from_str(body)
        .map_err(|err| WeatherError::unavailable("invalid weather response", err))?;
    Ok(CurrentConditions {
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.map(|wind| wind.speed).unwrap_or(0.0),
        description: parsed
            .weather
            .into_iter()
            .next()
            .map(|entry| entry.description)
            .unwrap_or_default(),
    })
}

pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        settings: &HttpSettings,
    ) -> Result<Self, WeatherError> {
        Ok(Self {
            http: build_client(settings)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl ConditionsProvider for OpenWeatherClient {
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherError> {
        validate_coordinates(lat, lon)?;
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let request = self
            .http
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
            ]);
        let body = fetch_text(request, "weather request failed").await?;
        parse_conditions(&body)
    }
}
