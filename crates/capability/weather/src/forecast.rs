//! Open-Meteo 预报与历史降雨。

use crate::http::{HttpSettings, build_client, fetch_text};
use crate::{AnnualRainfall, Forecast, WeatherError, WeatherProvider, validate_coordinates};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

const FORECAST_HOURS: usize = 24;

#[derive(Deserialize)]
struct ForecastBody {
    #[serde(default)]
    current: Option<CurrentBlock>,
    #[serde(default)]
    hourly: Option<HourlyBlock>,
}

#[derive(Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<f64>,
    precipitation: Option<f64>,
    wind_speed_10m: Option<f64>,
    weather_code: Option<i64>,
}

#[derive(Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
}

#[derive(Deserialize)]
struct ArchiveBody {
    daily: DailyBlock,
}

#[derive(Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    precipitation_sum: Vec<Option<f64>>,
}

/// 解析预报响应：前 24 个小时值求和，缺失值按 0 计。
pub fn parse_forecast(body: &str) -> Result<Forecast, WeatherError> {
    let parsed: ForecastBody = serde_json::from_str(body)
        .map_err(|err| WeatherError::unavailable("invalid forecast response", err))?;

    let next_24h_precipitation_mm = parsed
        .hourly
        .map(|hourly| {
            hourly
                .precipitation
                .iter()
                .take(FORECAST_HOURS)
                .fold(0.0, |sum, value| sum + value.unwrap_or(0.0))
        })
        .unwrap_or(0.0);

    let current = parsed.current;
    Ok(Forecast {
        next_24h_precipitation_mm,
        current_temperature_c: current.as_ref().and_then(|c| c.temperature_2m),
        current_wind_kmh: current.as_ref().and_then(|c| c.wind_speed_10m),
        current_precipitation_mm: current
            .as_ref()
            .and_then(|c| c.precipitation)
            .unwrap_or(0.0),
        weather_code: current.as_ref().and_then(|c| c.weather_code),
    })
}

/// 解析历史响应，按日期归入自然月；缺失值按 0 计，其他年份的日期忽略。
pub fn parse_archive(body: &str, year: i32) -> Result<AnnualRainfall, WeatherError> {
    let parsed: ArchiveBody = serde_json::from_str(body)
        .map_err(|err| WeatherError::unavailable("invalid archive response", err))?;
    let daily = parsed.daily;
    if daily.time.len() != daily.precipitation_sum.len() {
        return Err(WeatherError::DataUnavailable(
            "archive response has mismatched daily arrays".to_string(),
        ));
    }

    let mut monthly_mm = [0.0; 12];
    let mut daily_precipitation_mm = Vec::with_capacity(daily.time.len());
    for (day, value) in daily.time.iter().zip(daily.precipitation_sum) {
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_err(|err| WeatherError::unavailable("invalid date in archive response", err))?;
        if date.year() != year {
            continue;
        }
        let mm = value.unwrap_or(0.0);
        monthly_mm[date.month0() as usize] += mm;
        daily_precipitation_mm.push(mm);
    }
    if daily_precipitation_mm.is_empty() {
        return Err(WeatherError::DataUnavailable(format!(
            "no rainfall history for {year}"
        )));
    }

    let annual_total_mm = daily_precipitation_mm.iter().fold(0.0, |sum, mm| sum + mm);
    Ok(AnnualRainfall {
        year,
        daily_precipitation_mm,
        annual_total_mm,
        monthly_mm,
    })
}

pub struct OpenMeteoClient {
    http: reqwest::Client,
    forecast_url: String,
    archive_url: String,
}

impl OpenMeteoClient {
    pub fn new(
        forecast_url: impl Into<String>,
        archive_url: impl Into<String>,
        settings: &HttpSettings,
    ) -> Result<Self, WeatherError> {
        Ok(Self {
            http: build_client(settings)?,
            forecast_url: forecast_url.into().trim_end_matches('/').to_string(),
            archive_url: archive_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn forecast(&self, lat: f64, lon: f64) -> Result<Forecast, WeatherError> {
        validate_coordinates(lat, lon)?;
        let request = self
            .http
            .get(format!("{}/v1/forecast", self.forecast_url))
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                (
                    "current",
                    "temperature_2m,precipitation,wind_speed_10m,weather_code".to_string(),
                ),
                ("hourly", "precipitation".to_string()),
                ("forecast_days", "2".to_string()),
                ("timezone", "auto".to_string()),
            ]);
        let body = fetch_text(request, "forecast request failed").await?;
        parse_forecast(&body)
    }

    async fn annual_history(
        &self,
        lat: f64,
        lon: f64,
        year: i32,
    ) -> Result<AnnualRainfall, WeatherError> {
        validate_coordinates(lat, lon)?;
        let request = self
            .http
            .get(format!("{}/v1/archive", self.archive_url))
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("start_date", format!("{year:04}-01-01")),
                ("end_date", format!("{year:04}-12-31")),
                ("daily", "precipitation_sum".to_string()),
                ("timezone", "auto".to_string()),
            ]);
        let body = fetch_text(request, "archive request failed").await?;
        parse_archive(&body, year)
    }
}
