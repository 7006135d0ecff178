//! 对外暴露的值对象。

use crate::WeatherError;

/// 触发降雨提醒的 24 小时累计降雨阈值（mm）。
pub const RAIN_ALERT_THRESHOLD_MM: f64 = 1.0;
pub const RAIN_ALERT_MESSAGE: &str = "Rain expected in next 24 hours! Prepare your rooftop system.";

#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// 预报摘要。缺失的小时降雨按 0 计。
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub next_24h_precipitation_mm: f64,
    pub current_temperature_c: Option<f64>,
    pub current_wind_kmh: Option<f64>,
    pub current_precipitation_mm: f64,
    pub weather_code: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainAlert {
    pub expected: bool,
    pub mm_next_24h: f64,
    pub message: Option<String>,
}

impl RainAlert {
    pub fn from_forecast(forecast: &Forecast) -> Self {
        let expected = forecast.next_24h_precipitation_mm >= RAIN_ALERT_THRESHOLD_MM;
        Self {
            expected,
            mm_next_24h: forecast.next_24h_precipitation_mm,
            message: expected.then(|| RAIN_ALERT_MESSAGE.to_string()),
        }
    }
}

/// 某一年的降雨历史。月度合计按返回日期归入自然月。
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualRainfall {
    pub year: i32,
    pub daily_precipitation_mm: Vec<f64>,
    pub annual_total_mm: f64,
    pub monthly_mm: [f64; 12],
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
}

/// 经纬度必须是有限值且在合法范围内。
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), WeatherError> {
    let valid = lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);
    if valid {
        Ok(())
    } else {
        Err(WeatherError::InvalidCoordinates { lat, lon })
    }
}
