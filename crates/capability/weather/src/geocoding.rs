//! Nominatim 地理编码。

use crate::http::{HttpSettings, build_client, fetch_text};
use crate::{GeoLocation, Geocoder, WeatherError};
use async_trait::async_trait;
use serde::Deserialize;

/// Nominatim 返回的经纬度是字符串。
#[derive(Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

/// 解析 `search?format=json` 响应，取第一个结果。
pub fn parse_geocode(body: &str) -> Result<GeoLocation, WeatherError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)
        .map_err(|err| WeatherError::unavailable("invalid geocoding response", err))?;
    let place = places.into_iter().next().ok_or(WeatherError::LocationNotFound)?;
    let lat = parse_degrees(&place.lat)?;
    let lon = parse_degrees(&place.lon)?;
    Ok(GeoLocation {
        lat,
        lon,
        display_name: place.display_name,
    })
}

fn parse_degrees(value: &str) -> Result<f64, WeatherError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
        .ok_or_else(|| WeatherError::unavailable("invalid coordinate in geocoding response", value))
}

pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, settings: &HttpSettings) -> Result<Self, WeatherError> {
        Ok(Self {
            http: build_client(settings)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, query: &str) -> Result<GeoLocation, WeatherError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WeatherError::LocationNotFound);
        }
        let request = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("format", "json"), ("limit", "1"), ("q", query)]);
        let body = fetch_text(request, "geocoding request failed").await?;
        parse_geocode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_result_wins() {
        let body = r#"[
            {"lat":"28.6138954","lon":"77.2090057","display_name":"New Delhi, Delhi, India"},
            {"lat":"1.0","lon":"2.0","display_name":"Elsewhere"}
        ]"#;
        let location = parse_geocode(body).expect("location");
        assert_eq!(location.lat, 28.6138954);
        assert_eq!(location.lon, 77.2090057);
        assert_eq!(location.display_name, "New Delhi, Delhi, India");
    }

    #[test]
    fn empty_result_is_not_found() {
        assert_eq!(parse_geocode("[]"), Err(WeatherError::LocationNotFound));
    }

    #[test]
    fn malformed_body_is_unavailable() {
        assert!(matches!(
            parse_geocode(r#"{"error":"rate limited"}"#),
            Err(WeatherError::DataUnavailable(_))
        ));
        assert!(matches!(
            parse_geocode(r#"[{"lat":"north","lon":"77.2"}]"#),
            Err(WeatherError::DataUnavailable(_))
        ));
    }
}
