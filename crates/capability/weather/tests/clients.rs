use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use jal_weather::{
    Geocoder, HttpSettings, NominatimGeocoder, OpenMeteoClient, WeatherError, WeatherProvider,
};
use serde_json::{Value, json};
use std::collections::HashMap;

/// 启动本地假上游，返回基础 URL。
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/search", get(search))
        .route("/v1/forecast", get(forecast))
        .route("/v1/archive", get(archive));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(params.get("format").map(String::as_str), Some("json"));
    match params.get("q").map(String::as_str) {
        Some("Pune") => Json(json!([
            {"lat": "18.5213738", "lon": "73.8545071", "display_name": "Pune, Maharashtra, India"}
        ])),
        _ => Json(json!([])),
    }
}

async fn forecast(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(params.get("hourly").map(String::as_str), Some("precipitation"));
    assert_eq!(params.get("forecast_days").map(String::as_str), Some("2"));
    let mut hourly = vec![json!(0.25); 24];
    hourly.extend(vec![json!(5.0); 24]);
    Json(json!({
        "current": {"temperature_2m": 29.0, "precipitation": 0.0, "wind_speed_10m": 7.2, "weather_code": 2},
        "hourly": {"precipitation": hourly}
    }))
}

async fn archive(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if params.get("start_date").map(String::as_str) != Some("2023-01-01") {
        return Err(StatusCode::BAD_REQUEST);
    }
    assert_eq!(params.get("end_date").map(String::as_str), Some("2023-12-31"));
    Ok(Json(json!({
        "daily": {
            "time": ["2023-06-01", "2023-06-02", "2023-09-10"],
            "precipitation_sum": [12.0, 8.0, null]
        }
    })))
}

#[tokio::test]
async fn geocoder_resolves_first_place() {
    let base = spawn_upstream().await;
    let geocoder = NominatimGeocoder::new(&base, &HttpSettings::default()).expect("client");

    let location = geocoder.resolve("  Pune ").await.expect("location");
    assert_eq!(location.display_name, "Pune, Maharashtra, India");
    assert!((location.lat - 18.5213738).abs() < 1e-9);

    let missing = geocoder.resolve("Atlantis").await;
    assert_eq!(missing, Err(WeatherError::LocationNotFound));
}

#[tokio::test]
async fn forecast_and_history_round_trip_through_http() {
    let base = spawn_upstream().await;
    let client = OpenMeteoClient::new(&base, &base, &HttpSettings::default()).expect("client");

    let forecast = client.forecast(18.52, 73.85).await.expect("forecast");
    assert_eq!(forecast.next_24h_precipitation_mm, 6.0);
    assert_eq!(forecast.weather_code, Some(2));

    let history = client.annual_history(18.52, 73.85, 2023).await.expect("history");
    assert_eq!(history.annual_total_mm, 20.0);
    assert_eq!(history.monthly_mm[5], 20.0);

    // 假上游对其他年份返回 400
    let failed = client.annual_history(18.52, 73.85, 2022).await;
    assert!(matches!(failed, Err(WeatherError::DataUnavailable(_))));
}

#[tokio::test]
async fn invalid_coordinates_never_reach_upstream() {
    let client =
        OpenMeteoClient::new("http://127.0.0.1:9", "http://127.0.0.1:9", &HttpSettings::default())
            .expect("client");
    let result = client.forecast(123.0, 0.0).await;
    assert!(matches!(result, Err(WeatherError::InvalidCoordinates { .. })));
}

#[tokio::test]
async fn unreachable_upstream_is_unavailable() {
    let settings = HttpSettings {
        timeout_ms: 500,
        ..HttpSettings::default()
    };
    let geocoder = NominatimGeocoder::new("http://127.0.0.1:9", &settings).expect("client");
    let result = geocoder.resolve("Pune").await;
    assert!(matches!(result, Err(WeatherError::DataUnavailable(_))));
}
