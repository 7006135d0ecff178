use api_contract::{
    CostRequest, FinancialRequest, ForecastDto, LocatedFeasibilityRequest, LoginRequest,
    LoginResponse, RainAlertDto, RainfallSource, UserDto,
};
use domain::{ComplexityTier, RoofType, compute_cost_breakdown};

#[test]
fn login_request_reads_email_and_password() {
    let payload = r#"{"email":"admin@jalrakshak.com","password":"admin123"}"#;
    let req: LoginRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.email, "admin@jalrakshak.com");
    assert_eq!(req.password, "admin123");
}

#[test]
fn login_response_shape() {
    let response = LoginResponse {
        user: UserDto {
            id: "user-1".to_string(),
            email: "admin@jalrakshak.com".to_string(),
            name: "Admin".to_string(),
        },
        token: "token-1".to_string(),
    };
    let value = serde_json::to_value(response).expect("serialize");
    assert_eq!(value["user"]["email"], "admin@jalrakshak.com");
    assert_eq!(value["token"], "token-1");
}

#[test]
fn located_request_flattens_site_inputs() {
    let payload = r#"{"location":"Jaipur","roofAreaM2":150,"dwellers":5,"roofType":"tile"}"#;
    let req: LocatedFeasibilityRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.location, "Jaipur");
    assert_eq!(req.year, None);
    assert_eq!(req.inputs.roof_area_m2, 150.0);
    assert_eq!(req.inputs.dwellers, 5);
    assert_eq!(req.inputs.roof_type, RoofType::Tile);
    assert_eq!(req.inputs.annual_rainfall_mm, None);
    assert_eq!(req.inputs.water_price_per_kl, 30.0);
}

#[test]
fn cost_request_tier_is_optional() {
    let req: CostRequest = serde_json::from_str(r#"{"volumeM3":12}"#).expect("parse");
    assert_eq!(req.volume_m3, 12.0);
    assert!(req.tier.is_none());
    assert_eq!(req.roof_area_m2, 0.0);

    let req: CostRequest =
        serde_json::from_str(r#"{"volume":3,"tier":"Advanced","roofArea":40}"#).expect("parse");
    assert_eq!(req.tier, Some(ComplexityTier::Advanced));
}

#[test]
fn financial_request_accepts_engine_cost_and_defaults() {
    let cost = compute_cost_breakdown(4.0, ComplexityTier::Basic, 100.0).expect("valid");
    let payload = serde_json::json!({
        "effectiveHarvestL": 62900,
        "cost": cost,
    });
    let req: FinancialRequest = serde_json::from_value(payload).expect("parse");
    assert_eq!(req.cost, cost);
    assert_eq!(req.water_price_per_kl, 30.0);
    assert_eq!(req.discount_rate_pct, 8.0);
    assert_eq!(req.inflation_rate_pct, 4.0);
}

#[test]
fn forecast_is_camel_case_and_hides_empty_message() {
    let dto = ForecastDto {
        next_24h_precipitation_mm: 0.4,
        current_temperature_c: Some(30.0),
        current_wind_kmh: None,
        current_precipitation_mm: 0.0,
        weather_code: Some(1),
        alert: RainAlertDto {
            expected: false,
            mm_next_24h: 0.4,
            message: None,
        },
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("next24hPrecipitationMm").is_some());
    assert!(value["alert"].get("mmNext24h").is_some());
    assert!(value["alert"].get("message").is_none());
}

#[test]
fn rainfall_source_is_lowercase() {
    assert_eq!(
        serde_json::to_value(RainfallSource::Default).expect("serialize"),
        "default"
    );
    assert_eq!(
        serde_json::to_value(RainfallSource::History).expect("serialize"),
        "history"
    );
    assert_eq!(
        serde_json::to_value(RainfallSource::Request).expect("serialize"),
        "request"
    );
}
