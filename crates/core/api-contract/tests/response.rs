use api_contract::{ApiResponse, LocationDto};
use serde_json::json;

#[test]
fn success_envelope_wraps_engine_output() {
    let response = ApiResponse::success(json!({ "totalAnnual": 68_000 }));
    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["totalAnnual"], 68_000);
    assert!(value["error"].is_null());
}

#[test]
fn rejected_input_envelope() {
    let response = ApiResponse::<()>::error(
        "INVALID.REQUEST",
        "invalid input roofAreaM2: must not exceed 1e9",
    );
    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["success"], false);
    assert!(value["data"].is_null());
    assert_eq!(value["error"]["code"], "INVALID.REQUEST");
    assert_eq!(
        value["error"]["message"],
        "invalid input roofAreaM2: must not exceed 1e9"
    );
}

#[test]
fn unknown_location_envelope() {
    let response =
        ApiResponse::<LocationDto>::error("LOCATION.NOT_FOUND", "location not found");
    assert!(!response.success);
    assert!(response.data.is_none());
    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["error"]["code"], "LOCATION.NOT_FOUND");
    assert_eq!(value["error"]["message"], "location not found");
}
