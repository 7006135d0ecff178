//! 稳定的 DTO 与 API 响应契约。

use domain::{ComplexityTier, CostBreakdown, FeasibilityReport, SiteInputs};
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 登录请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 用户信息。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// 登录响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserDto,
    /// 会话 token，后续请求以 `Authorization: Bearer` 携带。
    pub token: String,
}

/// `/ping` 响应体。
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// 储水规模计算请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageRequest {
    #[serde(alias = "effectiveHarvest")]
    pub effective_harvest_l: f64,
    pub dwellers: u32,
}

/// 造价计算请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    #[serde(alias = "volume")]
    pub volume_m3: f64,
    /// 缺省时按容积推断分级。
    #[serde(default, alias = "complexity")]
    pub tier: Option<ComplexityTier>,
    #[serde(default, alias = "roofArea")]
    pub roof_area_m2: f64,
}

/// 财务分析请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRequest {
    #[serde(alias = "effectiveHarvest")]
    pub effective_harvest_l: f64,
    pub cost: CostBreakdown,
    #[serde(rename = "waterPricePerKL", alias = "waterPrice", default = "default_water_price")]
    pub water_price_per_kl: f64,
    #[serde(alias = "discountRate", default = "default_discount_rate")]
    pub discount_rate_pct: f64,
    #[serde(alias = "inflationRate", default = "default_inflation_rate")]
    pub inflation_rate_pct: f64,
}

fn default_water_price() -> f64 {
    SiteInputs::default().water_price_per_kl
}

fn default_discount_rate() -> f64 {
    SiteInputs::default().discount_rate_pct
}

fn default_inflation_rate() -> f64 {
    SiteInputs::default().inflation_rate_pct
}

/// 带地名的可行性评估请求体：地名之外的字段与 `SiteInputs` 相同。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedFeasibilityRequest {
    pub location: String,
    /// 查询降雨历史的年份，缺省为上一年。
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(flatten)]
    pub inputs: SiteInputs,
}

/// 降雨量来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainfallSource {
    /// 请求中已填写年降雨量。
    Request,
    /// 来自历史降雨数据。
    History,
    /// 历史数据不可用，使用默认值。
    Default,
}

/// 地理位置。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// 带地名的可行性评估结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedFeasibilityResponse {
    pub location: LocationDto,
    pub rainfall_source: RainfallSource,
    pub report: FeasibilityReport,
}

/// 24 小时降雨提醒。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainAlertDto {
    pub expected: bool,
    pub mm_next_24h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 预报摘要与降雨提醒。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDto {
    pub next_24h_precipitation_mm: f64,
    pub current_temperature_c: Option<f64>,
    pub current_wind_kmh: Option<f64>,
    pub current_precipitation_mm: f64,
    pub weather_code: Option<i64>,
    pub alert: RainAlertDto,
}

/// 实况天气（字段名与前端约定一致，使用下划线）。
#[derive(Debug, Serialize)]
pub struct CurrentConditionsDto {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
}

/// 年度降雨历史。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualRainfallDto {
    pub year: i32,
    pub annual_total_mm: f64,
    pub monthly_mm: Vec<f64>,
    pub days: usize,
}

/// 经纬度查询参数。
#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// 年度降雨查询参数。
#[derive(Debug, Deserialize)]
pub struct AnnualRainfallQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub year: Option<i32>,
}

/// 文本查询参数（地名、结构名）。
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// 计数器快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub feasibility_runs: u64,
    pub invalid_inputs: u64,
    pub geocode_success: u64,
    pub geocode_failure: u64,
    pub weather_success: u64,
    pub weather_failure: u64,
    pub login_success: u64,
    pub login_failure: u64,
}
