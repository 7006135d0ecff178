//! 场地输入参数。

use crate::error::{EngineError, non_negative, rate_pct};
use serde::{Deserialize, Serialize};

/// 未填写年降雨量时使用的默认值（mm）。
pub const DEFAULT_ANNUAL_RAINFALL_MM: f64 = 800.0;
/// 默认水价（每 1000 L）。
pub const DEFAULT_WATER_PRICE_PER_KL: f64 = 30.0;
pub const DEFAULT_DISCOUNT_RATE_PCT: f64 = 8.0;
pub const DEFAULT_INFLATION_RATE_PCT: f64 = 4.0;

/// 屋面材质，决定径流系数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofType {
    #[default]
    Concrete,
    Metal,
    Tile,
    Asphalt,
}

impl RoofType {
    pub const ALL: [RoofType; 4] = [
        RoofType::Concrete,
        RoofType::Metal,
        RoofType::Tile,
        RoofType::Asphalt,
    ];

    /// 可收集径流占降雨的比例。
    pub fn runoff_coefficient(self) -> f64 {
        match self {
            RoofType::Concrete => 0.85,
            RoofType::Metal => 0.90,
            RoofType::Tile => 0.80,
            RoofType::Asphalt => 0.75,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoofType::Concrete => "concrete",
            RoofType::Metal => "metal",
            RoofType::Tile => "tile",
            RoofType::Asphalt => "asphalt",
        }
    }
}

/// 一次评估的全部输入，按值传入引擎，计算过程中不被修改。
///
/// 反序列化时缺省字段取默认值；`annualRainfallMm` 缺省表示“未填写”，
/// 计算时按 [`DEFAULT_ANNUAL_RAINFALL_MM`] 处理。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteInputs {
    #[serde(alias = "roofArea")]
    pub roof_area_m2: f64,
    pub dwellers: u32,
    #[serde(alias = "openSpace")]
    pub open_space_m2: f64,
    #[serde(alias = "annualRainfall")]
    pub annual_rainfall_mm: Option<f64>,
    pub roof_type: RoofType,
    #[serde(rename = "waterPricePerKL", alias = "waterPrice")]
    pub water_price_per_kl: f64,
    #[serde(alias = "discountRate")]
    pub discount_rate_pct: f64,
    #[serde(alias = "inflationRate")]
    pub inflation_rate_pct: f64,
}

impl Default for SiteInputs {
    fn default() -> Self {
        Self {
            roof_area_m2: 0.0,
            dwellers: 0,
            open_space_m2: 0.0,
            annual_rainfall_mm: None,
            roof_type: RoofType::default(),
            water_price_per_kl: DEFAULT_WATER_PRICE_PER_KL,
            discount_rate_pct: DEFAULT_DISCOUNT_RATE_PCT,
            inflation_rate_pct: DEFAULT_INFLATION_RATE_PCT,
        }
    }
}

impl SiteInputs {
    /// 实际参与计算的年降雨量。
    pub fn annual_rainfall_or_default(&self) -> f64 {
        self.annual_rainfall_mm.unwrap_or(DEFAULT_ANNUAL_RAINFALL_MM)
    }

    /// 校验并规整输入：非有限值与不合法利率报错，负数量截断为 0。
    pub fn validated(&self) -> Result<Self, EngineError> {
        let annual_rainfall_mm = self
            .annual_rainfall_mm
            .map(|value| non_negative("annualRainfallMm", value))
            .transpose()?;
        Ok(Self {
            roof_area_m2: non_negative("roofAreaM2", self.roof_area_m2)?,
            dwellers: self.dwellers,
            open_space_m2: non_negative("openSpaceM2", self.open_space_m2)?,
            annual_rainfall_mm,
            roof_type: self.roof_type,
            water_price_per_kl: non_negative("waterPricePerKL", self.water_price_per_kl)?,
            discount_rate_pct: rate_pct("discountRatePct", self.discount_rate_pct)?,
            inflation_rate_pct: rate_pct("inflationRatePct", self.inflation_rate_pct)?,
        })
    }
}
