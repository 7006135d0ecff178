//! 敏感性分析。
//!
//! 采用简化 NPV：`年收益 × 15 − 投资`，不折现也不计运维，与完整财务模型刻意不同；
//! 因此 0% 变动时的 NPV 通常也不等于基准 NPV。

use crate::error::{EngineError, finite_non_negative, in_range, non_negative};
use crate::rounding::to_i64;
use serde::{Deserialize, Serialize};

/// 变动幅度（%）。
pub const VARIATIONS_PCT: [i32; 5] = [-20, -10, 0, 10, 20];

/// 简化模型的收益年数。
pub const SIMPLIFIED_BENEFIT_YEARS: f64 = 15.0;

/// 敏感性分析的基准值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityBase {
    /// 有效年集水量（L）。
    pub effective_harvest: f64,
    pub total_cost: f64,
    #[serde(rename = "waterPricePerKL", alias = "waterPrice")]
    pub water_price_per_kl: f64,
    /// 完整财务模型得出的 NPV（已取整）。
    pub base_npv: i64,
}

impl SensitivityBase {
    /// 校验基准值：负数截断为 0，最大扰动下的简化 NPV 也必须可表示。
    pub fn validated(&self) -> Result<Self, EngineError> {
        let base = Self {
            effective_harvest: finite_non_negative("effectiveHarvest", self.effective_harvest)?,
            total_cost: finite_non_negative("totalCost", self.total_cost)?,
            water_price_per_kl: non_negative("waterPricePerKL", self.water_price_per_kl)?,
            base_npv: self.base_npv,
        };
        let max_factor = 1.0 + f64::from(VARIATIONS_PCT[VARIATIONS_PCT.len() - 1]) / 100.0;
        let max_benefit = base.effective_harvest / 1000.0
            * base.water_price_per_kl
            * SIMPLIFIED_BENEFIT_YEARS
            * max_factor;
        in_range("effectiveHarvest", max_benefit)?;
        in_range("totalCost", base.total_cost * max_factor)?;
        Ok(base)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub variation: i32,
    pub npv: i64,
    /// 相对基准 NPV 的变化百分比。
    pub change: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityReport {
    pub rainfall: Vec<SensitivityPoint>,
    pub cost: Vec<SensitivityPoint>,
    pub water_price: Vec<SensitivityPoint>,
}

/// 分别扰动集水量、投资与水价，计算简化 NPV 及其相对基准的变化。
pub fn compute_sensitivity_analysis(base: &SensitivityBase) -> SensitivityReport {
    let harvest_kl = base.effective_harvest / 1000.0;

    SensitivityReport {
        rainfall: series(base.base_npv, |factor| {
            let adjusted_harvest = base.effective_harvest * factor;
            (adjusted_harvest / 1000.0) * base.water_price_per_kl * SIMPLIFIED_BENEFIT_YEARS
                - base.total_cost
        }),
        cost: series(base.base_npv, |factor| {
            harvest_kl * base.water_price_per_kl * SIMPLIFIED_BENEFIT_YEARS
                - base.total_cost * factor
        }),
        water_price: series(base.base_npv, |factor| {
            let adjusted_price = base.water_price_per_kl * factor;
            harvest_kl * adjusted_price * SIMPLIFIED_BENEFIT_YEARS - base.total_cost
        }),
    }
}

fn series(base_npv: i64, adjusted_npv: impl Fn(f64) -> f64) -> Vec<SensitivityPoint> {
    VARIATIONS_PCT
        .iter()
        .map(|variation| {
            let factor = 1.0 + f64::from(*variation) / 100.0;
            let npv = adjusted_npv(factor);
            SensitivityPoint {
                variation: *variation,
                npv: to_i64(npv),
                change: relative_change(npv, base_npv),
            }
        })
        .collect()
}

fn relative_change(npv: f64, base_npv: i64) -> i64 {
    let base = base_npv as f64;
    to_i64((npv - base) / base.abs().max(1.0) * 100.0)
}
