//! 完整可行性报告：按顺序串联各计算步骤。

use crate::cost::{CostBreakdown, compute_cost_breakdown};
use crate::error::EngineError;
use crate::financial::{FinancialAnalysis, compute_financial_analysis};
use crate::inputs::SiteInputs;
use crate::investment::{InvestmentAssessment, assess_investment};
use crate::rainfall::{RainfallAnalysis, compute_rainfall_analysis};
use crate::rounding::round2;
use crate::sensitivity::{SensitivityBase, SensitivityReport, compute_sensitivity_analysis};
use crate::storage::{StorageRecommendation, compute_storage_optimization};
use serde::{Deserialize, Serialize};

/// 推荐结构占地与可用空地的比对。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFit {
    pub footprint_m2: f64,
    pub open_space_m2: f64,
    pub fits: bool,
}

/// 一次评估的全部产出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    /// 规整后的实际输入。
    pub inputs: SiteInputs,
    pub rainfall: RainfallAnalysis,
    pub storage: StorageRecommendation,
    pub cost: CostBreakdown,
    pub financial: FinancialAnalysis,
    pub sensitivity: SensitivityReport,
    pub investment: InvestmentAssessment,
    pub site_fit: SiteFit,
}

/// 校验输入并生成完整报告。
pub fn assess(inputs: &SiteInputs) -> Result<FeasibilityReport, EngineError> {
    let inputs = inputs.validated()?;

    let rainfall = compute_rainfall_analysis(&inputs);
    let effective_harvest = rainfall.effective_harvest as f64;

    let storage = compute_storage_optimization(effective_harvest, inputs.dwellers);
    let cost = compute_cost_breakdown(
        storage.recommended_volume as f64,
        storage.complexity,
        inputs.roof_area_m2,
    )?;
    let financial = compute_financial_analysis(
        effective_harvest,
        &cost,
        inputs.water_price_per_kl,
        inputs.discount_rate_pct,
        inputs.inflation_rate_pct,
    )?;
    let sensitivity = compute_sensitivity_analysis(
        &SensitivityBase {
            effective_harvest,
            total_cost: cost.total as f64,
            water_price_per_kl: inputs.water_price_per_kl,
            base_npv: financial.npv,
        }
        .validated()?,
    );
    let investment = assess_investment(&financial, &sensitivity, inputs.discount_rate_pct);

    let footprint_m2 = round2(storage.dimensions.footprint_m2());
    let site_fit = SiteFit {
        footprint_m2,
        open_space_m2: inputs.open_space_m2,
        fits: footprint_m2 <= inputs.open_space_m2,
    };

    Ok(FeasibilityReport {
        inputs,
        rainfall,
        storage,
        cost,
        financial,
        sensitivity,
        investment,
        site_fit,
    })
}
