//! 投资结论：由财务指标与敏感性结果归纳出可读的判定。

use crate::financial::FinancialAnalysis;
use crate::sensitivity::{SensitivityPoint, SensitivityReport};
use serde::{Deserialize, Serialize};

/// 回收期不超过该年数视为快速回本。
pub const QUICK_PAYBACK_YEARS: u32 = 10;

/// 对 NPV 影响最大的扰动因素。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitivityFactor {
    Rainfall,
    #[serde(rename = "Installation Cost")]
    InstallationCost,
    #[serde(rename = "Water Price")]
    WaterPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentRisk {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Proceed with investment")]
    Proceed,
    #[serde(rename = "Consider alternatives")]
    ConsiderAlternatives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentAssessment {
    /// NPV > 0。
    pub profitable: bool,
    pub irr_exceeds_discount_rate: bool,
    /// 回收期 ≤ [`QUICK_PAYBACK_YEARS`]。
    pub quick_payback: bool,
    pub most_sensitive_factor: SensitivityFactor,
    pub risk: InvestmentRisk,
    pub recommendation: Recommendation,
}

/// 归纳投资结论。
///
/// 敏感度按各序列首个点（-20%）的 |change| 比较，严格大于才胜出，平局依次让位给
/// 投资与水价；风险仅在基准 NPV 与降雨 -20% 时的 NPV 均为正时为低。
pub fn assess_investment(
    financial: &FinancialAnalysis,
    sensitivity: &SensitivityReport,
    discount_rate_pct: f64,
) -> InvestmentAssessment {
    let profitable = financial.npv > 0;

    let rainfall = sensitivity.rainfall.first();
    let rainfall_change = swing(rainfall);
    let cost_change = swing(sensitivity.cost.first());
    let price_change = swing(sensitivity.water_price.first());
    let most_sensitive_factor = if rainfall_change > cost_change && rainfall_change > price_change {
        SensitivityFactor::Rainfall
    } else if cost_change > price_change {
        SensitivityFactor::InstallationCost
    } else {
        SensitivityFactor::WaterPrice
    };

    let rainfall_stress_npv = rainfall.map_or(0, |point| point.npv);
    let risk = if profitable && rainfall_stress_npv > 0 {
        InvestmentRisk::Low
    } else {
        InvestmentRisk::High
    };

    InvestmentAssessment {
        profitable,
        irr_exceeds_discount_rate: financial.irr > discount_rate_pct,
        quick_payback: financial.payback_period <= QUICK_PAYBACK_YEARS,
        most_sensitive_factor,
        risk,
        recommendation: if profitable {
            Recommendation::Proceed
        } else {
            Recommendation::ConsiderAlternatives
        },
    }
}

fn swing(point: Option<&SensitivityPoint>) -> u64 {
    point.map_or(0, |point| point.change.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn financial(npv: i64, irr: f64, payback_period: u32) -> FinancialAnalysis {
        FinancialAnalysis {
            npv,
            irr,
            roi: 0.0,
            payback_period,
            break_even_year: payback_period,
            total_savings: 0,
            net_benefit: 0,
        }
    }

    fn point(npv: i64, change: i64) -> SensitivityPoint {
        SensitivityPoint {
            variation: -20,
            npv,
            change,
        }
    }

    fn report(rainfall: SensitivityPoint, cost: i64, water_price: i64) -> SensitivityReport {
        SensitivityReport {
            rainfall: vec![rainfall],
            cost: vec![point(0, cost)],
            water_price: vec![point(0, water_price)],
        }
    }

    #[test]
    fn profitable_project_with_resilient_rainfall() {
        let verdict = assess_investment(
            &financial(12_000, 12.0, 6),
            &report(point(5_000, -40), 10, -20),
            8.0,
        );
        assert!(verdict.profitable);
        assert!(verdict.irr_exceeds_discount_rate);
        assert!(verdict.quick_payback);
        assert_eq!(verdict.most_sensitive_factor, SensitivityFactor::Rainfall);
        assert_eq!(verdict.risk, InvestmentRisk::Low);
        assert_eq!(verdict.recommendation, Recommendation::Proceed);
    }

    #[test]
    fn profitable_but_rainfall_stress_is_high_risk() {
        let verdict = assess_investment(
            &financial(12_000, 0.0, 11),
            &report(point(-1, -40), 50, -20),
            8.0,
        );
        assert!(verdict.profitable);
        assert!(!verdict.irr_exceeds_discount_rate);
        assert!(!verdict.quick_payback);
        assert_eq!(verdict.most_sensitive_factor, SensitivityFactor::InstallationCost);
        assert_eq!(verdict.risk, InvestmentRisk::High);
        assert_eq!(verdict.recommendation, Recommendation::Proceed);
    }

    #[test]
    fn unprofitable_project_considers_alternatives() {
        let verdict = assess_investment(
            &financial(0, 8.0, 20),
            &report(point(100, 5), 5, -30),
            8.0,
        );
        assert!(!verdict.profitable);
        // IRR 等于折现率不算超过
        assert!(!verdict.irr_exceeds_discount_rate);
        assert_eq!(verdict.most_sensitive_factor, SensitivityFactor::WaterPrice);
        assert_eq!(verdict.risk, InvestmentRisk::High);
        assert_eq!(verdict.recommendation, Recommendation::ConsiderAlternatives);
    }

    #[test]
    fn ties_fall_through_to_water_price() {
        let verdict = assess_investment(
            &financial(1, 0.0, 10),
            &report(point(1, 30), -30, 30),
            8.0,
        );
        assert!(verdict.quick_payback);
        assert_eq!(verdict.most_sensitive_factor, SensitivityFactor::WaterPrice);
    }

    #[test]
    fn empty_series_is_high_risk() {
        let verdict = assess_investment(
            &financial(500, 0.0, 3),
            &SensitivityReport {
                rainfall: Vec::new(),
                cost: Vec::new(),
                water_price: Vec::new(),
            },
            8.0,
        );
        assert_eq!(verdict.risk, InvestmentRisk::High);
        assert_eq!(verdict.most_sensitive_factor, SensitivityFactor::WaterPrice);
    }

    #[test]
    fn labels_serialize_for_display() {
        let verdict = assess_investment(
            &financial(12_000, 12.0, 6),
            &report(point(5_000, -10), -40, -20),
            8.0,
        );
        let value = serde_json::to_value(verdict).expect("serialize");
        assert_eq!(value["mostSensitiveFactor"], "Installation Cost");
        assert_eq!(value["risk"], "Low");
        assert_eq!(value["recommendation"], "Proceed with investment");
        assert_eq!(value["irrExceedsDiscountRate"], true);
    }
}
