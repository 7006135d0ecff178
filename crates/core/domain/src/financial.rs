//! 财务分析：NPV、IRR、ROI、回收期与盈亏平衡年。

use crate::cost::CostBreakdown;
use crate::error::{EngineError, finite_non_negative, in_range, non_negative, rate_pct};
use crate::rounding::{round2, to_i64};
use serde::{Deserialize, Serialize};

/// 项目评估期（年）。
pub const PROJECT_LIFETIME_YEARS: usize = 20;

/// IRR 扫描：0%..99%，步长 1%。
const IRR_SCAN_STEPS: usize = 100;
const IRR_SCAN_STEP: f64 = 0.01;
const IRR_TOLERANCE: f64 = 0.001;

/// 财务分析结果。金额取整，比率保留两位小数（百分比）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysis {
    pub npv: i64,
    pub irr: f64,
    pub roi: f64,
    pub payback_period: u32,
    pub break_even_year: u32,
    pub total_savings: i64,
    pub net_benefit: i64,
}

/// 逐年现金流：第 0 年为初始投资（负值），之后为通胀调整后的节水收益减运维支出。
pub fn project_cash_flows(
    effective_harvest_l: f64,
    cost: &CostBreakdown,
    water_price_per_kl: f64,
    inflation_rate_pct: f64,
) -> Vec<f64> {
    let annual_water_value = (effective_harvest_l / 1000.0) * water_price_per_kl;
    let annual_maintenance = cost.maintenance.recurring() as f64;
    let inflation = inflation_rate_pct / 100.0;

    let mut flows = Vec::with_capacity(PROJECT_LIFETIME_YEARS + 1);
    flows.push(-(cost.total as f64));
    for year in 1..=PROJECT_LIFETIME_YEARS {
        let growth = (1.0 + inflation).powf((year - 1) as f64);
        flows.push(annual_water_value * growth - annual_maintenance * growth);
    }
    flows
}

/// 以给定折现率（小数）计算现金流净现值。
pub fn net_present_value(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .fold(0.0, |sum, (year, flow)| {
            sum + flow / (1.0 + rate).powf(year as f64)
        })
}

/// 计算 20 年期财务指标。
///
/// IRR 为 1% 步长扫描的近似值：取首个 |NPV| < 0.001 的利率，扫描范围内未命中则为 0。
/// 运维支出相加溢出，或结果超出 `i64` 可表示范围时报错。
pub fn compute_financial_analysis(
    effective_harvest_l: f64,
    cost: &CostBreakdown,
    water_price_per_kl: f64,
    discount_rate_pct: f64,
    inflation_rate_pct: f64,
) -> Result<FinancialAnalysis, EngineError> {
    let effective = finite_non_negative("effectiveHarvestL", effective_harvest_l)?;
    let price = non_negative("waterPricePerKL", water_price_per_kl)?;
    let discount_rate = rate_pct("discountRatePct", discount_rate_pct)? / 100.0;
    let inflation_pct = rate_pct("inflationRatePct", inflation_rate_pct)?;
    if cost.maintenance.checked_recurring().is_none() {
        return Err(EngineError::invalid("cost.maintenance", "annual maintenance out of range"));
    }

    let flows = project_cash_flows(effective, cost, price, inflation_pct);
    let initial_cost = cost.total as f64;

    let npv = in_range("npv", net_present_value(&flows, discount_rate))?;

    let irr = (0..IRR_SCAN_STEPS)
        .map(|step| step as f64 * IRR_SCAN_STEP)
        .find(|rate| net_present_value(&flows, *rate).abs() < IRR_TOLERANCE)
        .map(|rate| rate * 100.0)
        .unwrap_or(0.0);

    let total_benefits = in_range(
        "totalSavings",
        flows[1..].iter().fold(0.0, |sum, flow| sum + flow),
    )?;
    let net_benefit = in_range("netBenefit", total_benefits - initial_cost)?;
    let roi = if initial_cost > 0.0 {
        in_range("roi", (net_benefit / initial_cost) * 100.0)?
    } else {
        0.0
    };

    let mut payback_period = PROJECT_LIFETIME_YEARS as u32;
    let mut cumulative = 0.0;
    for (year, flow) in flows.iter().enumerate().skip(1) {
        cumulative += flow;
        if cumulative >= initial_cost {
            payback_period = year as u32;
            break;
        }
    }

    let mut break_even_year = PROJECT_LIFETIME_YEARS as u32;
    let mut discounted = flows[0];
    for (year, flow) in flows.iter().enumerate().skip(1) {
        discounted += flow / (1.0 + discount_rate).powf(year as f64);
        if discounted >= 0.0 {
            break_even_year = year as u32;
            break;
        }
    }

    Ok(FinancialAnalysis {
        npv: to_i64(npv),
        irr: round2(irr),
        roi: round2(roi),
        payback_period,
        break_even_year,
        total_savings: to_i64(total_benefits),
        net_benefit: to_i64(net_benefit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{LaborCosts, MaintenanceCosts, MaterialCosts, compute_cost_breakdown};
    use crate::storage::ComplexityTier;

    fn basic_cost() -> CostBreakdown {
        compute_cost_breakdown(4.0, ComplexityTier::Basic, 100.0).expect("valid")
    }

    #[test]
    fn cash_flows_cover_horizon() {
        let cost = basic_cost();
        let flows = project_cash_flows(62_900.0, &cost, 30.0, 4.0);
        assert_eq!(flows.len(), PROJECT_LIFETIME_YEARS + 1);
        assert_eq!(flows[0], -(cost.total as f64));
        // 第 1 年无通胀放大
        let expected_year1 = 62.9 * 30.0 - cost.maintenance.recurring() as f64;
        assert!((flows[1] - expected_year1).abs() < 1e-9);
        assert!(flows[2] > flows[1]);
    }

    #[test]
    fn zero_water_price_never_pays_back() {
        let cost = basic_cost();
        let analysis = compute_financial_analysis(62_900.0, &cost, 0.0, 8.0, 4.0).expect("valid");
        assert!(analysis.npv <= -(cost.total as i64));
        assert_eq!(analysis.payback_period, 20);
        assert_eq!(analysis.break_even_year, 20);
        assert!(analysis.roi < -100.0);
        assert!(analysis.net_benefit < 0);
    }

    #[test]
    fn npv_matches_year_by_year_formula() {
        let cost = basic_cost();
        let analysis = compute_financial_analysis(62_900.0, &cost, 30.0, 8.0, 4.0).expect("valid");

        let value = 62_900.0 / 1000.0 * 30.0;
        let maintenance = cost.maintenance.recurring() as f64;
        let mut npv = -(cost.total as f64);
        let inflation = 1.0 + 4.0 / 100.0;
        let discount = 1.0 + 8.0 / 100.0;
        for year in 1..=20 {
            let growth = f64::powf(inflation, (year - 1) as f64);
            npv += (value * growth - maintenance * growth) / f64::powf(discount, year as f64);
        }
        assert_eq!(analysis.npv, (npv + 0.5).floor() as i64);
    }

    #[test]
    fn generous_price_pays_back_early() {
        let cost = basic_cost();
        let analysis =
            compute_financial_analysis(62_900.0, &cost, 500.0, 8.0, 4.0).expect("valid");
        // 年收益约 31450，第二年累计收益超过投资
        assert_eq!(analysis.payback_period, 2);
        assert!(analysis.break_even_year >= analysis.payback_period);
        assert!(analysis.npv > 0);
        assert!(analysis.roi > 0.0);
        let expected_net = analysis.total_savings - cost.total as i64;
        assert!((analysis.net_benefit - expected_net).abs() <= 1);
    }

    #[test]
    fn irr_scan_falls_back_to_zero() {
        // 扫描容差远小于常见现金流规模，一般取不到解
        let cost = basic_cost();
        let analysis = compute_financial_analysis(62_900.0, &cost, 30.0, 8.0, 4.0).expect("valid");
        assert_eq!(analysis.irr, 0.0);
    }

    #[test]
    fn irr_scan_hits_exact_rate() {
        // 通胀率与 10% 折现率抵消：每年现值恰为 100，20 年合计等于投资
        let cost = CostBreakdown {
            materials: MaterialCosts {
                tank: 2_000,
                pipes: 0,
                filters: 0,
                pumps: 0,
                accessories: 0,
            },
            labor: LaborCosts {
                excavation: 0,
                installation: 0,
                plumbing: 0,
                electrical: 0,
            },
            maintenance: MaintenanceCosts {
                annual: 0,
                periodic: 0,
                replacement: 0,
            },
            total: 2_000,
        };
        let analysis = compute_financial_analysis(1_000.0, &cost, 110.0, 8.0, 10.0).expect("valid");
        assert_eq!(analysis.irr, 10.0);
        assert_eq!(analysis.payback_period, 11);
    }

    #[test]
    fn invalid_rates_rejected() {
        let cost = basic_cost();
        assert!(compute_financial_analysis(1.0, &cost, 30.0, -100.0, 4.0).is_err());
        assert!(compute_financial_analysis(1.0, &cost, 30.0, 8.0, f64::INFINITY).is_err());
        assert!(compute_financial_analysis(f64::NAN, &cost, 30.0, 8.0, 4.0).is_err());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let cost = basic_cost();
        let first = compute_financial_analysis(62_900.0, &cost, 30.0, 8.0, 4.0).expect("valid");
        let second = compute_financial_analysis(62_900.0, &cost, 30.0, 8.0, 4.0).expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn overflowing_maintenance_rejected() {
        let mut cost = basic_cost();
        cost.maintenance.annual = u64::MAX - 10;
        cost.maintenance.periodic = 200;
        let result = compute_financial_analysis(62_900.0, &cost, 30.0, 8.0, 4.0);
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput {
                field: "cost.maintenance",
                ..
            })
        ));
    }

    #[test]
    fn maintenance_near_limit_is_out_of_range() {
        // 相加不溢出，但 20 年现金流超出 i64
        let mut cost = basic_cost();
        cost.maintenance.annual = u64::MAX / 2;
        cost.maintenance.periodic = 0;
        let result = compute_financial_analysis(62_900.0, &cost, 30.0, 8.0, 4.0);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn oversized_price_rejected() {
        let cost = basic_cost();
        assert!(compute_financial_analysis(62_900.0, &cost, 1.0e12, 8.0, 4.0).is_err());
        assert!(compute_financial_analysis(1.0e30, &cost, 30.0, 8.0, 4.0).is_err());
        assert!(compute_financial_analysis(62_900.0, &cost, 30.0, 5_000.0, 4.0).is_err());
    }
}
