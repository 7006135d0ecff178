//! 造价明细估算（材料、人工、运维）。

use crate::error::{EngineError, non_negative};
use crate::rounding::to_u64;
use crate::storage::ComplexityTier;
use serde::{Deserialize, Serialize};

// 材料单价
const TANK_PER_M3: f64 = 2500.0;
const PIPES_PER_M: f64 = 150.0;
const FILTERS_FLAT: f64 = 8000.0;
const PUMPS_FLAT: f64 = 12000.0;
const ACCESSORIES_FLAT: f64 = 5000.0;

// 人工单价
const EXCAVATION_PER_M3: f64 = 300.0;
const INSTALLATION_PER_M3: f64 = 800.0;
const PLUMBING_PER_M: f64 = 200.0;
const ELECTRICAL_FLAT: f64 = 3000.0;

// 运维
const ANNUAL_MAINTENANCE_SHARE: f64 = 0.02;
const PERIODIC_PER_M3: f64 = 50.0;
const REPLACEMENT_RESERVE_SHARE: f64 = 0.1;

const MIN_PIPE_LENGTH_M: f64 = 20.0;

/// 复杂度对材料与人工的放大系数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostMultipliers {
    pub materials: f64,
    pub labor: f64,
}

impl CostMultipliers {
    pub fn for_tier(tier: ComplexityTier) -> Self {
        match tier {
            ComplexityTier::Basic => Self {
                materials: 1.0,
                labor: 1.0,
            },
            ComplexityTier::Intermediate => Self {
                materials: 1.2,
                labor: 1.3,
            },
            ComplexityTier::Advanced => Self {
                materials: 1.5,
                labor: 1.8,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCosts {
    pub tank: u64,
    pub pipes: u64,
    pub filters: u64,
    pub pumps: u64,
    pub accessories: u64,
}

impl MaterialCosts {
    pub fn total(&self) -> u64 {
        saturating_sum(&[self.tank, self.pipes, self.filters, self.pumps, self.accessories])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborCosts {
    pub excavation: u64,
    pub installation: u64,
    pub plumbing: u64,
    pub electrical: u64,
}

impl LaborCosts {
    pub fn total(&self) -> u64 {
        saturating_sum(&[self.excavation, self.installation, self.plumbing, self.electrical])
    }
}

/// 运维费用，单独列示，不计入初始投资。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceCosts {
    pub annual: u64,
    pub periodic: u64,
    pub replacement: u64,
}

impl MaintenanceCosts {
    pub fn total(&self) -> u64 {
        saturating_sum(&[self.annual, self.periodic, self.replacement])
    }

    /// 每年计入现金流的运维支出（年度 + 周期性）。
    pub fn recurring(&self) -> u64 {
        self.annual.saturating_add(self.periodic)
    }

    /// 同 [`recurring`](Self::recurring)，溢出时为 `None`。
    pub fn checked_recurring(&self) -> Option<u64> {
        self.annual.checked_add(self.periodic)
    }
}

/// 造价明细。`total` 为材料与人工之和。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub materials: MaterialCosts,
    pub labor: LaborCosts,
    pub maintenance: MaintenanceCosts,
    pub total: u64,
}

/// 按屋面面积估算落水管长度（m），最少 20 m。
pub fn estimated_pipe_length_m(roof_area_m2: f64) -> f64 {
    f64::max(MIN_PIPE_LENGTH_M, roof_area_m2.max(0.0).sqrt() * 2.0 + 10.0)
}

fn saturating_sum(values: &[u64]) -> u64 {
    values.iter().fold(0, |sum, value| sum.saturating_add(*value))
}

fn checked_sum(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(0u64, |sum, value| sum.checked_add(*value))
}

/// 计算推荐容积在给定复杂度下的造价明细。
///
/// 容积与屋面面积超过 [`MAX_QUANTITY`](crate::error::MAX_QUANTITY) 或非有限时报错。
pub fn compute_cost_breakdown(
    volume_m3: f64,
    tier: ComplexityTier,
    roof_area_m2: f64,
) -> Result<CostBreakdown, EngineError> {
    let volume = non_negative("volumeM3", volume_m3)?;
    let roof_area = non_negative("roofAreaM2", roof_area_m2)?;
    let multipliers = CostMultipliers::for_tier(tier);
    let pipe_length = estimated_pipe_length_m(roof_area);

    let materials = MaterialCosts {
        tank: to_u64(volume * TANK_PER_M3 * multipliers.materials),
        pipes: to_u64(pipe_length * PIPES_PER_M * multipliers.materials),
        filters: to_u64(FILTERS_FLAT * multipliers.materials),
        pumps: to_u64(PUMPS_FLAT * multipliers.materials),
        accessories: to_u64(ACCESSORIES_FLAT * multipliers.materials),
    };

    let labor = LaborCosts {
        excavation: to_u64(volume * EXCAVATION_PER_M3 * multipliers.labor),
        installation: to_u64(volume * INSTALLATION_PER_M3 * multipliers.labor),
        plumbing: to_u64(pipe_length * PLUMBING_PER_M * multipliers.labor),
        electrical: to_u64(ELECTRICAL_FLAT * multipliers.labor),
    };

    let maintenance = MaintenanceCosts {
        annual: to_u64(
            materials.tank.saturating_add(materials.pumps) as f64 * ANNUAL_MAINTENANCE_SHARE,
        ),
        periodic: to_u64(volume * PERIODIC_PER_M3),
        replacement: to_u64(
            materials.filters.saturating_add(materials.accessories) as f64
                * REPLACEMENT_RESERVE_SHARE,
        ),
    };

    let total = checked_sum(&[materials.total(), labor.total()])
        .ok_or_else(|| EngineError::invalid("volumeM3", "cost out of range"))?;
    Ok(CostBreakdown {
        materials,
        labor,
        maintenance,
        total,
    })
}
