//! 储水规模优化与结构推荐。

use crate::rounding::{round2, round_half_up, to_u64};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 人均日用水量（L）。
pub const LITRES_PER_PERSON_PER_DAY: f64 = 150.0;
pub const MIN_STORAGE_DAYS: f64 = 30.0;
pub const MAX_STORAGE_DAYS: f64 = 90.0;

/// 结构复杂度分级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityTier {
    Basic,
    Intermediate,
    Advanced,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 3] = [
        ComplexityTier::Basic,
        ComplexityTier::Intermediate,
        ComplexityTier::Advanced,
    ];

    /// 按推荐容积（m³）选择分级：≤5 基础，≤15 中级，其余高级。
    pub fn for_volume(volume_m3: u64) -> Self {
        if volume_m3 <= 5 {
            ComplexityTier::Basic
        } else if volume_m3 <= 15 {
            ComplexityTier::Intermediate
        } else {
            ComplexityTier::Advanced
        }
    }

    pub fn structure_type(self) -> &'static str {
        match self {
            ComplexityTier::Basic => "RCC tank with first-flush and filter",
            ComplexityTier::Intermediate => "RCC tank with recharge pit and silt trap",
            ComplexityTier::Advanced => "Recharge pit + storage tank with advanced filtration",
        }
    }

    /// 按分级模板估算尺寸：基础级为立方体（立方根），其余为方形底面 + 固定深度（平方根）。
    pub fn dimensions_for(self, volume_m3: f64) -> Dimensions {
        let volume = volume_m3.max(1.0);
        match self {
            ComplexityTier::Basic => {
                let side = ceil_tenth(volume.cbrt());
                Dimensions::new(side, side, side)
            }
            ComplexityTier::Intermediate => Dimensions::square(volume, 2.5),
            ComplexityTier::Advanced => Dimensions::square(volume, 3.0),
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComplexityTier::Basic => "Basic",
            ComplexityTier::Intermediate => "Intermediate",
            ComplexityTier::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

/// 结构外形尺寸（m），容积不小于推荐容积。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub depth_m: f64,
}

impl Dimensions {
    pub fn new(length_m: f64, width_m: f64, depth_m: f64) -> Self {
        Self {
            length_m,
            width_m,
            depth_m,
        }
    }

    fn square(volume_m3: f64, depth_m: f64) -> Self {
        let side = ceil_tenth((volume_m3 / depth_m).sqrt());
        Self::new(side, side, depth_m)
    }

    pub fn capacity_m3(&self) -> f64 {
        self.length_m * self.width_m * self.depth_m
    }

    /// 占地面积（m²）。
    pub fn footprint_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}m x {}m x {}m",
            self.length_m, self.width_m, self.depth_m
        )
    }
}

/// 储水推荐结果。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageRecommendation {
    /// 按需求推荐的容积（m³）。
    pub recommended_volume: u64,
    /// 按全年有效集水量直接折算的容积（m³，至少 1）。
    pub actual_volume: u64,
    pub structure_type: String,
    pub dimensions: Dimensions,
    pub complexity: ComplexityTier,
    pub storage_days: u32,
    pub utilization_rate: f64,
}

/// 根据有效集水量（L）与居住人数计算推荐储水容积。
pub fn compute_storage_optimization(
    effective_harvest_l: f64,
    dwellers: u32,
) -> StorageRecommendation {
    let effective = effective_harvest_l.max(0.0);
    let actual_volume = to_u64(effective / 1000.0).max(1);

    let daily_demand = f64::from(dwellers) * LITRES_PER_PERSON_PER_DAY / 365.0;
    // 无用水需求时取上限
    let storage_days = if daily_demand > 0.0 {
        (effective / (daily_demand * 365.0)).clamp(MIN_STORAGE_DAYS, MAX_STORAGE_DAYS)
    } else {
        MAX_STORAGE_DAYS
    };
    let recommended_volume = to_u64(daily_demand * storage_days / 1000.0);

    let complexity = ComplexityTier::for_volume(recommended_volume);
    StorageRecommendation {
        recommended_volume,
        actual_volume,
        structure_type: complexity.structure_type().to_string(),
        dimensions: complexity.dimensions_for(recommended_volume as f64),
        complexity,
        storage_days: round_half_up(storage_days) as u32,
        utilization_rate: round2(recommended_volume as f64 / actual_volume.max(1) as f64),
    }
}

fn ceil_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dwellers_falls_back_to_max_days() {
        let rec = compute_storage_optimization(62_900.0, 0);
        assert_eq!(rec.storage_days, 90);
        assert_eq!(rec.recommended_volume, 0);
        assert_eq!(rec.actual_volume, 63);
        assert_eq!(rec.complexity, ComplexityTier::Basic);
        assert_eq!(rec.utilization_rate, 0.0);
    }

    #[test]
    fn zero_harvest_and_zero_dwellers_is_defined() {
        let rec = compute_storage_optimization(0.0, 0);
        assert_eq!(rec.storage_days, 90);
        assert_eq!(rec.actual_volume, 1);
        assert!(rec.utilization_rate.is_finite());
    }

    #[test]
    fn four_dwellers_reference_case() {
        // 日需求 600/365 L，集水可覆盖超过 90 天，取 90 天
        let rec = compute_storage_optimization(62_900.0, 4);
        assert_eq!(rec.storage_days, 90);
        assert_eq!(rec.recommended_volume, 0);
        assert_eq!(rec.complexity, ComplexityTier::Basic);
    }

    #[test]
    fn storage_days_clamped_to_lower_bound() {
        // 年需求远大于集水量
        let rec = compute_storage_optimization(1_000.0, 500);
        assert_eq!(rec.storage_days, 30);
        // 500 * 150 / 365 * 30 / 1000 ≈ 6.16
        assert_eq!(rec.recommended_volume, 6);
        assert_eq!(rec.complexity, ComplexityTier::Intermediate);
        assert_eq!(rec.structure_type, "RCC tank with recharge pit and silt trap");
    }

    #[test]
    fn large_household_is_advanced() {
        let rec = compute_storage_optimization(20_000_000.0, 1_000);
        // 1000 * 150 / 365 * 90 / 1000 ≈ 36.99
        assert_eq!(rec.storage_days, 90);
        assert_eq!(rec.recommended_volume, 37);
        assert_eq!(rec.complexity, ComplexityTier::Advanced);
        assert_eq!(rec.actual_volume, 20_000);
        assert_eq!(rec.utilization_rate, 0.0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ComplexityTier::for_volume(0), ComplexityTier::Basic);
        assert_eq!(ComplexityTier::for_volume(5), ComplexityTier::Basic);
        assert_eq!(ComplexityTier::for_volume(6), ComplexityTier::Intermediate);
        assert_eq!(ComplexityTier::for_volume(15), ComplexityTier::Intermediate);
        assert_eq!(ComplexityTier::for_volume(16), ComplexityTier::Advanced);
    }

    #[test]
    fn dimensions_hold_the_volume() {
        for tier in ComplexityTier::ALL {
            for volume in [0.0, 1.0, 3.0, 5.0, 10.0, 15.0, 37.0, 120.0] {
                let dims = tier.dimensions_for(volume);
                assert!(dims.capacity_m3() + 1e-9 >= f64::max(volume, 1.0));
            }
        }
        let dims = ComplexityTier::Intermediate.dimensions_for(10.0);
        assert_eq!(dims, Dimensions::new(2.0, 2.0, 2.5));
        assert_eq!(dims.to_string(), "2m x 2m x 2.5m");
    }
}
