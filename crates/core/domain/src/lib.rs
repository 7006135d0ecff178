//! 雨水收集可行性评估：领域模型与纯函数计算引擎。
//!
//! 计算链路：降雨 → 集水量 → 储水规模 → 造价 → 财务收益 → 敏感性分析 → 投资结论。
//! 所有函数无状态、同步、可重复调用（相同输入得到逐位相同的输出）。

pub mod cost;
pub mod error;
pub mod financial;
pub mod inputs;
pub mod investment;
pub mod rainfall;
pub mod report;
mod rounding;
pub mod sensitivity;
pub mod storage;
pub mod structures;

pub use cost::{
    CostBreakdown, CostMultipliers, LaborCosts, MaintenanceCosts, MaterialCosts,
    compute_cost_breakdown, estimated_pipe_length_m,
};
pub use error::{
    EngineError, MAX_QUANTITY, MAX_RATE_PCT, finite_non_negative, non_negative, rate_pct,
};
pub use financial::{
    FinancialAnalysis, PROJECT_LIFETIME_YEARS, compute_financial_analysis, net_present_value,
    project_cash_flows,
};
pub use inputs::{RoofType, SiteInputs};
pub use investment::{
    InvestmentAssessment, InvestmentRisk, QUICK_PAYBACK_YEARS, Recommendation, SensitivityFactor,
    assess_investment,
};
pub use rainfall::{RainfallAnalysis, SEASONAL_DISTRIBUTION, compute_rainfall_analysis};
pub use report::{FeasibilityReport, SiteFit, assess};
pub use sensitivity::{
    SensitivityBase, SensitivityPoint, SensitivityReport, compute_sensitivity_analysis,
};
pub use storage::{ComplexityTier, Dimensions, StorageRecommendation, compute_storage_optimization};
pub use structures::{CATALOG, StructureInfo, find_structure};
