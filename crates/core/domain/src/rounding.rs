//! 取整规则：.5 一律向正无穷进位（与前端展示保持一致）。

pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// 保留两位小数。
pub(crate) fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

pub(crate) fn to_i64(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// 负数截断为 0 后取整。
pub(crate) fn to_u64(value: f64) -> u64 {
    round_half_up(value.max(0.0)) as u64
}
