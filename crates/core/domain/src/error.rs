//! 计算引擎错误类型。

/// 引擎只有输入校验一类错误。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl EngineError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// 数量类输入（面积、降雨量、容积、水价）的上限。
///
/// 在此范围内，所有整数金额与容积都远小于 `u64::MAX`，中间浮点结果也保持有限。
pub const MAX_QUANTITY: f64 = 1.0e9;

/// 利率（%）上限。
pub const MAX_RATE_PCT: f64 = 1000.0;

/// 数量类输入：拒绝非有限值与超过 [`MAX_QUANTITY`] 的值，负数截断为 0。
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, EngineError> {
    let value = finite_non_negative(field, value)?;
    if value > MAX_QUANTITY {
        return Err(EngineError::invalid(field, "must not exceed 1e9"));
    }
    Ok(value)
}

/// 派生量（如有效集水量）：只要求有限，负数截断为 0。
pub fn finite_non_negative(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if !value.is_finite() {
        return Err(EngineError::invalid(field, "must be a finite number"));
    }
    Ok(value.max(0.0))
}

/// 百分比利率：必须有限，且在 (-100%, 1000%] 之间。
pub fn rate_pct(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if !value.is_finite() {
        return Err(EngineError::invalid(field, "must be a finite number"));
    }
    if value <= -100.0 {
        return Err(EngineError::invalid(field, "must be greater than -100%"));
    }
    if value > MAX_RATE_PCT {
        return Err(EngineError::invalid(field, "must not exceed 1000%"));
    }
    Ok(value)
}

/// 取整后需落入 `i64` 的计算结果上限。
const MAX_RESULT: f64 = 9.0e18;

/// 计算结果必须有限且可无损取整为 `i64`，否则视为输入超出可计算范围。
pub(crate) fn in_range(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value.abs() <= MAX_RESULT {
        Ok(value)
    } else {
        Err(EngineError::invalid(field, "result out of range"))
    }
}
