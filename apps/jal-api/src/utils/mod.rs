//! 响应构造、DTO 转换与输入校验辅助函数。

pub mod response;
pub mod validation;

pub use response::*;
pub use validation::*;
