//! 中间件与请求级辅助函数。

pub mod auth;

pub use auth::*;
