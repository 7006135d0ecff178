//! Handlers 模块

pub mod auth;
pub mod feasibility;
pub mod metrics;
pub mod structures;
pub mod weather;

pub use auth::*;
pub use feasibility::*;
pub use metrics::*;
pub use structures::*;
pub use weather::*;
