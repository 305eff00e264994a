//! electra-bootstrap - 统一服务启动骨架
//!
//! 所有 HTTP 服务复用的启动逻辑

mod health;
mod infrastructure;
mod metrics;
mod retry;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use metrics::*;
pub use retry::*;
pub use runtime::*;
pub use starter::*;
