//! coffee-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志初始化、健康检查、metrics 与 graceful shutdown

mod health;
mod http_metrics;
mod runtime;
mod starter;

pub use health::*;
pub use http_metrics::*;
pub use runtime::*;
pub use starter::*;
