//! 领域层
//!
//! 包含库存、订单实体以及库存服务接口

pub mod entities;
pub mod services;

pub use entities::*;
pub use services::*;
