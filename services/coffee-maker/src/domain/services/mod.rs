//! 领域服务接口

mod inventory_service;

pub use inventory_service::InventoryService;

#[cfg(test)]
pub use inventory_service::MockInventoryService;
