//! 领域实体

mod inventory;
mod order;

pub use inventory::Inventory;
pub use order::Order;
