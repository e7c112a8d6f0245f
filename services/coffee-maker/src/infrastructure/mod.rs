//! 基础设施层

mod in_memory;

pub use in_memory::InMemoryInventoryService;
