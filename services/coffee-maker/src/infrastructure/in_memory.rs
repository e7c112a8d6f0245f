//! 内存版库存服务

use async_trait::async_trait;
use coffee_errors::AppResult;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Inventory, Order};
use crate::domain::services::InventoryService;

#[derive(Debug)]
struct State {
    inventory: Inventory,
    orders: Vec<Order>,
}

/// 基于 `RwLock` 的内存库存服务
#[derive(Debug)]
pub struct InMemoryInventoryService {
    state: RwLock<State>,
}

impl InMemoryInventoryService {
    pub fn new(inventory: Inventory) -> Self {
        Self::with_orders(inventory, Vec::new())
    }

    pub fn with_orders(inventory: Inventory, orders: Vec<Order>) -> Self {
        Self {
            state: RwLock::new(State { inventory, orders }),
        }
    }
}

impl Default for InMemoryInventoryService {
    fn default() -> Self {
        Self::new(Inventory::default())
    }
}

#[async_trait]
impl InventoryService for InMemoryInventoryService {
    async fn get_inventory(&self) -> AppResult<Inventory> {
        Ok(self.state.read().await.inventory)
    }

    async fn add_inventory(&self, delta: Inventory) -> AppResult<()> {
        let mut state = self.state.write().await;
        state.inventory.add_amounts(&delta)?;
        debug!(inventory = ?state.inventory, "Inventory updated");
        Ok(())
    }

    async fn get_orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.state.read().await.orders.clone())
    }

    async fn add_order(&self, order: Order) -> AppResult<()> {
        let mut state = self.state.write().await;
        state.orders.push(order);
        debug!(count = state.orders.len(), "Order appended");
        Ok(())
    }
}
