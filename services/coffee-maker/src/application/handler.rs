//! Business logic handler

use std::sync::Arc;

use coffee_errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::domain::entities::{Inventory, Order};
use crate::domain::services::InventoryService;

pub struct CoffeeMakerHandler {
    inventory_service: Arc<dyn InventoryService>,
}

impl CoffeeMakerHandler {
    pub fn new(inventory_service: Arc<dyn InventoryService>) -> Self {
        Self { inventory_service }
    }

    // ========== 库存 ==========

    /// 获取库存
    pub async fn get_inventory(&self) -> AppResult<Inventory> {
        self.inventory_service.get_inventory().await
    }

    /// 累加库存，返回更新后的库存
    ///
    /// 非幂等：重复提交会再次累加
    pub async fn update_inventory(&self, delta: Inventory) -> AppResult<Inventory> {
        info!(?delta, "Adding inventory");

        self.inventory_service.add_inventory(delta).await?;
        self.inventory_service.get_inventory().await
    }

    // ========== 订单 ==========

    /// 按 1 起始的序号获取订单
    ///
    /// 序号必须满足 `1 <= id <= 订单数`，0 和负数同样视为不存在
    pub async fn get_order(&self, id: i32) -> AppResult<Order> {
        let orders = self.inventory_service.get_orders().await?;

        let order = usize::try_from(id)
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| orders.get(index))
            .cloned();

        order.ok_or_else(|| {
            warn!(id, count = orders.len(), "Order not found");
            AppError::not_found(format!(
                "Could not find order: {}, number of orders {}",
                id,
                orders.len()
            ))
        })
    }
}
