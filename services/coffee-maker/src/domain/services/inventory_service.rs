//! 库存服务接口

use async_trait::async_trait;
use coffee_errors::AppResult;

use crate::domain::entities::{Inventory, Order};

/// 库存服务接口
///
/// 持有唯一的库存实例和只追加的订单序列，实现方负责串行化对库存的修改
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// 获取当前库存
    async fn get_inventory(&self) -> AppResult<Inventory>;

    /// 将 `delta` 逐项累加到库存
    async fn add_inventory(&self, delta: Inventory) -> AppResult<()>;

    /// 按下单顺序返回全部订单
    async fn get_orders(&self) -> AppResult<Vec<Order>>;

    /// 追加一条订单
    async fn add_order(&self, order: Order) -> AppResult<()>;
}
