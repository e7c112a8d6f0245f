//! 服务自有配置
//!
//! 与 `AppConfig` 共用同一套分层规则，例如 `COFFEE_INVENTORY__COFFEE=30`

use coffee_config::ConfigError;
use serde::Deserialize;

use crate::domain::entities::{Inventory, Order};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoffeeMakerConfig {
    #[serde(default)]
    pub inventory: InventorySettings,
    /// 启动时预置的订单
    #[serde(default)]
    pub orders: Vec<OrderSettings>,
}

/// 初始库存
#[derive(Debug, Clone, Deserialize)]
pub struct InventorySettings {
    #[serde(default = "default_amount")]
    pub coffee: u32,
    #[serde(default = "default_amount")]
    pub milk: u32,
    #[serde(default = "default_amount")]
    pub sugar: u32,
    #[serde(default = "default_amount")]
    pub chocolate: u32,
}

fn default_amount() -> u32 {
    15
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            coffee: default_amount(),
            milk: default_amount(),
            sugar: default_amount(),
            chocolate: default_amount(),
        }
    }
}

impl From<&InventorySettings> for Inventory {
    fn from(settings: &InventorySettings) -> Self {
        Inventory::new(
            settings.coffee,
            settings.milk,
            settings.sugar,
            settings.chocolate,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderSettings {
    pub recipe: String,
    pub amount_paid: u32,
    #[serde(default)]
    pub change: u32,
}

impl From<&OrderSettings> for Order {
    fn from(settings: &OrderSettings) -> Self {
        Order::new(settings.recipe.clone(), settings.amount_paid, settings.change)
    }
}

impl CoffeeMakerConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let config: Self = coffee_config::figment(config_dir).extract()?;
        Ok(config)
    }

    pub fn initial_inventory(&self) -> Inventory {
        Inventory::from(&self.inventory)
    }

    pub fn initial_orders(&self) -> Vec<Order> {
        self.orders.iter().map(Order::from).collect()
    }
}
