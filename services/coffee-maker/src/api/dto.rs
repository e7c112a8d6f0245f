//! HTTP 请求/响应结构

use chrono::{DateTime, Utc};
use coffee_errors::{AppError, AppResult, FieldError};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Inventory, Order};

/// 库存增量请求体
///
/// 字段使用有符号可选类型，缺失和负数都能在校验时定位到具体字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryPayload {
    pub coffee: Option<i64>,
    pub milk: Option<i64>,
    pub sugar: Option<i64>,
    pub chocolate: Option<i64>,
}

impl InventoryPayload {
    /// 校验并转换为领域对象
    pub fn validate(&self) -> AppResult<Inventory> {
        let mut errors = Vec::new();
        let mut check = |field: &str, value: Option<i64>| -> u32 {
            match value {
                None => {
                    errors.push(FieldError::new(field, "is required"));
                    0
                }
                Some(v) if v < 0 => {
                    errors.push(FieldError::new(field, "must not be negative"));
                    0
                }
                Some(v) => u32::try_from(v).unwrap_or_else(|_| {
                    errors.push(FieldError::new(
                        field,
                        format!("must not exceed {}", u32::MAX),
                    ));
                    0
                }),
            }
        };

        let inventory = Inventory {
            coffee: check("coffee", self.coffee),
            milk: check("milk", self.milk),
            sugar: check("sugar", self.sugar),
            chocolate: check("chocolate", self.chocolate),
        };

        if errors.is_empty() {
            Ok(inventory)
        } else {
            Err(AppError::invalid_fields(errors))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub coffee: u32,
    pub milk: u32,
    pub sugar: u32,
    pub chocolate: u32,
}

impl From<Inventory> for InventoryResponse {
    fn from(inventory: Inventory) -> Self {
        Self {
            coffee: inventory.coffee,
            milk: inventory.milk,
            sugar: inventory.sugar,
            chocolate: inventory.chocolate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub recipe: String,
    pub amount_paid: u32,
    pub change: u32,
    pub placed_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            recipe: order.recipe,
            amount_paid: order.amount_paid,
            change: order.change,
            placed_at: order.placed_at,
        }
    }
}
