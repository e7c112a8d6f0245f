//! 订单实体

use chrono::{DateTime, Utc};

/// 已下单的饮品订单
///
/// 订单一旦写入序列就不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// 饮品配方名称
    pub recipe: String,
    /// 支付金额
    pub amount_paid: u32,
    /// 找零
    pub change: u32,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(recipe: impl Into<String>, amount_paid: u32, change: u32) -> Self {
        Self {
            recipe: recipe.into(),
            amount_paid,
            change,
            placed_at: Utc::now(),
        }
    }
}
