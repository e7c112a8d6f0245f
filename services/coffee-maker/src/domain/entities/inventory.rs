//! 库存实体

use coffee_errors::{AppError, AppResult};

/// 咖啡机库存（各原料的剩余数量）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    pub coffee: u32,
    pub milk: u32,
    pub sugar: u32,
    pub chocolate: u32,
}

impl Inventory {
    pub fn new(coffee: u32, milk: u32, sugar: u32, chocolate: u32) -> Self {
        Self {
            coffee,
            milk,
            sugar,
            chocolate,
        }
    }

    /// 将 `delta` 中的数量逐项累加到当前库存
    ///
    /// 任一原料溢出时整体拒绝，库存保持不变
    pub fn add_amounts(&mut self, delta: &Inventory) -> AppResult<()> {
        let add = |name: &str, current: u32, amount: u32| {
            current.checked_add(amount).ok_or_else(|| {
                AppError::validation(format!(
                    "Adding {} {} would exceed the maximum of {}",
                    amount,
                    name,
                    u32::MAX
                ))
            })
        };

        let updated = Inventory {
            coffee: add("coffee", self.coffee, delta.coffee)?,
            milk: add("milk", self.milk, delta.milk)?,
            sugar: add("sugar", self.sugar, delta.sugar)?,
            chocolate: add("chocolate", self.chocolate, delta.chocolate)?,
        };

        *self = updated;
        Ok(())
    }
}
