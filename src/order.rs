use serde::{Deserialize, Serialize};

use crate::error::{OrderError, OrderResult};
use crate::factory::{get_factory, FoodFactory};
use crate::food::Food;

/// JSON で受け付ける注文
///
/// 料理は名前（生の文字列）で指定する。数量は省略時 1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 料理名（例: "Ramen", "Curry"）
    pub dish: String,
    /// 注文数
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

impl Order {
    /// 新しい注文を作成
    pub fn new(dish: impl Into<String>, quantity: usize) -> Self {
        Self {
            dish: dish.into(),
            quantity,
        }
    }

    /// JSON 文字列から注文を作成
    pub fn from_json(json: &str) -> OrderResult<Self> {
        serde_json::from_str(json).map_err(OrderError::invalid_order)
    }

    /// 注文を調理する
    ///
    /// 料理ごとに独立したインスタンスが返る
    pub fn place(&self) -> OrderResult<Vec<Box<dyn Food>>> {
        let factory =
            get_factory(&self.dish).ok_or_else(|| OrderError::unknown_dish(&self.dish))?;

        Ok((0..self.quantity).map(|_| factory.cook()).collect())
    }
}
