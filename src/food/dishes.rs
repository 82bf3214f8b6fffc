use super::{Food, FoodKind};
use std::fmt;

/// ラーメン
///
/// カロリー値はコンストラクタで一度だけ設定され、以後変更されない
#[derive(Debug, Clone)]
pub struct Ramen {
    calorie: u32,
}

impl Ramen {
    pub fn new() -> Self {
        Self { calorie: 800 }
    }
}

impl Default for Ramen {
    fn default() -> Self {
        Self::new()
    }
}

impl Food for Ramen {
    fn calorie(&self) -> u32 {
        self.calorie
    }

    fn kind(&self) -> FoodKind {
        FoodKind::Ramen
    }
}

impl fmt::Display for Ramen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kcal)", self.name(), self.calorie)
    }
}

/// カレー
#[derive(Debug, Clone)]
pub struct Curry {
    calorie: u32,
}

impl Curry {
    pub fn new() -> Self {
        Self { calorie: 700 }
    }
}

impl Default for Curry {
    fn default() -> Self {
        Self::new()
    }
}

impl Food for Curry {
    fn calorie(&self) -> u32 {
        self.calorie
    }

    fn kind(&self) -> FoodKind {
        FoodKind::Curry
    }
}

impl fmt::Display for Curry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kcal)", self.name(), self.calorie)
    }
}
