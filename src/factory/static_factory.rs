//! 静的ディスパッチ版ファクトリー - コンパイル時に料理を確定
//!
//! `Box<dyn Food>` を返す動的ディスパッチ版と対になる実装：
//! - 型パラメータで作る料理を表現
//! - 仮想呼び出しもヒープ確保も発生しない

use crate::food::dishes::{Curry, Ramen};
use crate::food::{Food, FoodKind};

/// コンパイル時に料理の種類が決まるファクトリー
pub trait StaticFoodFactory {
    /// このファクトリーが作る料理の型
    type Dish: Food;

    /// 作る料理の種類（コンパイル時定数）
    const KIND: FoodKind;

    /// 新しい料理を一品作る
    fn cook() -> Self::Dish;
}

/// ラーメン専門の静的ファクトリー
pub struct StaticRamenFactory;

impl StaticFoodFactory for StaticRamenFactory {
    type Dish = Ramen;
    const KIND: FoodKind = FoodKind::Ramen;

    fn cook() -> Ramen {
        Ramen::new()
    }
}

/// カレー専門の静的ファクトリー
pub struct StaticCurryFactory;

impl StaticFoodFactory for StaticCurryFactory {
    type Dish = Curry;
    const KIND: FoodKind = FoodKind::Curry;

    fn cook() -> Curry {
        Curry::new()
    }
}

/// ジェネリック関数として静的ディスパッチで調理する
pub fn cook_static<F: StaticFoodFactory>() -> F::Dish {
    F::cook()
}
