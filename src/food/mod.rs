use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OrderError;

pub mod dishes;

/// 料理の種類
///
/// 文字列キーによる検索で受け付ける唯一の外部入力。
/// バリアントを追加するときは対応するファクトリーも追加する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    /// ラーメン（800 kcal）
    Ramen,
    /// カレー（700 kcal）
    Curry,
}

impl FoodKind {
    /// 全種類の一覧
    pub const ALL: [FoodKind; 2] = [FoodKind::Ramen, FoodKind::Curry];

    /// 検索キーとして使う名前を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            FoodKind::Ramen => "Ramen",
            FoodKind::Curry => "Curry",
        }
    }

    /// 名前から種類を逆引きする（完全一致、大文字小文字を区別）
    pub fn from_name(name: &str) -> Option<FoodKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FoodKind {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| OrderError::unknown_dish(s))
    }
}

/// 料理のトレイト
///
/// 構築後は不変で、カロリー値は種類ごとに固定
pub trait Food: fmt::Debug + fmt::Display + Send + Sync {
    /// 固定のカロリー値を取得（kcal）
    fn calorie(&self) -> u32;

    /// 料理の種類を取得
    fn kind(&self) -> FoodKind;

    /// 料理名を取得
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}
