use mockall::automock;

use crate::food::dishes::{Curry, Ramen};
use crate::food::{Food, FoodKind};

pub mod static_factory;

/// 料理を作るファクトリーのトレイト
///
/// 実装は状態を持たず、`cook()` は毎回独立した新しい料理を返す
#[automock]
pub trait FoodFactory: Send + Sync {
    /// 新しい料理を一品作る
    fn cook(&self) -> Box<dyn Food>;

    /// このファクトリーが作る料理の種類を取得
    fn kind(&self) -> FoodKind;

    /// メニュー表示用の説明を取得
    fn description(&self) -> &'static str;
}

// FoodFactory for Box<dyn FoodFactory>
impl FoodFactory for Box<dyn FoodFactory> {
    fn cook(&self) -> Box<dyn Food> {
        self.as_ref().cook()
    }

    fn kind(&self) -> FoodKind {
        self.as_ref().kind()
    }

    fn description(&self) -> &'static str {
        self.as_ref().description()
    }
}

/// ラーメン専門のファクトリー
pub struct RamenFactory;

impl RamenFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RamenFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodFactory for RamenFactory {
    fn cook(&self) -> Box<dyn Food> {
        Box::new(Ramen::new())
    }

    fn kind(&self) -> FoodKind {
        FoodKind::Ramen
    }

    fn description(&self) -> &'static str {
        "香ばしい醤油ベースのラーメン"
    }
}

/// カレー専門のファクトリー
pub struct CurryFactory;

impl CurryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CurryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodFactory for CurryFactory {
    fn cook(&self) -> Box<dyn Food> {
        Box::new(Curry::new())
    }

    fn kind(&self) -> FoodKind {
        FoodKind::Curry
    }

    fn description(&self) -> &'static str {
        "じっくり煮込んだ欧風カレー"
    }
}

/// 種類からファクトリーを作るプロバイダー
///
/// 閉じた列挙型に対する網羅的なマッチなので失敗経路は存在しない
pub struct FoodFactoryProvider;

impl FoodFactoryProvider {
    /// 指定された種類のファクトリーを作成
    pub fn create(kind: FoodKind) -> Box<dyn FoodFactory> {
        match kind {
            FoodKind::Ramen => Box::new(RamenFactory::new()),
            FoodKind::Curry => Box::new(CurryFactory::new()),
        }
    }
}

/// 名前からファクトリーを検索する（完全一致）
///
/// 未知の名前には `None` を返し、エラーにはしない
pub fn get_factory(name: &str) -> Option<Box<dyn FoodFactory>> {
    FoodKind::from_name(name).map(FoodFactoryProvider::create)
}

/// 便利関数：名前から一品作る
pub fn cook(name: &str) -> Option<Box<dyn Food>> {
    get_factory(name).map(|factory| factory.cook())
}
