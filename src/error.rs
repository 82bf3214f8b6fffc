// 注文処理用のカスタムエラー型定義

use thiserror::Error;

use crate::food::FoodKind;

/// 注文処理のエラー型
///
/// 検索ミス自体は `Option` で表現されるため、エラーになるのは
/// 注文として受け付けた後の境界だけ
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("未対応の料理です: {name} (利用可能: {available})")]
    UnknownDish { name: String, available: String },

    #[error("注文の解析に失敗しました: {source}")]
    InvalidOrder {
        #[source]
        source: serde_json::Error,
    },
}

impl OrderError {
    /// 未対応料理エラーの作成
    pub fn unknown_dish(name: impl Into<String>) -> Self {
        Self::UnknownDish {
            name: name.into(),
            available: FoodKind::ALL
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// 注文解析エラーの作成
    pub fn invalid_order(source: serde_json::Error) -> Self {
        Self::InvalidOrder { source }
    }
}

/// 注文処理の結果型
pub type OrderResult<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_dish_lists_available_kinds() {
        let error = OrderError::unknown_dish("Sushi");

        let message = error.to_string();
        assert!(message.contains("Sushi"));
        assert!(message.contains("Ramen"));
        assert!(message.contains("Curry"));
    }

    #[test]
    fn test_invalid_order_keeps_source() {
        let parse_error = serde_json::from_str::<FoodKind>("not json").unwrap_err();
        let error = OrderError::invalid_order(parse_error);

        assert!(error.to_string().contains("注文の解析に失敗しました"));
        assert!(error.source().is_some());
    }
}
