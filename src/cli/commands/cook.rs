use anyhow::Result;

use crate::error::OrderError;
use crate::factory::{get_factory, FoodFactory};
use crate::food::Food;

/// Execute cook command: cook a named dish and print the receipt
pub fn execute_cook(dish: &str, quantity: usize) -> Result<()> {
    let factory = get_factory(dish).ok_or_else(|| OrderError::unknown_dish(dish))?;

    println!("🍳 調理開始: {}", factory.description());

    let meals: Vec<_> = (0..quantity).map(|_| factory.cook()).collect();
    for meal in &meals {
        println!("   🍽️  {meal}");
    }

    let total: u32 = meals.iter().map(|meal| meal.calorie()).sum();

    println!("✅ 提供完了!");
    println!("   - 品数: {}", meals.len());
    println!("   - 合計カロリー: {total} kcal");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cook_known_dish() {
        assert!(execute_cook("Ramen", 1).is_ok());
        assert!(execute_cook("Curry", 3).is_ok());
    }

    #[test]
    fn test_cook_unknown_dish() {
        let result = execute_cook("Sushi", 1);

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("未対応の料理です"));
        assert!(message.contains("Ramen, Curry"));
    }

    #[test]
    fn test_cook_wrong_case_is_rejected() {
        assert!(execute_cook("ramen", 1).is_err());
    }

    #[test]
    fn test_cook_zero_quantity_serves_nothing() {
        // 数量ゼロは空のレシートになるだけでエラーではない
        assert!(execute_cook("Ramen", 0).is_ok());
    }
}
