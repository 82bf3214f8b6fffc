use anyhow::Result;
use std::path::Path;

use crate::food::Food;
use crate::order::Order;

/// Execute order command: read an order file, cook it, print the receipt
pub fn execute_order(order_file: &Path) -> Result<()> {
    if !order_file.exists() {
        anyhow::bail!("注文ファイルが見つかりません: {}", order_file.display());
    }

    let content = std::fs::read_to_string(order_file).map_err(|e| {
        anyhow::anyhow!(
            "注文ファイルの読み込みに失敗しました {}: {}",
            order_file.display(),
            e
        )
    })?;

    let order = Order::from_json(&content)?;

    println!("🧾 注文受付: {} x{}", order.dish, order.quantity);

    let meals = order.place()?;
    for meal in &meals {
        println!("   🍽️  {meal}");
    }

    let total: u32 = meals.iter().map(|meal| meal.calorie()).sum();
    println!("✅ 提供完了! 合計 {total} kcal");

    Ok(())
}
