use anyhow::Result;

use crate::factory::{FoodFactory, FoodFactoryProvider};
use crate::food::{Food, FoodKind};

/// Execute menu command: list every dish with calories and description
pub fn execute_menu() -> Result<()> {
    println!("📋 メニュー一覧:");

    for kind in FoodKind::ALL {
        let factory = FoodFactoryProvider::create(kind);
        let sample = factory.cook();

        println!(
            "   - {} ({} kcal): {}",
            kind,
            sample.calorie(),
            factory.description()
        );
    }

    Ok(())
}
