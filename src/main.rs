use anyhow::Result;
use clap::Parser;

use food_factory::cli::{execute_cook, execute_menu, execute_order, Cli, Commands};
use food_factory::{get_factory, FoodFactory};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Cook { dish, quantity }) => execute_cook(&dish, quantity),
        Some(Commands::Menu) => execute_menu(),
        Some(Commands::Order { order_file }) => execute_order(&order_file),
        None => {
            run_demo();
            Ok(())
        }
    }
}

/// 引数なしで起動したときの固定デモ：ラーメンを一杯作って表示する
fn run_demo() {
    // "Ramen" は登録済みの種類なので、ここで見つからないのは実装バグ
    let factory = get_factory("Ramen").expect("Ramen factory must be registered");
    let meal = factory.cook();

    println!("🍜 本日の一品: {meal}");
}
