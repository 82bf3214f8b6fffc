use anyhow::Result;
use food_factory::factory::static_factory::{
    cook_static, StaticCurryFactory, StaticRamenFactory,
};
use food_factory::{get_factory, Canteen, CurryFactory, Food, FoodFactory, RamenFactory};

fn main() -> Result<()> {
    println!("=== Abstract Factory パターンのデモ ===\n");

    // 名前でファクトリーを選択（動的ディスパッチ）
    for name in ["Ramen", "Curry", "Sushi"] {
        println!("注文: {name}");

        match get_factory(name) {
            Some(factory) => {
                let meal = factory.cook();
                println!("   → {} を提供 ({} kcal)", meal.name(), meal.calorie());
            }
            None => {
                println!("   → メニューにありません");
            }
        }
    }

    // ファクトリーを差し替えても食堂側のコードは変わらない
    println!("\n=== ファクトリーの差し替え ===");

    let ramen_canteen = Canteen::new(RamenFactory::new());
    let curry_canteen = Canteen::new(CurryFactory::new());

    println!("ラーメン食堂: {}", ramen_canteen.serve());
    println!("カレー食堂: {}", curry_canteen.serve());

    // 静的ディスパッチ版 - 料理の種類をコンパイル時に確定
    println!("\n=== 静的ディスパッチ版 ===");

    let ramen = cook_static::<StaticRamenFactory>();
    let curry = cook_static::<StaticCurryFactory>();
    println!("{ramen}");
    println!("{curry}");

    println!("\n現在のアーキテクチャの利点:");
    println!("1. ファクトリーの切り替えが簡単");
    println!("2. テスト時にモックを使用可能");
    println!("3. 新しい料理の追加は enum バリアントとファクトリーの追加だけ");
    println!("4. 検索ミスは Option で表現されパニックしない");

    Ok(())
}
