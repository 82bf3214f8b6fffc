// CLI層 - 食堂への注文口
// 引数なしなら固定デモ、サブコマンドで調理・メニュー表示・注文ファイル処理

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{execute_cook, execute_menu, execute_order};
