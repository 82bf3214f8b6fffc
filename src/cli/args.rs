use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "food_factory")]
#[command(about = "A demo kitchen built from interchangeable food factories")]
#[command(version)]
pub struct Cli {
    /// Without a subcommand, cooks the fixed Ramen demonstration
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cook a dish by name and print the receipt
    Cook {
        /// Dish name (exact match, e.g. "Ramen" or "Curry")
        dish: String,

        /// Number of servings to cook
        #[arg(short, long, default_value = "1")]
        quantity: usize,
    },

    /// Show every dish the kitchen can cook
    Menu,

    /// Place an order from a JSON file
    Order {
        /// Order file, e.g. {"dish": "Ramen", "quantity": 2}
        order_file: PathBuf,
    },
}
