pub mod cook;
pub mod menu;
pub mod order;

pub use cook::execute_cook;
pub use menu::execute_menu;
pub use order::execute_order;
