pub mod category_controller;
pub mod order_controller;
pub mod product_controller;
