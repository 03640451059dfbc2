pub mod category_repo;
pub mod customer_repo;
pub mod memory_store;
pub mod mysql_session;
pub mod order_line_repo;
pub mod order_repo;
pub mod product_repo;
