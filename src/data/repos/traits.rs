pub mod catalog_repository;
pub mod repository;
pub mod store;
