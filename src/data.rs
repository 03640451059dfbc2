pub mod database;
pub mod errors;
pub mod models;
pub mod repos;
pub mod seed;
