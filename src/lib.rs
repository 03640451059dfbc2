pub mod api;
pub mod data;
pub mod services;
pub mod utils;
