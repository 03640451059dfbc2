pub mod logging;
pub mod mappers;
