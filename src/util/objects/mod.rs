pub mod arguments;
pub mod configuration;
pub mod tables;
