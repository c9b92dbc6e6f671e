pub mod traits;
pub mod mysql;
pub mod runner;
