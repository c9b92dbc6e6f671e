pub mod json;
pub mod file;
pub mod savefile;
