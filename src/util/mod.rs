pub mod macros;
pub mod error;
pub mod command;
pub mod process;
pub mod io;
pub mod objects;
