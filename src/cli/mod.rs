pub mod commands;
pub mod resolve;

pub use commands::*;
