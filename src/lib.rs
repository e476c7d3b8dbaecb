pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod resolver;
pub mod result;
pub mod scanner;

pub use cli::Args;
pub use command::{execute, run};
pub use result::Result;
