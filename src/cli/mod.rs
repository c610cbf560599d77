pub mod commands;
pub mod generate;
pub mod list;
pub mod render;
pub mod show;

pub use commands::{Cli, Commands};
