//! 应用层 - 命令（写操作）

mod split_commands;

pub mod handlers;

pub use split_commands::*;
