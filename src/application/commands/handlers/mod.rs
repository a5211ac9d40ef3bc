//! Command Handlers 实现

mod split_handlers;

pub use split_handlers::*;
