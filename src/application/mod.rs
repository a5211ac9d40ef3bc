//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（ChapterStorage）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{SplitEvent, SplitNovelHandler, SplitReport},
    SplitNovel,
};

pub use error::ApplicationError;

pub use ports::{ChapterStorageError, ChapterStoragePort};
