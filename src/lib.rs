//! Chapterize - 小说章节拆分工具
//!
//! 将一个纯文本小说文件按方框标题拆分为逐章 JSON 与索引，供阅读器使用。
//!
//! 领域层 (domain/):
//! - Novel Context: 章节、正文、索引
//! - 章节提取器: 边框/标题状态机
//!
//! 应用层 (application/):
//! - Ports: ChapterStoragePort
//! - Commands: SplitNovel 及处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: JSON 文件存储
//! - Memory: 内存存储（预览、测试）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
