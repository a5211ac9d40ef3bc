//! Memory Layer - In-Memory Storage
//!
//! 不落盘的章节存储，用于预览和测试

mod chapter_storage;

pub use chapter_storage::InMemoryChapterStorage;
