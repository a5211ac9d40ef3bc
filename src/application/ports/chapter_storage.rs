//! Chapter Storage Port - 出站端口
//!
//! 定义章节与索引的持久化接口，具体实现在 infrastructure 层

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::novel::{Chapter, ChapterIndex};

/// 章节存储错误
#[derive(Debug, Error)]
pub enum ChapterStorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for ChapterStorageError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ChapterStorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Chapter Storage Port
///
/// 每章定稿后立即调用 `save_chapter`，全部章节完成后调用一次 `save_index`
pub trait ChapterStoragePort: Send + Sync {
    /// 准备存储位置（如创建输出目录）
    fn prepare(&self) -> Result<(), ChapterStorageError>;

    /// 保存单个章节，返回写入位置
    fn save_chapter(&self, chapter: &Chapter) -> Result<PathBuf, ChapterStorageError>;

    /// 保存索引，返回写入位置
    fn save_index(&self, index: &ChapterIndex) -> Result<PathBuf, ChapterStorageError>;

    /// 存储位置（用于提示信息）
    fn location(&self) -> PathBuf;
}
