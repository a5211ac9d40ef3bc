//! 应用层错误定义
//!
//! 统一的命令错误类型

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::ChapterStorageError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入文件不存在
    #[error("Input file not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    /// 读取输入失败
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(#[from] ChapterStorageError),
}

impl ApplicationError {
    /// 创建 MissingInputFile 错误
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInputFile { path: path.into() }
    }

    /// 创建读取错误
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInputFile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        let err = ApplicationError::missing_input("/tmp/novel.txt");
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "Input file not found: /tmp/novel.txt");
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: ApplicationError = ChapterStorageError::IoError("disk full".into()).into();
        assert!(!err.is_missing_input());
        assert_eq!(err.to_string(), "Storage error: IO error: disk full");
    }
}
