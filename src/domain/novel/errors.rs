//! Novel Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NovelError {
    #[error("无效的章节号: {0}")]
    InvalidChapterNumber(String),

    #[error("章节号超出范围: {0}")]
    ChapterNumberOverflow(String),
}
