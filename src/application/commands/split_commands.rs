//! Split Commands

use std::path::PathBuf;

/// 将小说文本拆分为章节 JSON 的命令
#[derive(Debug, Clone)]
pub struct SplitNovel {
    pub input_file: PathBuf,
}

impl SplitNovel {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
        }
    }
}
