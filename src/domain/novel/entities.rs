//! Novel Context - Entities

use serde::{Deserialize, Serialize};

use super::ChapterContent;

/// 章节 - 输出给阅读器的最小单位
///
/// 不变量:
/// - id 从 1 开始按出现顺序递增，与 number 无关
/// - content 首尾不含空白行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 顺序编号（从 1 开始）
    id: u32,
    /// 标题中声明的章节号，可能乱序或重复
    number: u64,
    title: String,
    content: String,
    word_count: usize,
    char_count: usize,
}

impl Chapter {
    pub fn new(id: u32, number: u64, title: impl Into<String>, content: ChapterContent) -> Self {
        Self {
            id,
            number,
            title: title.into(),
            word_count: content.word_count(),
            char_count: content.char_count(),
            content: content.into_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// 输出文件名，如 `chapter_007.json`
    pub fn file_name(&self) -> String {
        format!("chapter_{:03}.json", self.id)
    }
}

/// 正在读取的章节
///
/// id 在识别到标题时分配，即使该章最终因正文为空而不输出也会占用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDraft {
    id: u32,
    number: u64,
    title: String,
    lines: Vec<String>,
}

impl ChapterDraft {
    pub fn new(id: u32, number: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            number,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 定稿为章节
    ///
    /// 正文去掉首尾空白行后为空则返回 `None`，该章不输出
    pub fn finalize(self) -> Option<Chapter> {
        let content = ChapterContent::from_lines(&self.lines)?;
        Some(Chapter::new(self.id, self.number, self.title, content))
    }
}

/// 索引条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: u32,
    pub number: u64,
    pub title: String,
    pub word_count: usize,
}

impl From<&Chapter> for IndexEntry {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id,
            number: chapter.number,
            title: chapter.title.clone(),
            word_count: chapter.word_count,
        }
    }
}
