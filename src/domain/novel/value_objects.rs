//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

/// 章节正文
///
/// 不变量:
/// - 首尾不含空白行
/// - 非空
/// - word_count / char_count 始终与 text 一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContent {
    text: String,
    word_count: usize,
    char_count: usize,
}

impl ChapterContent {
    /// 从原始行构建正文，去掉首尾空白行后以 `\n` 拼接
    ///
    /// 去除空白行后没有剩余内容时返回 `None`
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        let is_blank = |line: &S| line.as_ref().trim().is_empty();

        let start = lines.iter().position(|l| !is_blank(l))?;
        let end = lines.iter().rposition(|l| !is_blank(l))? + 1;

        let text = lines[start..end]
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");

        Some(Self::from_text(text))
    }

    fn from_text(text: String) -> Self {
        Self {
            word_count: count_words(&text),
            char_count: text.chars().count(),
            text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// 按空白切分的词数
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
