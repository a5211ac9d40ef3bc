//! 章节提取器
//!
//! 逐行扫描小说文本，识别方框边框与章节标题，累积章节正文。
//!
//! 源文本中每章以如下方框开头:
//!
//! ```text
//! ╔══════════════════════════╗
//! ║ ГЛАВА 1: Начало          ║
//! ╚══════════════════════════╝
//! ```
//!
//! 方框之后到下一个方框之前的所有行都属于该章正文。

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::novel::{ChapterDraft, NovelError};

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^║\s*ГЛАВА\s+(\d+)[:\s]+(.+?)\s*║").unwrap());

static DECIMAL_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").unwrap());

/// 检查是否为方框上边框
#[inline]
pub fn is_top_border(line: &str) -> bool {
    line.starts_with(|ch| matches!(ch, '╔' | '╦' | '═' | '╠' | '╬'))
}

/// 检查是否为方框下边框
#[inline]
pub fn is_bottom_border(line: &str) -> bool {
    line.starts_with(|ch| matches!(ch, '╚' | '╩' | '═' | '╠' | '╬'))
}

fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit() || DECIMAL_DIGIT_RE.is_match(ch.encode_utf8(&mut [0; 4]))
}

/// Unicode 十进制数字（Nd）的数值
///
/// 每套 Nd 数字占连续 10 个码位且从 0 开始，相邻的数字集同样按 10 对齐，
/// 因此数值等于该字符在连续 Nd 区段中的偏移对 10 取模
fn digit_value(ch: char) -> Option<u32> {
    if let Some(value) = ch.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(ch) {
        return None;
    }

    let mut offset = 0u32;
    let mut code = ch as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// 解析章节号，接受任意 Unicode 十进制数字
pub fn parse_chapter_number(raw: &str) -> Result<u64, NovelError> {
    if raw.is_empty() {
        return Err(NovelError::InvalidChapterNumber(raw.to_string()));
    }

    raw.chars().try_fold(0u64, |acc, ch| {
        let digit = digit_value(ch)
            .ok_or_else(|| NovelError::InvalidChapterNumber(raw.to_string()))?;
        acc.checked_mul(10)
            .and_then(|value| value.checked_add(u64::from(digit)))
            .ok_or_else(|| NovelError::ChapterNumberOverflow(raw.to_string()))
    })
}

/// 标题行解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine {
    pub number: u64,
    pub title: String,
}

/// 解析方框内的章节标题行，不是标题行时返回 `None`
///
/// 只要匹配标题格式就一定返回标题；章节号超出 `u64` 时记为 `u64::MAX`
pub fn parse_title(line: &str) -> Option<TitleLine> {
    let caps = TITLE_RE.captures(line)?;

    let number = parse_chapter_number(&caps[1]).unwrap_or_else(|e| {
        tracing::warn!(line = %line, error = %e, "Chapter number clamped");
        u64::MAX
    });

    Some(TitleLine {
        number,
        title: caps[2].trim().to_string(),
    })
}

/// 提取器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorState {
    /// 方框外，正文行归入当前章节
    #[default]
    Body,
    /// 刚读到上边框，下一行应为标题
    ExpectTitle,
    /// 方框内，等待下边框
    InBox,
}

/// 章节提取器
///
/// 只做状态转移，不做 IO。每当新章节开始，上一章的草稿由 [`feed`](Self::feed)
/// 交还给调用方；输入结束后调用 [`finish`](Self::finish) 取回最后一章。
#[derive(Debug, Default)]
pub struct ChapterExtractor {
    state: ExtractorState,
    current: Option<ChapterDraft>,
    /// 最近分配的章节 id，识别到标题即递增
    last_id: u32,
}

impl ChapterExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExtractorState {
        self.state
    }

    /// 当前正在累积的章节
    pub fn current(&self) -> Option<&ChapterDraft> {
        self.current.as_ref()
    }

    /// 处理一行（不含换行符）
    ///
    /// 识别到新章节标题时返回上一章的草稿
    pub fn feed(&mut self, line: &str) -> Option<ChapterDraft> {
        let trimmed = line.trim_end();

        match self.state {
            ExtractorState::Body | ExtractorState::ExpectTitle if is_top_border(trimmed) => {
                self.state = ExtractorState::ExpectTitle;
                None
            }
            ExtractorState::ExpectTitle => {
                // 无论是否匹配，上边框后的这一行都被消费
                self.state = ExtractorState::Body;
                match parse_title(trimmed) {
                    Some(TitleLine { number, title }) => {
                        self.last_id += 1;
                        tracing::debug!(id = self.last_id, number, title = %title, "Chapter header found");
                        self.state = ExtractorState::InBox;
                        self.current
                            .replace(ChapterDraft::new(self.last_id, number, title))
                    }
                    None => {
                        tracing::debug!(line = %trimmed, "Line after top border is not a chapter header, dropped");
                        None
                    }
                }
            }
            ExtractorState::InBox => {
                if is_bottom_border(trimmed) {
                    self.state = ExtractorState::Body;
                }
                None
            }
            ExtractorState::Body => {
                if let Some(draft) = self.current.as_mut() {
                    draft.push_line(line);
                }
                None
            }
        }
    }

    /// 输入结束，取回最后一章
    pub fn finish(&mut self) -> Option<ChapterDraft> {
        self.state = ExtractorState::Body;
        self.current.take()
    }
}
