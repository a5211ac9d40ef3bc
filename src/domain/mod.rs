//! Domain Layer - 领域层
//!
//! - Novel Context: 章节、正文与索引
//! - 章节提取器: 方框边框 + 标题行的状态机

pub mod novel;

mod chapter_extractor;

pub use chapter_extractor::{
    is_bottom_border, is_top_border, parse_chapter_number, parse_title, ChapterExtractor,
    ExtractorState, TitleLine,
};
