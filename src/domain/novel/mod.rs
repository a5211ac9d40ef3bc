//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 章节实体与正文值对象
//! - 章节索引聚合

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::ChapterIndex;
pub use entities::{Chapter, ChapterDraft, IndexEntry};
pub use errors::NovelError;
pub use value_objects::{count_words, ChapterContent};
