//! Novel Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{Chapter, ChapterDraft, IndexEntry};

/// 章节索引聚合根
///
/// 不变量:
/// - chapters 按提取顺序排列，id 严格递增
/// - 被跳过的空章节占用的 id 不出现在索引中
/// - total_chapters == chapters.len()
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterIndex {
    total_chapters: usize,
    chapters: Vec<IndexEntry>,
}

impl ChapterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 定稿草稿并登记到索引
    ///
    /// 草稿为空时返回 `None`，不登记
    pub fn admit(&mut self, draft: ChapterDraft) -> Option<Chapter> {
        let chapter = draft.finalize()?;
        self.chapters.push(IndexEntry::from(&chapter));
        self.total_chapters = self.chapters.len();
        Some(chapter)
    }

    pub fn total_chapters(&self) -> usize {
        self.total_chapters
    }

    pub fn chapters(&self) -> &[IndexEntry] {
        &self.chapters
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// 所有章节词数之和
    pub fn total_words(&self) -> usize {
        self.chapters.iter().map(|c| c.word_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: u32, number: u64, title: &str, lines: &[&str]) -> ChapterDraft {
        let mut draft = ChapterDraft::new(id, number, title);
        for line in lines {
            draft.push_line(*line);
        }
        draft
    }

    #[test]
    fn test_admission_keeps_draft_ids() {
        let mut index = ChapterIndex::new();
        let first = index.admit(draft(1, 5, "Пятая", &["a"])).unwrap();
        let second = index.admit(draft(2, 5, "Снова пятая", &["b c"])).unwrap();
        let third = index.admit(draft(3, 2, "Вторая", &["d"])).unwrap();

        assert_eq!((first.id(), first.number()), (1, 5));
        assert_eq!((second.id(), second.number()), (2, 5));
        assert_eq!((third.id(), third.number()), (3, 2));
        assert_eq!(index.total_chapters(), 3);
        assert_eq!(index.total_words(), 4);
    }

    #[test]
    fn test_empty_draft_leaves_gap() {
        let mut index = ChapterIndex::new();
        assert!(index.admit(draft(1, 1, "Пустая", &["", " "])).is_none());

        let chapter = index.admit(draft(2, 2, "Вторая", &["текст"])).unwrap();
        assert_eq!(chapter.id(), 2);
        assert_eq!(index.total_chapters(), 1);
        assert_eq!(index.chapters()[0].id, 2);
    }

    #[test]
    fn test_index_json_shape() {
        let mut index = ChapterIndex::new();
        index.admit(draft(1, 1, "Начало", &["один два"]));

        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(
            json,
            r#"{"total_chapters":1,"chapters":[{"id":1,"number":1,"title":"Начало","word_count":2}]}"#
        );
    }

    #[test]
    fn test_empty_index() {
        let index = ChapterIndex::new();
        assert!(index.is_empty());
        assert_eq!(
            serde_json::to_string(&index).unwrap(),
            r#"{"total_chapters":0,"chapters":[]}"#
        );
    }
}
