//! In-Memory Chapter Storage Implementation

use dashmap::DashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::application::ports::{ChapterStorageError, ChapterStoragePort};
use crate::domain::novel::{Chapter, ChapterIndex};

/// 内存章节存储
///
/// 用于 `--dry-run` 和测试，不落盘
pub struct InMemoryChapterStorage {
    chapters: DashMap<u32, Chapter>,
    index: RwLock<Option<ChapterIndex>>,
    prepared: AtomicBool,
}

impl InMemoryChapterStorage {
    pub fn new() -> Self {
        Self {
            chapters: DashMap::new(),
            index: RwLock::new(None),
            prepared: AtomicBool::new(false),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 已保存的章节（按 id 排序）
    pub fn chapters(&self) -> Vec<Chapter> {
        let mut chapters: Vec<Chapter> = self.chapters.iter().map(|c| c.value().clone()).collect();
        chapters.sort_by_key(Chapter::id);
        chapters
    }

    pub fn chapter(&self, id: u32) -> Option<Chapter> {
        self.chapters.get(&id).map(|c| c.clone())
    }

    pub fn index(&self) -> Option<ChapterIndex> {
        self.index.read().ok().and_then(|index| index.clone())
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared.load(Ordering::Relaxed)
    }
}

impl Default for InMemoryChapterStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterStoragePort for InMemoryChapterStorage {
    fn prepare(&self) -> Result<(), ChapterStorageError> {
        self.prepared.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn save_chapter(&self, chapter: &Chapter) -> Result<PathBuf, ChapterStorageError> {
        self.chapters.insert(chapter.id(), chapter.clone());
        tracing::debug!(id = chapter.id(), "Chapter stored in memory");
        Ok(self.location().join(chapter.file_name()))
    }

    fn save_index(&self, index: &ChapterIndex) -> Result<PathBuf, ChapterStorageError> {
        let mut slot = self
            .index
            .write()
            .map_err(|_| ChapterStorageError::IoError("index lock poisoned".to_string()))?;
        *slot = Some(index.clone());
        Ok(self.location().join("index.json"))
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://chapters")
    }
}
