//! JSON Storage - 文件系统章节存储实现
//!
//! 实现 ChapterStoragePort trait
//!
//! 输出目录结构:
//! - `chapter_001.json`, `chapter_002.json`, ...
//! - `index.json`

use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::application::ports::{ChapterStorageError, ChapterStoragePort};
use crate::domain::novel::{Chapter, ChapterIndex};

/// 索引文件名
pub const INDEX_FILE_NAME: &str = "index.json";

/// 文件系统 JSON 章节存储
pub struct JsonChapterStorage {
    /// 输出目录
    base_dir: PathBuf,
}

impl JsonChapterStorage {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn chapter_path(&self, chapter: &Chapter) -> PathBuf {
        self.base_dir.join(chapter.file_name())
    }

    pub fn index_path(&self) -> PathBuf {
        self.base_dir.join(INDEX_FILE_NAME)
    }

    /// 以两空格缩进写入 JSON，非 ASCII 字符原样输出
    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), ChapterStorageError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        Ok(())
    }
}

impl ChapterStoragePort for JsonChapterStorage {
    fn prepare(&self) -> Result<(), ChapterStorageError> {
        fs::create_dir_all(&self.base_dir)?;
        tracing::debug!(dir = %self.base_dir.display(), "Output directory ready");
        Ok(())
    }

    fn save_chapter(&self, chapter: &Chapter) -> Result<PathBuf, ChapterStorageError> {
        let path = self.chapter_path(chapter);
        self.write_json(&path, chapter)?;

        tracing::debug!(
            "Saved chapter: id={}, size={} chars",
            chapter.id(),
            chapter.char_count()
        );

        Ok(path)
    }

    fn save_index(&self, index: &ChapterIndex) -> Result<PathBuf, ChapterStorageError> {
        let path = self.index_path();
        self.write_json(&path, index)?;

        tracing::debug!("Saved index: chapters={}", index.total_chapters());

        Ok(path)
    }

    fn location(&self) -> PathBuf {
        self.base_dir.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::ChapterDraft;
    use tempfile::tempdir;

    fn sample_index() -> (ChapterIndex, Chapter) {
        let mut index = ChapterIndex::new();
        let mut draft = ChapterDraft::new(1, 1, "Начало");
        draft.push_line("Было раннее утро.");
        let chapter = index.admit(draft).unwrap();
        (index, chapter)
    }

    #[test]
    fn test_prepare_creates_nested_dir() {
        let temp_dir = tempdir().unwrap();
        let out = temp_dir.path().join("public").join("chapters");
        let storage = JsonChapterStorage::new(&out);

        storage.prepare().unwrap();
        assert!(out.is_dir());

        // 重复创建不报错
        storage.prepare().unwrap();
    }

    #[test]
    fn test_chapter_file_format() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonChapterStorage::new(temp_dir.path());
        let (_, chapter) = sample_index();

        let path = storage.save_chapter(&chapter).unwrap();
        assert_eq!(path, temp_dir.path().join("chapter_001.json"));

        let written = fs::read_to_string(&path).unwrap();
        let expected = "{\n  \"id\": 1,\n  \"number\": 1,\n  \"title\": \"Начало\",\n  \"content\": \"Было раннее утро.\",\n  \"word_count\": 3,\n  \"char_count\": 17\n}";
        assert_eq!(written, expected);
    }

    #[test]
    fn test_index_file_format() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonChapterStorage::new(temp_dir.path());
        let (index, _) = sample_index();

        let path = storage.save_index(&index).unwrap();
        assert_eq!(path, temp_dir.path().join(INDEX_FILE_NAME));

        let written = fs::read_to_string(&path).unwrap();
        let expected = "{\n  \"total_chapters\": 1,\n  \"chapters\": [\n    {\n      \"id\": 1,\n      \"number\": 1,\n      \"title\": \"Начало\",\n      \"word_count\": 3\n    }\n  ]\n}";
        assert_eq!(written, expected);

        let parsed: ChapterIndex = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, index);
    }

    #[test]
    fn test_save_without_prepare_fails() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonChapterStorage::new(temp_dir.path().join("missing"));
        let (index, _) = sample_index();

        assert!(matches!(
            storage.save_index(&index),
            Err(ChapterStorageError::IoError(_))
        ));
    }
}
