//! Split Command Handlers
//!
//! 单次顺序读取输入文件，每章定稿后立即写入存储，最后写入索引

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::commands::SplitNovel;
use crate::application::error::ApplicationError;
use crate::application::ports::ChapterStoragePort;
use crate::domain::novel::{Chapter, ChapterDraft, ChapterIndex, IndexEntry};
use crate::domain::ChapterExtractor;

/// 拆分结果
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// 已写入的章节（按提取顺序）
    pub chapters: Vec<IndexEntry>,
    /// 因正文为空而跳过的章节数
    pub skipped: usize,
    pub total_words: usize,
    /// 输出位置
    pub output_dir: PathBuf,
}

impl SplitReport {
    pub fn total_chapters(&self) -> usize {
        self.chapters.len()
    }
}

/// 拆分进度事件
#[derive(Debug)]
pub enum SplitEvent<'a> {
    /// 输入已打开，开始读取
    Started { input: &'a Path },
    /// 章节已写入存储
    ChapterSaved(&'a Chapter),
    /// 章节正文为空，未写入
    ChapterSkipped { id: u32, title: &'a str },
}

type ProgressFn = Box<dyn Fn(&SplitEvent<'_>) + Send + Sync>;

/// 按通用换行规则切分一次 `read_line` 读到的内容
///
/// `\n`、`\r\n` 与单独的 `\r` 都视为行结束符
fn universal_lines(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// SplitNovel Handler
pub struct SplitNovelHandler {
    storage: Arc<dyn ChapterStoragePort>,
    on_progress: Option<ProgressFn>,
}

impl SplitNovelHandler {
    pub fn new(storage: Arc<dyn ChapterStoragePort>) -> Self {
        Self {
            storage,
            on_progress: None,
        }
    }

    /// 订阅进度事件
    pub fn with_progress<F>(mut self, on_progress: F) -> Self
    where
        F: Fn(&SplitEvent<'_>) + Send + Sync + 'static,
    {
        self.on_progress = Some(Box::new(on_progress));
        self
    }

    fn emit(&self, event: SplitEvent<'_>) {
        if let Some(on_progress) = &self.on_progress {
            on_progress(&event);
        }
    }

    pub fn handle(&self, command: SplitNovel) -> Result<SplitReport, ApplicationError> {
        let input = command.input_file;

        // 在任何输出之前检查输入文件
        if !input.exists() {
            return Err(ApplicationError::missing_input(input));
        }

        let file = File::open(&input).map_err(|e| ApplicationError::read(&input, e))?;

        self.storage.prepare()?;
        self.emit(SplitEvent::Started { input: &input });

        tracing::info!(input = %input.display(), output = %self.storage.location().display(), "Splitting novel");

        self.split(BufReader::new(file), &input)
    }

    /// 从任意行读取器拆分章节
    ///
    /// `source` 仅用于错误信息
    pub fn split<R: BufRead>(
        &self,
        mut reader: R,
        source: impl Into<PathBuf>,
    ) -> Result<SplitReport, ApplicationError> {
        let source = source.into();
        let mut extractor = ChapterExtractor::new();
        let mut index = ChapterIndex::new();
        let mut skipped = 0;
        let mut buf = String::new();

        loop {
            buf.clear();
            let read = reader
                .read_line(&mut buf)
                .map_err(|e| ApplicationError::read(&source, e))?;
            if read == 0 {
                break;
            }

            for line in universal_lines(&buf) {
                if let Some(draft) = extractor.feed(line) {
                    skipped += self.persist(draft, &mut index)?;
                }
            }
        }

        if let Some(draft) = extractor.finish() {
            skipped += self.persist(draft, &mut index)?;
        }

        self.storage.save_index(&index)?;

        tracing::info!(
            total_chapters = index.total_chapters(),
            skipped = skipped,
            "Novel split complete"
        );

        Ok(SplitReport {
            total_words: index.total_words(),
            chapters: index.chapters().to_vec(),
            skipped,
            output_dir: self.storage.location(),
        })
    }

    /// 定稿并写入一章，返回跳过的章节数（0 或 1）
    fn persist(&self, draft: ChapterDraft, index: &mut ChapterIndex) -> Result<usize, ApplicationError> {
        let id = draft.id();
        let title = draft.title().to_string();

        let Some(chapter) = index.admit(draft) else {
            tracing::debug!(id, title = %title, "Chapter has no content, skipped");
            self.emit(SplitEvent::ChapterSkipped { id, title: &title });
            return Ok(1);
        };

        if chapter.number() != u64::from(chapter.id()) {
            tracing::debug!(
                id = chapter.id(),
                number = chapter.number(),
                "Declared chapter number differs from sequential id"
            );
        }

        let path = self.storage.save_chapter(&chapter)?;
        tracing::debug!(path = %path.display(), "Chapter saved");
        self.emit(SplitEvent::ChapterSaved(&chapter));

        Ok(0)
    }
}
