//! Chapterize - 小说章节拆分工具
//!
//! 读取小说 TXT，按方框标题拆分为 `chapter_NNN.json` 与 `index.json`。
//! 不带参数运行时使用程序目录下的默认路径。

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chapterize::application::{
    ApplicationError, ChapterStoragePort, SplitEvent, SplitNovel, SplitNovelHandler,
};
use chapterize::config::{load_config_from_path, print_config, AppConfig};
use chapterize::infrastructure::{InMemoryChapterStorage, JsonChapterStorage};

#[derive(Parser)]
#[command(
    name = "chapterize",
    about = "Split a novel with boxed chapter headers into per-chapter JSON files"
)]
struct Cli {
    /// Source novel (default: time_traveler_novel.txt next to the binary)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory (default: ../public/chapters relative to the binary)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Explicit config file (default: chapterize.toml in the working directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run extraction without writing any files
    #[arg(long)]
    dry_run: bool,
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    // stdout 留给进度输出
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_progress(event: &SplitEvent<'_>) {
    match event {
        SplitEvent::Started { input } => println!("Чтение {} построчно...\n", input.display()),
        SplitEvent::ChapterSaved(chapter) => println!(
            "✓ Глава {}: {} ({} слов)",
            chapter.id(),
            chapter.title(),
            chapter.word_count()
        ),
        SplitEvent::ChapterSkipped { .. } => {}
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config =
        load_config_from_path(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(input) = cli.input {
        config.paths.input_file = input;
    }
    if let Some(output_dir) = cli.output_dir {
        config.paths.output_dir = output_dir;
    }

    init_logging(&config);
    print_config(&config);

    let storage: Arc<dyn ChapterStoragePort> = if cli.dry_run {
        tracing::info!("Dry run: chapters are kept in memory");
        InMemoryChapterStorage::new().arc()
    } else {
        Arc::new(JsonChapterStorage::new(&config.paths.output_dir))
    };

    let handler = SplitNovelHandler::new(storage).with_progress(print_progress);

    match handler.handle(SplitNovel::new(&config.paths.input_file)) {
        Ok(report) => {
            println!("\n✅ Готово! Разбито на {} глав.", report.total_chapters());
            println!("Всего слов: {}", report.total_words);
            if report.skipped > 0 {
                println!("⚠ Пропущено пустых глав: {}", report.skipped);
            }
            if cli.dry_run {
                println!("Пробный запуск: файлы не записаны.");
            } else {
                println!("📁 Данные сохранены в: {}", report.output_dir.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(ApplicationError::MissingInputFile { path }) => {
            println!("❌ Файл не найден: {}", path.display());
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let dir = path
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            println!("Убедитесь, что {} находится в папке {}/", name, dir);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e).context("Failed to split novel"),
    }
}
