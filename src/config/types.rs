//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认输入文件名（与程序位于同一目录）
pub const DEFAULT_INPUT_FILE_NAME: &str = "time_traveler_novel.txt";

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 路径配置
    #[serde(default)]
    pub paths: PathsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 路径配置
///
/// 默认值相对于程序所在目录:
/// - 输入: `<程序目录>/time_traveler_novel.txt`
/// - 输出: `<程序目录的上级>/public/chapters`
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// 小说 TXT 文件
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// 章节 JSON 输出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// 程序所在目录
///
/// 无法获取可执行文件路径时退回当前目录
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 项目根目录（程序目录的上级）
pub fn project_root() -> PathBuf {
    let dir = program_dir();
    dir.parent().map(Path::to_path_buf).unwrap_or(dir)
}

pub(crate) fn default_input_file() -> PathBuf {
    program_dir().join(DEFAULT_INPUT_FILE_NAME)
}

pub(crate) fn default_output_dir() -> PathBuf {
    project_root().join("public").join("chapters")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_dir: default_output_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（EnvFilter 指令）
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
