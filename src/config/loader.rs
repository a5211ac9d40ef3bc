//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 命令行参数（在 main 中覆盖）
//! 2. 环境变量
//! 3. 配置文件（chapterize.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use super::types::{default_input_file, default_output_dir, AppConfig};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["chapterize", "chapterize.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `CHAPTERIZE_PATHS__INPUT_FILE=/data/novel.txt`
/// - `CHAPTERIZE_PATHS__OUTPUT_DIR=/srv/reader/public/chapters`
/// - `CHAPTERIZE_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default(
            "paths.input_file",
            default_input_file().to_string_lossy().into_owned(),
        )?
        .set_default(
            "paths.output_dir",
            default_output_dir().to_string_lossy().into_owned(),
        )?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: CHAPTERIZE_
    // 层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("CHAPTERIZE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.paths.input_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Input file path cannot be empty".to_string(),
        ));
    }

    if config.paths.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output directory cannot be empty".to_string(),
        ));
    }

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    EnvFilter::try_new(&config.log.level).map_err(|e| {
        ConfigError::ValidationError(format!("Invalid log level '{}': {}", config.log.level, e))
    })?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Configuration ===");
    tracing::debug!("Input File: {}", config.paths.input_file.display());
    tracing::debug!("Output Directory: {}", config.paths.output_dir.display());
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("Log JSON: {}", config.log.json);
    tracing::debug!("=====================");
}
