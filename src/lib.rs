// 核心模块
pub mod core;
pub mod config;
pub mod events;
pub mod form;
pub mod handlers;

#[cfg(feature = "gui")]
pub mod gui;

// 重新导出主要类型
pub use config::{AppConfig, ConfigError, ConfigManager, FormConfig, GuiConfig, LoggingConfig};
pub use events::{Event, FormEvent, FormEventDispatcher};
pub use form::{Attendance, ErrorMap, FieldId, FormValues, GuestForm, Snapshot, SubmitError};

/// 库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 初始化日志系统 - 写入日志文件以免干扰界面
///
/// 级别取自配置，设置了 RUST_LOG 时以环境变量为准。
/// 日志文件无法打开时退回到标准错误输出。
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    use std::fs::OpenOptions;

    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.level_filter()?);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if !config.file.is_empty() {
        match OpenOptions::new().create(true).append(true).open(&config.file) {
            Ok(log_file) => {
                builder.target(env_logger::Target::Pipe(Box::new(log_file)));
            }
            Err(e) => {
                eprintln!("无法打开日志文件 {}: {}，改为输出到stderr", config.file, e);
            }
        }
    }

    builder
        .try_init()
        .map_err(|e| ConfigError::Invalid(format!("日志系统已初始化: {}", e)))
}
