//! 日志初始化
//!
//! 配置tracing日志框架。`RUST_LOG` 环境变量存在时优先使用，
//! 否则使用配置中的日志级别。

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// 根据配置生成过滤器
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

/// 初始化日志系统
///
/// 重复调用是安全的：全局订阅者已存在时直接返回。
pub fn init_logging(config: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .try_init();
    tracing::debug!(target: "vecmath", level = config.level.as_str(), "logging initialized");
}
