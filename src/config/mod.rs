/// 基准驱动配置
///
/// 提供TOML/JSON配置文件加载与验证。缺省值复现最初的演示运行：
/// 100 次重复、操作数 (12, 27, 50) 与 (8, 95, 12)、累加增量 (3, 2, 1)。
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 基准驱动主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// 每个样本内的循环次数
    pub repetitions: usize,

    /// 计时样本数
    pub samples: usize,

    /// 几何运算的第一个操作数
    pub operand_a: [f32; 3],

    /// 几何运算的第二个操作数
    pub operand_b: [f32; 3],

    /// 每次循环累加到结果上的向量
    pub increment: [f32; 3],

    /// 日志配置
    pub logging: LoggingConfig,
}

impl_default!(BenchConfig {
    repetitions: 100,
    samples: 10,
    operand_a: [12.0, 27.0, 50.0],
    operand_b: [8.0, 95.0, 12.0],
    increment: [3.0, 2.0, 1.0],
    logging: LoggingConfig::default(),
});

impl BenchConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 按扩展名加载：`.json` 走 JSON，其余按 TOML 解析
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        tracing::debug!(target: "vecmath", path = %path.display(), "loaded benchmark config");
        Ok(config)
    }

    /// 序列化为TOML字符串
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.repetitions == 0 {
            return Err(ConfigError::ValidationError(
                "repetitions must be greater than 0".to_string(),
            ));
        }
        if self.samples == 0 {
            return Err(ConfigError::ValidationError(
                "samples must be greater than 0".to_string(),
            ));
        }

        let operands = [
            ("operand_a", &self.operand_a),
            ("operand_b", &self.operand_b),
            ("increment", &self.increment),
        ];
        for (name, values) in operands {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must contain only finite values, got {:?}",
                    name, values
                )));
            }
        }
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 优先）
    pub level: LogLevel,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// `EnvFilter` 指令字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.repetitions, 100);
        assert_eq!(config.operand_a, [12.0, 27.0, 50.0]);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_toml_serialization() {
        let config = BenchConfig {
            repetitions: 5000,
            ..BenchConfig::default()
        };
        let toml_str = config.to_toml_string().unwrap();
        let parsed = BenchConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_serialization() {
        let config = BenchConfig::default();
        let json_str = serde_json::to_string(&config).unwrap();
        let parsed = BenchConfig::from_json_str(&json_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = BenchConfig::from_toml_str(
            r#"
            samples = 3

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.samples, 3);
        assert_eq!(parsed.repetitions, 100);
        assert_eq!(parsed.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_validation() {
        let zero_samples = BenchConfig {
            samples: 0,
            ..BenchConfig::default()
        };
        assert!(matches!(
            zero_samples.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        let zero_repetitions = BenchConfig {
            repetitions: 0,
            ..BenchConfig::default()
        };
        assert!(zero_repetitions.validate().is_err());

        let infinite = BenchConfig {
            operand_b: [1.0, f32::INFINITY, 0.0],
            ..BenchConfig::default()
        };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            BenchConfig::from_toml_str("samples = \"many\""),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            BenchConfig::from_json_str("{"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"repetitions": 7}}"#).unwrap();
        assert_eq!(BenchConfig::from_file(json.path()).unwrap().repetitions, 7);

        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(toml_file, "repetitions = 9").unwrap();
        assert_eq!(BenchConfig::from_file(toml_file.path()).unwrap().repetitions, 9);

        assert!(matches!(
            BenchConfig::from_file("/definitely/not/here.toml"),
            Err(ConfigError::FileError(_))
        ));
    }
}
