//! 统一错误处理模块
//!
//! ## 错误类型分层
//!
//! - **数学内核错误** (`MathError`): 来自 `vecmath_simd`，标量与 SIMD 内核共用
//! - **配置错误** (`config::ConfigError`): 读取、解析、验证基准配置
//!
//! `VecmathError` 汇总以上两层，供基准驱动程序使用。

use thiserror::Error;

pub use vecmath_simd::error::{MathError, MathResult};

use crate::config::ConfigError;

/// 顶层错误类型
#[derive(Error, Debug)]
pub enum VecmathError {
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Benchmark error: {0}")]
    Benchmark(String),
}

/// 顶层结果类型
pub type VecmathResult<T> = Result<T, VecmathError>;
