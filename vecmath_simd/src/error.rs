/// 数学内核错误处理
///
/// 标量内核与SIMD内核共用的错误类型。所有错误都是局部、可恢复的，
/// 由调用者决定如何处理（跳过当前帧、复用上一帧的变换等）。

use thiserror::Error;

/// 数学内核错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// 除数为零（标量除法、零向量归一化、齐次坐标 w = 0）
    #[error("Division by zero in {operation}")]
    DivideByZero {
        operation: &'static str,
    },

    /// 行列式为零，矩阵不可逆
    #[error("Matrix is not invertible (determinant = {determinant})")]
    NonInvertible {
        determinant: f32,
    },

    /// 输入含 inf/NaN，或结果超出 f32 表示范围
    #[error("Non-finite value in {operation}")]
    NonFinite {
        operation: &'static str,
    },

    /// 行/列/分量索引越界
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
}

/// 数学内核结果类型
pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// 构造除零错误
    pub fn divide_by_zero(operation: &'static str) -> Self {
        Self::DivideByZero { operation }
    }

    /// 构造非有限值错误
    pub fn non_finite(operation: &'static str) -> Self {
        Self::NonFinite { operation }
    }

    /// 检查索引是否在 `[0, len)` 内
    pub fn check_index(index: usize, len: usize) -> MathResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, len })
        }
    }

    /// 检查切片长度至少为 `required`，否则报告第一个缺失的下标和所需长度
    pub fn check_len(slice_len: usize, required: usize) -> MathResult<()> {
        if slice_len >= required {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds {
                index: slice_len,
                len: required,
            })
        }
    }
}
