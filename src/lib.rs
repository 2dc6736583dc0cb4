//! # vecmath
//!
//! 面向实时图形与物理代码的小型线性代数内核。
//!
//! ## Features
//!
//! - **Scalar vectors**: `Vector2`/`Vector3`/`Vector4`，逐分量运算、长度、归一化、点积/叉积、插值、反射
//! - **Matrices**: `Matrix2`/`Matrix3`/`Matrix4`，行主序，行列式、伴随、逆、转置、变换构造
//! - **SIMD kernel**: `Packed3`（见 `vecmath_simd`），与 `Vector3` 共享 [`VectorOps`] 契约
//! - **Benchmark driver**: 对比标量与 SIMD 内核的耗时与结果
//!
//! ### Example
//!
//! ```rust
//! use vecmath::math::{Matrix4, Vector3};
//!
//! let sum = Vector3::new(1.0, 2.0, 3.0) + Vector3::new(3.0, 2.0, 1.0);
//! assert_eq!(sum, Vector3::new(4.0, 4.0, 4.0));
//!
//! let m = Matrix4::transform(Vector3::new(1.0, 0.0, 0.0), Vector3::ONE, 0.0, 0.5, 0.0);
//! let back = m.multiply(&m.inverse().unwrap());
//! assert!(back.abs_diff_eq(&Matrix4::identity(), 1e-5));
//! ```
//!
//! ## Modules
//!
//! - [`math`]: 标量向量与矩阵
//! - [`bench`]: 基准驱动
//! - [`config`]: 基准配置
//! - [`error`]: 错误类型
//! - [`logging`]: 日志初始化

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// struct Settings {
///     samples: usize,
///     name: String,
/// }
///
/// vecmath::impl_default!(Settings {
///     samples: 10,
///     name: String::new(),
/// });
///
/// assert_eq!(Settings::default().samples, 10);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

/// Scalar vectors and matrices
pub mod math;
/// Benchmark driver comparing the scalar and SIMD kernels
pub mod bench;
/// Configuration system
pub mod config;
/// Error types
pub mod error;
/// Logging setup
pub mod logging;

pub use error::{MathError, MathResult, VecmathError, VecmathResult};
pub use math::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
pub use vecmath_simd::{Packed3, SimdBackend, VectorOps};
