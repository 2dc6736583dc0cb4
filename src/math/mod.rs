//! 标量数学内核
//!
//! 2/3/4 维向量与 2×2/3×3/4×4 行主序矩阵。所有类型都是定长、可复制的值类型，
//! 不做堆分配。矩阵乘积只通过 `multiply` 提供，`*` 运算符仅表示标量缩放。
//!
//! SIMD 版本的 3 维向量见 `vecmath_simd::Packed3`；两者通过
//! [`VectorOps`](vecmath_simd::VectorOps) 共享同一组运算契约。

#[macro_use]
mod macros;

mod interop;
pub mod matrix2;
pub mod matrix3;
pub mod matrix4;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
