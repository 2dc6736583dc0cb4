//! SIMD 3 维向量内核
//!
//! `Packed3` 在编译期绑定到一个通道后端：
//! - x86_64: SSE2 (`x86`)
//! - aarch64: NEON (`arm`)
//! - 其他平台或启用 `scalar-fallback`: `[f32; 4]` (`scalar`)

#[cfg(all(target_arch = "x86_64", not(feature = "scalar-fallback")))]
pub mod x86;

#[cfg(all(target_arch = "aarch64", not(feature = "scalar-fallback")))]
pub mod arm;

pub mod scalar;
mod packed;

#[cfg(all(target_arch = "x86_64", not(feature = "scalar-fallback")))]
use self::x86 as lanes;

#[cfg(all(target_arch = "aarch64", not(feature = "scalar-fallback")))]
use self::arm as lanes;

#[cfg(any(
    feature = "scalar-fallback",
    not(any(target_arch = "x86_64", target_arch = "aarch64"))
))]
use self::scalar as lanes;

pub use packed::{
    abs, add, angle, clamp, distance, dot, lerp, lerp_unclamped, magnitude, max, min, mul, neg,
    normalize, reflect, scale, sqr_magnitude, sub, sum, Packed3,
};

use crate::error::MathResult;

/// 3 维向量运算 trait
///
/// 标量 `Vector3` 与 SIMD `Packed3` 共同实现的能力接口，
/// 两种实现必须对同一组输入给出等价结果。
pub trait VectorOps: Copy {
    fn from_xyz(x: f32, y: f32, z: f32) -> Self;
    fn to_array(self) -> [f32; 3];

    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn scale(self, factor: f32) -> Self;

    fn dot(self, other: Self) -> f32;
    fn magnitude(self) -> f32;
    fn sqr_magnitude(self) -> f32;
    fn distance(self, other: Self) -> f32;
    /// 两向量夹角（弧度）；任一向量长度为 0 时返回 `DivideByZero`，含 inf/NaN 时返回 `NonFinite`
    fn angle(self, other: Self) -> MathResult<f32>;

    /// 单位长度副本；零向量返回 `DivideByZero`，含 inf/NaN 时返回 `NonFinite`
    fn normalize(self) -> MathResult<Self>;
    /// `normal` 需由调用者预先归一化
    fn reflect(self, normal: Self) -> Self;
    fn lerp_unclamped(self, other: Self, t: f32) -> Self;

    fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, t.clamp(0.0, 1.0))
    }

    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn abs(self) -> Self;

    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

impl VectorOps for Packed3 {
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Packed3::new(x, y, z)
    }

    fn to_array(self) -> [f32; 3] {
        Packed3::to_array(self)
    }

    fn add(self, other: Self) -> Self {
        add(self, other)
    }

    fn sub(self, other: Self) -> Self {
        sub(self, other)
    }

    fn scale(self, factor: f32) -> Self {
        scale(self, factor)
    }

    fn dot(self, other: Self) -> f32 {
        dot(self, other)
    }

    fn magnitude(self) -> f32 {
        magnitude(self)
    }

    fn sqr_magnitude(self) -> f32 {
        sqr_magnitude(self)
    }

    fn distance(self, other: Self) -> f32 {
        distance(self, other)
    }

    fn angle(self, other: Self) -> MathResult<f32> {
        angle(self, other)
    }

    fn normalize(self) -> MathResult<Self> {
        normalize(self)
    }

    fn reflect(self, normal: Self) -> Self {
        reflect(self, normal)
    }

    fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        lerp_unclamped(self, other, t)
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        lerp(self, other, t)
    }

    fn min(self, other: Self) -> Self {
        min(self, other)
    }

    fn max(self, other: Self) -> Self {
        max(self, other)
    }

    fn abs(self) -> Self {
        abs(self)
    }

    fn clamp(self, lo: Self, hi: Self) -> Self {
        clamp(self, lo, hi)
    }
}
