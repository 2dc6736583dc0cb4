use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::Vector4;
use crate::error::MathResult;

/// 3D向量（标量内核）
///
/// 归约运算（`dot`、`magnitude` 等）按 x + y + z 的顺序求和，
/// 与 SIMD 内核 `Packed3` 的结果逐位一致。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_vector!(Vector3, 3, x, y, z);

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// 追加 w 分量
    #[inline]
    pub fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl vecmath_simd::VectorOps for Vector3 {
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Vector3::new(x, y, z)
    }

    fn to_array(self) -> [f32; 3] {
        Vector3::to_array(self)
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    fn dot(self, other: Self) -> f32 {
        Vector3::dot(self, other)
    }

    fn magnitude(self) -> f32 {
        Vector3::magnitude(self)
    }

    fn sqr_magnitude(self) -> f32 {
        Vector3::sqr_magnitude(self)
    }

    fn distance(self, other: Self) -> f32 {
        Vector3::distance(self, other)
    }

    fn angle(self, other: Self) -> MathResult<f32> {
        Vector3::angle(self, other)
    }

    fn normalize(self) -> MathResult<Self> {
        self.normalized()
    }

    fn reflect(self, normal: Self) -> Self {
        Vector3::reflect(self, normal)
    }

    fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        Vector3::lerp_unclamped(self, other, t)
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        Vector3::lerp(self, other, t)
    }

    fn min(self, other: Self) -> Self {
        Vector3::min(self, other)
    }

    fn max(self, other: Self) -> Self {
        Vector3::max(self, other)
    }

    fn abs(self) -> Self {
        Vector3::abs(self)
    }

    fn clamp(self, lo: Self, hi: Self) -> Self {
        Vector3::clamp(self, lo, hi)
    }
}
