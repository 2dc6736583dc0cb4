use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::Vector3;

/// 4D向量，也用作齐次坐标
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector!(Vector4, 4, x, y, z, w);

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn from_vec3(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}
