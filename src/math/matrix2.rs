use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::Vector2;

/// 2×2 行主序矩阵，元素 (r, c) 位于 `m[r * 2 + c]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix2 {
    pub m: [f32; 4],
}

impl_matrix!(Matrix2, Vector2, 2);

impl Matrix2 {
    pub fn from_rows(row0: Vector2, row1: Vector2) -> Self {
        Self::new([row0.x, row0.y, row1.x, row1.y])
    }

    pub fn determinant(&self) -> f32 {
        self.m[0] * self.m[3] - self.m[1] * self.m[2]
    }

    /// 代数余子式矩阵
    pub fn adjoint(&self) -> Self {
        Self::new([self.m[3], -self.m[2], -self.m[1], self.m[0]])
    }
}
