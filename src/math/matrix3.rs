use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::{Matrix2, Vector2, Vector3};
use crate::error::{MathError, MathResult};

/// 3×3 行主序矩阵，同时用作 2D 仿射变换
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix3 {
    pub m: [f32; 9],
}

impl_matrix!(Matrix3, Vector3, 3);

impl Matrix3 {
    pub fn from_rows(row0: Vector3, row1: Vector3, row2: Vector3) -> Self {
        Self::new([
            row0.x, row0.y, row0.z, //
            row1.x, row1.y, row1.z, //
            row2.x, row2.y, row2.z,
        ])
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// 删除第 `row` 行和第 `column` 列后的 2×2 子矩阵
    pub(crate) fn minor(&self, row: usize, column: usize) -> Matrix2 {
        let mut result = Matrix2::zero();
        let mut index = 0;
        for r in (0..3).filter(|&r| r != row) {
            for c in (0..3).filter(|&c| c != column) {
                result.m[index] = self.m[r * 3 + c];
                index += 1;
            }
        }
        result
    }

    /// 代数余子式矩阵（棋盘符号）
    pub fn adjoint(&self) -> Self {
        let mut result = Self::zero();
        for r in 0..3 {
            for c in 0..3 {
                let sign = if (r + c) % 2 == 0 { 1.0 } else { -1.0 };
                result.m[r * 3 + c] = sign * self.minor(r, c).determinant();
            }
        }
        result
    }

    /// 平移矩阵，写入 `m[2]`、`m[5]`
    pub fn translate(x: f32, y: f32) -> Self {
        let mut result = Self::identity();
        result.m[2] = x;
        result.m[5] = y;
        result
    }

    pub fn translate_vec(distance: Vector2) -> Self {
        Self::translate(distance.x, distance.y)
    }

    /// 缩放矩阵，写入 `m[0]`、`m[4]`
    pub fn scale(x: f32, y: f32) -> Self {
        let mut result = Self::identity();
        result.m[0] = x;
        result.m[4] = y;
        result
    }

    pub fn scale_vec(scale: Vector2) -> Self {
        Self::scale(scale.x, scale.y)
    }

    /// 绕原点逆时针旋转 `radians` 弧度
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::identity();
        result.m[0] = cos;
        result.m[1] = -sin;
        result.m[3] = sin;
        result.m[4] = cos;
        result
    }

    /// `M · v`
    pub fn transform_vec3(&self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[3] * v.x + m[4] * v.y + m[5] * v.z,
            m[6] * v.x + m[7] * v.y + m[8] * v.z,
        )
    }

    /// 以 w = 1 齐次化后变换，再除以结果的 w
    pub fn transform_point(&self, point: Vector2) -> MathResult<Vector2> {
        let h = self.transform_vec3(Vector3::new(point.x, point.y, 1.0));
        if h.z == 0.0 {
            return Err(MathError::divide_by_zero("perspective divide"));
        }
        Ok(Vector2::new(h.x / h.z, h.y / h.z))
    }
}
