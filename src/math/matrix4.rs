use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::{Matrix3, Vector3, Vector4};
use crate::error::{MathError, MathResult};

/// 4×4 行主序矩阵，用作 3D 仿射变换
///
/// 平移位于最后一列（`m[3]`、`m[7]`、`m[11]`），向量按列向量右乘：`M · v`。
///
/// ```rust
/// use vecmath::math::{Matrix4, Vector3};
///
/// let m = Matrix4::transform(Vector3::new(1.0, 2.0, 3.0), Vector3::ONE, 0.0, 0.0, 0.0);
/// assert_eq!(m.transform_vec3(Vector3::ZERO).unwrap(), Vector3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4 {
    pub m: [f32; 16],
}

impl_matrix!(Matrix4, Vector4, 4);

impl Matrix4 {
    pub fn from_rows(row0: Vector4, row1: Vector4, row2: Vector4, row3: Vector4) -> Self {
        let mut m = [0.0; 16];
        for (i, row) in [row0, row1, row2, row3].into_iter().enumerate() {
            m[i * 4..i * 4 + 4].copy_from_slice(&row.to_array());
        }
        Self::new(m)
    }

    /// 按第一行展开，使用 3×3 子式
    pub fn determinant(&self) -> f32 {
        let mut determinant = 0.0;
        for c in 0..4 {
            let sign = if c % 2 == 0 { 1.0 } else { -1.0 };
            determinant += sign * self.m[c] * self.minor(0, c).determinant();
        }
        determinant
    }

    fn minor(&self, row: usize, column: usize) -> Matrix3 {
        let mut result = Matrix3::zero();
        let mut index = 0;
        for r in (0..4).filter(|&r| r != row) {
            for c in (0..4).filter(|&c| c != column) {
                result.m[index] = self.m[r * 4 + c];
                index += 1;
            }
        }
        result
    }

    /// 代数余子式矩阵（棋盘符号）
    pub fn adjoint(&self) -> Self {
        let mut result = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                let sign = if (r + c) % 2 == 0 { 1.0 } else { -1.0 };
                result.m[r * 4 + c] = sign * self.minor(r, c).determinant();
            }
        }
        result
    }

    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        let mut result = Self::identity();
        result.m[3] = x;
        result.m[7] = y;
        result.m[11] = z;
        result
    }

    pub fn translate_vec(distance: Vector3) -> Self {
        Self::translate(distance.x, distance.y, distance.z)
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut result = Self::identity();
        result.m[0] = x;
        result.m[5] = y;
        result.m[10] = z;
        result
    }

    pub fn scale_vec(scale: Vector3) -> Self {
        Self::scale(scale.x, scale.y, scale.z)
    }

    pub fn rotate_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::identity();
        result.m[5] = cos;
        result.m[6] = -sin;
        result.m[9] = sin;
        result.m[10] = cos;
        result
    }

    pub fn rotate_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::identity();
        result.m[0] = cos;
        result.m[2] = sin;
        result.m[8] = -sin;
        result.m[10] = cos;
        result
    }

    pub fn rotate_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::identity();
        result.m[0] = cos;
        result.m[1] = -sin;
        result.m[4] = sin;
        result.m[5] = cos;
        result
    }

    /// 组合变换 `Translate · (RotateX · (RotateY · RotateZ)) · Scale`
    ///
    /// 乘法顺序固定，调用方依赖它叠加变换。
    pub fn transform(
        translation: Vector3,
        scale: Vector3,
        rotate_x: f32,
        rotate_y: f32,
        rotate_z: f32,
    ) -> Self {
        let rotation = Self::rotate_x(rotate_x)
            .multiply(&Self::rotate_y(rotate_y).multiply(&Self::rotate_z(rotate_z)));
        Self::translate_vec(translation).multiply(&rotation.multiply(&Self::scale_vec(scale)))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn transform_components(
        translate_x: f32,
        translate_y: f32,
        translate_z: f32,
        scale_x: f32,
        scale_y: f32,
        scale_z: f32,
        rotate_x: f32,
        rotate_y: f32,
        rotate_z: f32,
    ) -> Self {
        Self::transform(
            Vector3::new(translate_x, translate_y, translate_z),
            Vector3::new(scale_x, scale_y, scale_z),
            rotate_x,
            rotate_y,
            rotate_z,
        )
    }

    /// `M · v`
    pub fn transform_vec4(&self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        )
    }

    /// 以 w = 1 齐次化后变换，再做透视除法
    ///
    /// 结果 w 为 0 时返回 `DivideByZero`。
    pub fn transform_vec3(&self, v: Vector3) -> MathResult<Vector3> {
        let h = self.transform_vec4(v.extend(1.0));
        if h.w == 0.0 {
            return Err(MathError::divide_by_zero("perspective divide"));
        }
        Ok(Vector3::new(h.x / h.w, h.y / h.w, h.z / h.w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity_multiply() {
        let identity = Matrix4::identity();
        assert_eq!(identity.multiply(&identity), identity);
        assert_eq!(identity.determinant(), 1.0);
    }

    #[test]
    fn test_determinant_first_row_expansion() {
        let m = Matrix4::new([
            1.0, 0.0, 2.0, -1.0, //
            3.0, 0.0, 0.0, 5.0, //
            2.0, 1.0, 4.0, -3.0, //
            1.0, 0.0, 5.0, 0.0,
        ]);
        assert_eq!(m.determinant(), 30.0);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = Matrix4::transform_components(1.0, -2.0, 3.0, 2.0, 2.0, 0.5, 0.3, -0.7, 1.1);
        let inverse = m.inverse().unwrap();
        assert!(m.multiply(&inverse).abs_diff_eq(&Matrix4::identity(), EPSILON));
        assert!(inverse.multiply(&m).abs_diff_eq(&Matrix4::identity(), EPSILON));
    }

    #[test]
    fn test_singular() {
        let mut m = Matrix4::scale(1.0, 0.0, 1.0);
        let before = m;
        assert!(matches!(m.invert(), Err(MathError::NonInvertible { .. })));
        assert_eq!(m, before);
    }

    #[test]
    fn test_inverse_with_overflowing_determinant() {
        // 缩放 1e13 时 det ≈ 1e39，超出 f32 范围
        let m = Matrix4::transform_components(5.0, -3.0, 2.0, 1e13, 1e13, 1e13, 0.3, -0.7, 1.1);
        assert!(!m.determinant().is_finite());
        let inverse = m.inverse().unwrap();
        assert!(inverse.is_finite());
        assert!(m.multiply(&inverse).abs_diff_eq(&Matrix4::identity(), 1e-4));

        let mut huge = Matrix4::splat(1e30);
        assert!(matches!(huge.invert(), Err(MathError::NonInvertible { .. })));
        assert_eq!(huge, Matrix4::splat(1e30));
    }

    #[test]
    fn test_rotations_are_right_handed() {
        let y = Matrix4::rotate_x(FRAC_PI_2).transform_vec3(Vector3::UP).unwrap();
        assert!(y.abs_diff_eq(Vector3::FORWARD, EPSILON));

        let z = Matrix4::rotate_y(FRAC_PI_2).transform_vec3(Vector3::FORWARD).unwrap();
        assert!(z.abs_diff_eq(Vector3::RIGHT, EPSILON));

        let x = Matrix4::rotate_z(FRAC_PI_2).transform_vec3(Vector3::RIGHT).unwrap();
        assert!(x.abs_diff_eq(Vector3::UP, EPSILON));
    }

    #[test]
    fn test_transform_order() {
        // 先缩放，再旋转，最后平移
        let m = Matrix4::transform(
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(2.0, 2.0, 2.0),
            0.0,
            0.0,
            FRAC_PI_2,
        );
        let p = m.transform_vec3(Vector3::RIGHT).unwrap();
        assert!(p.abs_diff_eq(Vector3::new(10.0, 2.0, 0.0), EPSILON));

        let expected = Matrix4::translate(10.0, 0.0, 0.0).multiply(
            &Matrix4::rotate_z(FRAC_PI_2).multiply(&Matrix4::scale(2.0, 2.0, 2.0)),
        );
        assert!(m.abs_diff_eq(&expected, EPSILON));
    }

    #[test]
    fn test_transform_vec3_zero_w() {
        let mut m = Matrix4::identity();
        m.m[15] = 0.0;
        assert_eq!(
            m.transform_vec3(Vector3::ONE),
            Err(MathError::divide_by_zero("perspective divide"))
        );
    }

    #[test]
    fn test_perspective_divide() {
        let mut m = Matrix4::identity();
        m.m[15] = 2.0;
        let p = m.transform_vec3(Vector3::new(2.0, 4.0, 6.0)).unwrap();
        assert_eq!(p, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rows_and_columns() {
        let m = Matrix4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(9.0, 10.0, 11.0, 12.0),
            Vector4::new(13.0, 14.0, 15.0, 16.0),
        );
        assert_eq!(m.row(2), Ok(Vector4::new(9.0, 10.0, 11.0, 12.0)));
        assert_eq!(m.column(3), Ok(Vector4::new(4.0, 8.0, 12.0, 16.0)));
        assert_eq!(m.get(3, 0), Ok(13.0));
        assert!(m.column(4).is_err());
        assert_eq!(m.transpose().column(0), m.row(0));
    }
}
