//! 与 glam 类型的互相转换
//!
//! glam 矩阵为列主序，这里的矩阵为行主序，转换时做一次转置。

use super::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Matrix2> for glam::Mat2 {
    fn from(m: Matrix2) -> Self {
        glam::Mat2::from_cols_array(&m.transpose().m)
    }
}

impl From<glam::Mat2> for Matrix2 {
    fn from(m: glam::Mat2) -> Self {
        Matrix2::new(m.transpose().to_cols_array())
    }
}

impl From<Matrix3> for glam::Mat3 {
    fn from(m: Matrix3) -> Self {
        glam::Mat3::from_cols_array(&m.transpose().m)
    }
}

impl From<glam::Mat3> for Matrix3 {
    fn from(m: glam::Mat3) -> Self {
        Matrix3::new(m.transpose().to_cols_array())
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array(&m.transpose().m)
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Matrix4::new(m.transpose().to_cols_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_to_glam() {
        let m = Matrix4::translate(1.0, 2.0, 3.0);
        let g: glam::Mat4 = m.into();
        assert_eq!(g.w_axis, glam::Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Matrix4::from(g), m);
    }

    #[test]
    fn test_vector_roundtrip() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vector3::from(g), v);
    }
}
