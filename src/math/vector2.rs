use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D向量
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl_vector!(Vector2, 2, x, y);

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 5.0);

        assert_eq!(a + b, Vector2::new(4.0, 7.0));
        assert_eq!(b - a, Vector2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a.add_scalar(1.0), Vector2::new(2.0, 3.0));
        assert_eq!(a.sub_scalar(1.0), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_checked_div() {
        let v = Vector2::new(4.0, 8.0);
        assert_eq!(v.checked_div(4.0), Ok(Vector2::new(1.0, 2.0)));
        assert_eq!(
            v.checked_div(0.0),
            Err(MathError::divide_by_zero("vector division"))
        );
    }

    #[test]
    fn test_normalize_in_place() {
        let mut v = Vector2::new(3.0, 4.0);
        v.normalize().unwrap();
        assert!(v.abs_diff_eq(Vector2::new(0.6, 0.8), 1e-6));

        let mut zero = Vector2::ZERO;
        assert!(zero.normalize().is_err());
        assert_eq!(zero, Vector2::ZERO);
    }

    #[test]
    fn test_angle_and_constants() {
        let angle = Vector2::RIGHT.angle(Vector2::UP).unwrap();
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(Vector2::UP + Vector2::DOWN, Vector2::ZERO);
        assert_eq!(Vector2::LEFT + Vector2::RIGHT, Vector2::ZERO);
        assert!(Vector2::ZERO.angle(Vector2::UP).is_err());
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Vector2::from_slice(&[1.0, 2.0, 3.0]), Ok(Vector2::new(1.0, 2.0)));
        assert_eq!(
            Vector2::from_slice(&[1.0]),
            Err(MathError::IndexOutOfBounds { index: 1, len: 2 })
        );
    }
}
