//! 打包 3 维向量及其自由函数
//!
//! 运算以"按值传入、按值返回"的自由函数形式提供，便于编译器保持寄存器驻留。
//! 归约运算（点积、长度）按 x + y + z 的顺序求和，与标量 `Vector3` 逐位一致。

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::lanes::{self, Lanes};
use crate::error::{MathError, MathResult};
use crate::SimdBackend;

/// 由一个 4 通道寄存器承载的 3 维向量，第 4 通道恒为 0
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Packed3(Lanes);

impl Packed3 {
    #[inline(always)]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(lanes::load(x, y, z))
    }

    /// 三个分量均为 `value`，第 4 通道仍为 0
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self(lanes::zero())
    }

    #[inline(always)]
    pub fn from_array(values: [f32; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }

    /// 从切片前 3 个元素构造
    pub fn from_slice(values: &[f32]) -> MathResult<Self> {
        MathError::check_len(values.len(), 3)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }

    #[inline(always)]
    pub fn x(self) -> f32 {
        lanes::x(self.0)
    }

    #[inline(always)]
    pub fn y(self) -> f32 {
        lanes::y(self.0)
    }

    #[inline(always)]
    pub fn z(self) -> f32 {
        lanes::z(self.0)
    }

    pub fn set_x(&mut self, x: f32) {
        self.0 = lanes::with_lane(self.0, 0, x);
    }

    pub fn set_y(&mut self, y: f32) {
        self.0 = lanes::with_lane(self.0, 1, y);
    }

    pub fn set_z(&mut self, z: f32) {
        self.0 = lanes::with_lane(self.0, 2, z);
    }

    /// 按下标读取分量
    pub fn get(self, index: usize) -> MathResult<f32> {
        MathError::check_index(index, 3)?;
        Ok(lanes::store(self.0)[index])
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 3] {
        let [x, y, z, _] = lanes::store(self.0);
        [x, y, z]
    }

    /// 包含第 4 通道的原始通道值
    pub fn lanes(self) -> [f32; 4] {
        lanes::store(self.0)
    }

    /// 本内核编译时绑定的后端
    pub const fn backend() -> SimdBackend {
        #[cfg(all(target_arch = "x86_64", not(feature = "scalar-fallback")))]
        return SimdBackend::Sse2;

        #[cfg(all(target_arch = "aarch64", not(feature = "scalar-fallback")))]
        return SimdBackend::Neon;

        #[cfg(any(
            feature = "scalar-fallback",
            not(any(target_arch = "x86_64", target_arch = "aarch64"))
        ))]
        return SimdBackend::Scalar;
    }
}

impl Default for Packed3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Packed3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packed3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

/// 逐分量精确比较，不含容差
impl PartialEq for Packed3 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl From<[f32; 3]> for Packed3 {
    fn from(values: [f32; 3]) -> Self {
        Self::from_array(values)
    }
}

impl From<Packed3> for [f32; 3] {
    fn from(v: Packed3) -> Self {
        v.to_array()
    }
}

#[inline(always)]
pub fn add(a: Packed3, b: Packed3) -> Packed3 {
    Packed3(lanes::add(a.0, b.0))
}

#[inline(always)]
pub fn sub(a: Packed3, b: Packed3) -> Packed3 {
    Packed3(lanes::sub(a.0, b.0))
}

/// 逐分量乘积
#[inline(always)]
pub fn mul(a: Packed3, b: Packed3) -> Packed3 {
    Packed3(lanes::mul(a.0, b.0))
}

/// 标量缩放；因子只广播到前 3 个通道
#[inline(always)]
pub fn scale(a: Packed3, factor: f32) -> Packed3 {
    mul(a, Packed3::splat(factor))
}

#[inline(always)]
pub fn neg(a: Packed3) -> Packed3 {
    sub(Packed3::zero(), a)
}

#[inline(always)]
pub fn abs(a: Packed3) -> Packed3 {
    Packed3(lanes::abs(a.0))
}

#[inline(always)]
pub fn min(a: Packed3, b: Packed3) -> Packed3 {
    Packed3(lanes::min(a.0, b.0))
}

#[inline(always)]
pub fn max(a: Packed3, b: Packed3) -> Packed3 {
    Packed3(lanes::max(a.0, b.0))
}

#[inline(always)]
pub fn clamp(t: Packed3, lo: Packed3, hi: Packed3) -> Packed3 {
    min(max(t, lo), hi)
}

/// 水平求和 x + y + z
#[inline(always)]
pub fn sum(v: Packed3) -> f32 {
    v.x() + v.y() + v.z()
}

#[inline(always)]
pub fn dot(a: Packed3, b: Packed3) -> f32 {
    sum(mul(a, b))
}

#[inline(always)]
pub fn sqr_magnitude(a: Packed3) -> f32 {
    dot(a, a)
}

#[inline(always)]
pub fn magnitude(a: Packed3) -> f32 {
    dot(a, a).sqrt()
}

#[inline(always)]
pub fn distance(a: Packed3, b: Packed3) -> f32 {
    magnitude(sub(a, b))
}

/// 夹角（弧度），余弦值截断到 [-1, 1]
pub fn angle(a: Packed3, b: Packed3) -> MathResult<f32> {
    let denominator = magnitude(a) * magnitude(b);
    let product = dot(a, b);
    if product.is_finite() && denominator.is_finite() && denominator >= f32::MIN_POSITIVE {
        return Ok((product / denominator).clamp(-1.0, 1.0).acos());
    }
    let a = unit_by_largest(a, "angle")?;
    let b = unit_by_largest(b, "angle")?;
    Ok(dot(a, b).clamp(-1.0, 1.0).acos())
}

pub fn normalize(a: Packed3) -> MathResult<Packed3> {
    let sqr = sqr_magnitude(a);
    if sqr.is_finite() && sqr >= f32::MIN_POSITIVE {
        return Ok(scale(a, 1.0 / sqr.sqrt()));
    }
    unit_by_largest(a, "normalize")
}

/// 平方和上溢或下溢时，先除以绝对值最大的分量再归一化（冷路径）
fn unit_by_largest(a: Packed3, operation: &'static str) -> MathResult<Packed3> {
    let [x, y, z] = a.to_array();
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(MathError::non_finite(operation));
    }
    let largest = 0.0f32.max(x.abs()).max(y.abs()).max(z.abs());
    if largest == 0.0 {
        return Err(MathError::divide_by_zero(operation));
    }
    let reduced = Packed3::new(x / largest, y / largest, z / largest);
    Ok(scale(reduced, 1.0 / magnitude(reduced)))
}

#[inline(always)]
pub fn lerp_unclamped(a: Packed3, b: Packed3, t: f32) -> Packed3 {
    add(a, scale(sub(b, a), t))
}

#[inline(always)]
pub fn lerp(a: Packed3, b: Packed3, t: f32) -> Packed3 {
    lerp_unclamped(a, b, t.clamp(0.0, 1.0))
}

#[inline(always)]
pub fn reflect(direction: Packed3, normal: Packed3) -> Packed3 {
    sub(direction, scale(normal, dot(direction, normal) * 2.0))
}

impl Add for Packed3 {
    type Output = Packed3;

    #[inline(always)]
    fn add(self, rhs: Packed3) -> Packed3 {
        add(self, rhs)
    }
}

impl AddAssign for Packed3 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Packed3) {
        *self = add(*self, rhs);
    }
}

impl Sub for Packed3 {
    type Output = Packed3;

    #[inline(always)]
    fn sub(self, rhs: Packed3) -> Packed3 {
        sub(self, rhs)
    }
}

impl SubAssign for Packed3 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Packed3) {
        *self = sub(*self, rhs);
    }
}

impl Mul<f32> for Packed3 {
    type Output = Packed3;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Packed3 {
        scale(self, rhs)
    }
}

impl Mul<Packed3> for f32 {
    type Output = Packed3;

    #[inline(always)]
    fn mul(self, rhs: Packed3) -> Packed3 {
        scale(rhs, self)
    }
}

impl Neg for Packed3 {
    type Output = Packed3;

    #[inline(always)]
    fn neg(self) -> Packed3 {
        neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-5;

    fn assert_close(actual: Packed3, expected: [f32; 3]) {
        for (a, e) in actual.to_array().iter().zip(expected.iter()) {
            assert!((a - e).abs() < EPSILON, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_construction_and_accessors() {
        let mut v = Packed3::new(1.0, 2.0, 3.0);
        assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
        assert_eq!(v.lanes()[3], 0.0);

        v.set_x(4.0);
        v.set_y(5.0);
        v.set_z(6.0);
        assert_eq!(v.to_array(), [4.0, 5.0, 6.0]);
        assert_eq!(v.lanes()[3], 0.0);

        assert_eq!(Packed3::splat(2.0).lanes(), [2.0, 2.0, 2.0, 0.0]);
        assert_eq!(Packed3::default(), Packed3::zero());
    }

    #[test]
    fn test_from_slice_and_get() {
        let v = Packed3::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert!(Packed3::from_slice(&[1.0, 2.0]).is_err());

        assert_eq!(v.get(2), Ok(3.0));
        assert_eq!(
            v.get(3),
            Err(MathError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Packed3::new(1.0, 2.0, 3.0);
        let b = Packed3::new(3.0, 2.0, 1.0);

        assert_eq!((a + b).to_array(), [4.0, 4.0, 4.0]);
        assert_eq!((a - b).to_array(), [-2.0, 0.0, 2.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0]);
        assert_eq!((2.0 * a).to_array(), [2.0, 4.0, 6.0]);
        assert_eq!(mul(a, b).to_array(), [3.0, 4.0, 3.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0]);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_fourth_lane_stays_zero() {
        let a = Packed3::new(1.0, -2.0, 3.0);
        let b = Packed3::new(-4.0, 5.0, 6.0);

        for v in [
            a + b,
            a - b,
            a * f32::INFINITY,
            -a,
            abs(a),
            min(a, b),
            max(a, b),
            reflect(a, b),
            lerp_unclamped(a, b, 3.0),
        ] {
            assert_eq!(v.lanes()[3], 0.0);
        }
    }

    #[test]
    fn test_min_max_clamp_abs() {
        let a = Packed3::new(1.0, 5.0, -3.0);
        let b = Packed3::new(2.0, 4.0, -4.0);

        assert_eq!(min(a, b).to_array(), [1.0, 4.0, -4.0]);
        assert_eq!(max(a, b).to_array(), [2.0, 5.0, -3.0]);
        assert_eq!(abs(b).to_array(), [2.0, 4.0, 4.0]);

        let clamped = clamp(Packed3::new(-1.0, 0.5, 2.0), Packed3::zero(), Packed3::splat(1.0));
        assert_eq!(clamped.to_array(), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_reductions() {
        let a = Packed3::new(12.0, 27.0, 50.0);
        let b = Packed3::new(8.0, 95.0, 12.0);

        assert_eq!(sum(a), 89.0);
        assert_eq!(dot(a, b), 3261.0);
        assert_eq!(sqr_magnitude(a), 3373.0);
        assert_eq!(magnitude(a), 3373.0f32.sqrt());
        assert_eq!(distance(a, b), (16.0f32 + 4624.0 + 1444.0).sqrt());
    }

    #[test]
    fn test_angle() {
        let x = Packed3::new(1.0, 0.0, 0.0);
        let y = Packed3::new(0.0, 1.0, 0.0);
        let angle_xy = angle(x, y).unwrap();
        assert!((angle_xy - std::f32::consts::FRAC_PI_2).abs() < EPSILON);

        // 平行向量的余弦可能因舍入略大于 1
        let v = Packed3::new(12.0, 27.0, 50.0);
        let parallel = angle(v, v * 3.0).unwrap();
        assert!(!parallel.is_nan());
        assert!(parallel.abs() < 1e-3);

        assert_eq!(
            angle(Packed3::zero(), x),
            Err(MathError::divide_by_zero("angle"))
        );
    }

    #[test]
    fn test_normalize() {
        let v = normalize(Packed3::new(3.0, 0.0, 4.0)).unwrap();
        assert_close(v, [0.6, 0.0, 0.8]);
        assert!((magnitude(v) - 1.0).abs() < EPSILON);

        assert_eq!(
            normalize(Packed3::zero()),
            Err(MathError::divide_by_zero("normalize"))
        );
    }

    #[test]
    fn test_normalize_outside_squared_range() {
        // 平方和上溢为 inf
        let huge = normalize(Packed3::new(1e20, 0.0, 0.0)).unwrap();
        assert_eq!(huge.to_array(), [1.0, 0.0, 0.0]);

        let diagonal = normalize(Packed3::new(3e30, 0.0, 4e30)).unwrap();
        assert_close(diagonal, [0.6, 0.0, 0.8]);

        // 平方和下溢为 0，但向量本身非零
        let tiny = normalize(Packed3::new(0.0, -1e-23, 0.0)).unwrap();
        assert_eq!(tiny.to_array(), [0.0, -1.0, 0.0]);

        assert_eq!(
            normalize(Packed3::new(f32::INFINITY, 0.0, 0.0)),
            Err(MathError::non_finite("normalize"))
        );
        assert_eq!(
            normalize(Packed3::new(f32::NAN, 1.0, 0.0)),
            Err(MathError::non_finite("normalize"))
        );
    }

    #[test]
    fn test_angle_outside_squared_range() {
        let x = Packed3::new(1e20, 0.0, 0.0);
        let y = Packed3::new(0.0, 1e20, 0.0);
        let right = angle(x, y).unwrap();
        assert!((right - std::f32::consts::FRAC_PI_2).abs() < EPSILON);

        let small = angle(Packed3::new(1e-23, 0.0, 0.0), Packed3::new(0.0, 0.0, 1e-23)).unwrap();
        assert!((small - std::f32::consts::FRAC_PI_2).abs() < EPSILON);

        assert_eq!(angle(x, x).unwrap(), 0.0);
        assert_eq!(
            angle(x, Packed3::zero()),
            Err(MathError::divide_by_zero("angle"))
        );
        assert_eq!(
            angle(x, Packed3::new(f32::NAN, 0.0, 0.0)),
            Err(MathError::non_finite("angle"))
        );
    }

    #[test]
    fn test_lerp() {
        let a = Packed3::new(0.0, 10.0, -4.0);
        let b = Packed3::new(10.0, 20.0, 4.0);

        assert_close(lerp(a, b, 0.25), [2.5, 12.5, -2.0]);
        assert_eq!(lerp(a, b, -1.0), a);
        assert_eq!(lerp(a, b, 2.0), b);
        assert_close(lerp_unclamped(a, b, 2.0), [20.0, 30.0, 12.0]);
    }

    #[test]
    fn test_reflect() {
        let bounced = reflect(Packed3::new(0.0, -1.0, 0.0), Packed3::new(0.0, 1.0, 0.0));
        assert_eq!(bounced.to_array(), [0.0, 1.0, 0.0]);

        let glancing = reflect(Packed3::new(1.0, -1.0, 0.0), Packed3::new(0.0, 1.0, 0.0));
        assert_eq!(glancing.to_array(), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_backend_matches_target() {
        let backend = Packed3::backend();
        #[cfg(all(target_arch = "x86_64", not(feature = "scalar-fallback")))]
        assert_eq!(backend, SimdBackend::Sse2);
        #[cfg(all(target_arch = "aarch64", not(feature = "scalar-fallback")))]
        assert_eq!(backend, SimdBackend::Neon);
        assert_eq!(backend.f32_lanes(), 4);
    }

    fn lane_value() -> impl Strategy<Value = f32> {
        -1000.0f32..1000.0
    }

    fn packed() -> impl Strategy<Value = [f32; 3]> {
        [lane_value(), lane_value(), lane_value()]
    }

    proptest! {
        // 硬件通道与标量通道必须逐位一致
        #[test]
        fn lanes_match_scalar_backend(a in packed(), b in packed()) {
            use crate::math::scalar;

            let pa = Packed3::from_array(a);
            let pb = Packed3::from_array(b);
            let sa = scalar::load(a[0], a[1], a[2]);
            let sb = scalar::load(b[0], b[1], b[2]);

            prop_assert_eq!((pa + pb).lanes(), scalar::add(sa, sb));
            prop_assert_eq!((pa - pb).lanes(), scalar::sub(sa, sb));
            prop_assert_eq!(mul(pa, pb).lanes(), scalar::mul(sa, sb));
            prop_assert_eq!(min(pa, pb).lanes(), scalar::min(sa, sb));
            prop_assert_eq!(max(pa, pb).lanes(), scalar::max(sa, sb));
            prop_assert_eq!(abs(pa).lanes(), scalar::abs(sa));
        }

        #[test]
        fn dot_is_commutative(a in packed(), b in packed()) {
            let pa = Packed3::from_array(a);
            let pb = Packed3::from_array(b);
            prop_assert_eq!(dot(pa, pb), dot(pb, pa));
        }
    }
}
