/// ARM NEON 通道实现
///
/// NEON 在 aarch64 上是强制支持的（Apple M系列、骁龙、麒麟等），
/// 编译期即可使用。所有构造函数都保证第 4 通道为 0。

use std::arch::aarch64::*;

pub type Lanes = float32x4_t;

#[inline(always)]
pub fn load(x: f32, y: f32, z: f32) -> Lanes {
    let lanes = [x, y, z, 0.0];
    unsafe { vld1q_f32(lanes.as_ptr()) }
}

#[inline(always)]
pub fn zero() -> Lanes {
    unsafe { vdupq_n_f32(0.0) }
}

#[inline(always)]
pub fn store(v: Lanes) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    unsafe { vst1q_f32(out.as_mut_ptr(), v) };
    out
}

#[inline(always)]
pub fn x(v: Lanes) -> f32 {
    unsafe { vgetq_lane_f32::<0>(v) }
}

#[inline(always)]
pub fn y(v: Lanes) -> f32 {
    unsafe { vgetq_lane_f32::<1>(v) }
}

#[inline(always)]
pub fn z(v: Lanes) -> f32 {
    unsafe { vgetq_lane_f32::<2>(v) }
}

/// 替换单个通道；`index` 由调用者保证小于 3
#[inline(always)]
pub fn with_lane(v: Lanes, index: usize, value: f32) -> Lanes {
    unsafe {
        match index {
            0 => vsetq_lane_f32::<0>(value, v),
            1 => vsetq_lane_f32::<1>(value, v),
            _ => vsetq_lane_f32::<2>(value, v),
        }
    }
}

#[inline(always)]
pub fn add(a: Lanes, b: Lanes) -> Lanes {
    unsafe { vaddq_f32(a, b) }
}

#[inline(always)]
pub fn sub(a: Lanes, b: Lanes) -> Lanes {
    unsafe { vsubq_f32(a, b) }
}

#[inline(always)]
pub fn mul(a: Lanes, b: Lanes) -> Lanes {
    unsafe { vmulq_f32(a, b) }
}

#[inline(always)]
pub fn min(a: Lanes, b: Lanes) -> Lanes {
    unsafe { vminq_f32(a, b) }
}

#[inline(always)]
pub fn max(a: Lanes, b: Lanes) -> Lanes {
    unsafe { vmaxq_f32(a, b) }
}

#[inline(always)]
pub fn abs(a: Lanes) -> Lanes {
    unsafe { vabsq_f32(a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_keeps_fourth_lane_zero() {
        let v = load(1.0, 2.0, 3.0);
        assert_eq!(store(v), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!((x(v), y(v), z(v)), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_with_lane() {
        let v = load(1.0, 2.0, 3.0);
        assert_eq!(store(with_lane(v, 1, 9.0)), [1.0, 9.0, 3.0, 0.0]);
    }
}
