/// x86_64 SSE2 通道实现
///
/// SSE2 是 x86_64 的基线指令集，编译期即可使用，无需运行时检测。
/// 所有构造函数都保证第 4 通道为 0。

use std::arch::x86_64::*;

pub type Lanes = __m128;

#[inline(always)]
pub fn load(x: f32, y: f32, z: f32) -> Lanes {
    unsafe { _mm_setr_ps(x, y, z, 0.0) }
}

#[inline(always)]
pub fn zero() -> Lanes {
    unsafe { _mm_setzero_ps() }
}

#[inline(always)]
pub fn store(v: Lanes) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), v) };
    out
}

#[inline(always)]
pub fn x(v: Lanes) -> f32 {
    unsafe { _mm_cvtss_f32(v) }
}

#[inline(always)]
pub fn y(v: Lanes) -> f32 {
    unsafe { _mm_cvtss_f32(_mm_shuffle_ps::<0b01_01_01_01>(v, v)) }
}

#[inline(always)]
pub fn z(v: Lanes) -> f32 {
    unsafe { _mm_cvtss_f32(_mm_shuffle_ps::<0b10_10_10_10>(v, v)) }
}

/// 替换单个通道；`index` 由调用者保证小于 3
#[inline(always)]
pub fn with_lane(v: Lanes, index: usize, value: f32) -> Lanes {
    if index == 0 {
        return unsafe { _mm_move_ss(v, _mm_set_ss(value)) };
    }
    let mut lanes = store(v);
    lanes[index] = value;
    unsafe { _mm_loadu_ps(lanes.as_ptr()) }
}

#[inline(always)]
pub fn add(a: Lanes, b: Lanes) -> Lanes {
    unsafe { _mm_add_ps(a, b) }
}

#[inline(always)]
pub fn sub(a: Lanes, b: Lanes) -> Lanes {
    unsafe { _mm_sub_ps(a, b) }
}

#[inline(always)]
pub fn mul(a: Lanes, b: Lanes) -> Lanes {
    unsafe { _mm_mul_ps(a, b) }
}

#[inline(always)]
pub fn min(a: Lanes, b: Lanes) -> Lanes {
    unsafe { _mm_min_ps(a, b) }
}

#[inline(always)]
pub fn max(a: Lanes, b: Lanes) -> Lanes {
    unsafe { _mm_max_ps(a, b) }
}

/// 清除符号位
#[inline(always)]
pub fn abs(a: Lanes) -> Lanes {
    unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), a) }
}
