/// 标量回退实现
///
/// 当目标平台没有可用的 SIMD 后端，或启用了 `scalar-fallback` 特性时，
/// `Packed3` 使用普通的 `[f32; 4]` 作为通道存储。接口与 `x86`/`arm` 模块一致。

pub type Lanes = [f32; 4];

#[inline(always)]
pub fn load(x: f32, y: f32, z: f32) -> Lanes {
    [x, y, z, 0.0]
}

#[inline(always)]
pub fn zero() -> Lanes {
    [0.0; 4]
}

#[inline(always)]
pub fn store(v: Lanes) -> [f32; 4] {
    v
}

#[inline(always)]
pub fn x(v: Lanes) -> f32 {
    v[0]
}

#[inline(always)]
pub fn y(v: Lanes) -> f32 {
    v[1]
}

#[inline(always)]
pub fn z(v: Lanes) -> f32 {
    v[2]
}

#[inline(always)]
pub fn with_lane(mut v: Lanes, index: usize, value: f32) -> Lanes {
    v[index] = value;
    v
}

#[inline(always)]
fn zip(a: Lanes, b: Lanes, f: impl Fn(f32, f32) -> f32) -> Lanes {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

#[inline(always)]
pub fn add(a: Lanes, b: Lanes) -> Lanes {
    zip(a, b, |l, r| l + r)
}

#[inline(always)]
pub fn sub(a: Lanes, b: Lanes) -> Lanes {
    zip(a, b, |l, r| l - r)
}

#[inline(always)]
pub fn mul(a: Lanes, b: Lanes) -> Lanes {
    zip(a, b, |l, r| l * r)
}

#[inline(always)]
pub fn min(a: Lanes, b: Lanes) -> Lanes {
    zip(a, b, f32::min)
}

#[inline(always)]
pub fn max(a: Lanes, b: Lanes) -> Lanes {
    zip(a, b, f32::max)
}

#[inline(always)]
pub fn abs(a: Lanes) -> Lanes {
    a.map(f32::abs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lanes() {
        let a = load(1.0, 2.0, 3.0);
        let b = load(5.0, 6.0, 7.0);

        assert_eq!(add(a, b), [6.0, 8.0, 10.0, 0.0]);
        assert_eq!(sub(a, b), [-4.0, -4.0, -4.0, 0.0]);
        assert_eq!(mul(a, b), [5.0, 12.0, 21.0, 0.0]);
        assert_eq!(abs(load(-1.0, 2.0, -3.0)), [1.0, 2.0, 3.0, 0.0]);
    }
}
