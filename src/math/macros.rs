//! 向量与矩阵的公共实现宏
//!
//! 逐分量运算在 2/3/4 维上完全相同，用宏统一生成，避免三份重复代码。

/// 为向量类型生成构造、逐分量运算、几何方法与运算符实现
///
/// 调用方需自行实现 `dot`，以固定各维度的求和顺序。
macro_rules! impl_vector {
    ($name:ident, $n:literal, $($field:ident),+) => {
        impl $name {
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// 所有分量取同一个值
            #[inline]
            pub const fn splat(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }

            /// 从切片前 N 个元素构造；切片过短时返回 `IndexOutOfBounds`
            pub fn from_slice(values: &[f32]) -> $crate::error::MathResult<Self> {
                $crate::error::MathError::check_len(values.len(), $n)?;
                let mut array = [0.0f32; $n];
                array.copy_from_slice(&values[..$n]);
                Ok(Self::from(array))
            }

            #[inline]
            pub fn sqr_magnitude(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn magnitude(self) -> f32 {
                self.sqr_magnitude().sqrt()
            }

            /// 原地归一化；零向量返回 `DivideByZero` 且不修改 `self`
            pub fn normalize(&mut self) -> $crate::error::MathResult<()> {
                *self = self.normalized()?;
                Ok(())
            }

            pub fn normalized(self) -> $crate::error::MathResult<Self> {
                let sqr_magnitude = self.sqr_magnitude();
                if sqr_magnitude.is_finite() && sqr_magnitude >= f32::MIN_POSITIVE {
                    return Ok(self * (1.0 / sqr_magnitude.sqrt()));
                }
                self.unit_by_largest("normalize")
            }

            /// 平方和上溢或下溢时，先除以绝对值最大的分量再归一化
            fn unit_by_largest(self, operation: &'static str) -> $crate::error::MathResult<Self> {
                if !self.is_finite() {
                    return Err($crate::error::MathError::non_finite(operation));
                }
                let largest = 0.0f32 $(.max(self.$field.abs()))+;
                if largest == 0.0 {
                    return Err($crate::error::MathError::divide_by_zero(operation));
                }
                let reduced = Self { $($field: self.$field / largest),+ };
                Ok(reduced * (1.0 / reduced.magnitude()))
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }

            /// 逐分量相乘（原地）
            #[inline]
            pub fn scale(&mut self, other: Self) {
                *self = self.scaled(other);
            }

            #[inline]
            pub fn scaled(self, other: Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }

            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                (self - other).magnitude()
            }

            /// 两向量夹角（弧度）
            pub fn angle(self, other: Self) -> $crate::error::MathResult<f32> {
                let denominator = self.magnitude() * other.magnitude();
                let dot = self.dot(other);
                if dot.is_finite() && denominator.is_finite() && denominator >= f32::MIN_POSITIVE {
                    return Ok((dot / denominator).clamp(-1.0, 1.0).acos());
                }
                let a = self.unit_by_largest("angle")?;
                let b = other.unit_by_largest("angle")?;
                Ok(a.dot(b).clamp(-1.0, 1.0).acos())
            }

            /// `normal` 需预先归一化
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                self - normal * (self.dot(normal) * 2.0)
            }

            #[inline]
            pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }

            /// `t` 截断到 [0, 1]
            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self.lerp_unclamped(other, t.clamp(0.0, 1.0))
            }

            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            #[inline]
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                self.max(lo).min(hi)
            }

            #[inline]
            pub fn add_scalar(self, value: f32) -> Self {
                Self { $($field: self.$field + value),+ }
            }

            #[inline]
            pub fn sub_scalar(self, value: f32) -> Self {
                Self { $($field: self.$field - value),+ }
            }

            /// 除以标量：先求倒数再相乘
            pub fn checked_div(self, divisor: f32) -> $crate::error::MathResult<Self> {
                if divisor == 0.0 {
                    return Err($crate::error::MathError::divide_by_zero("vector division"));
                }
                Ok(self * (1.0 / divisor))
            }

            /// 容差比较；`==` 始终是精确比较
            pub fn abs_diff_eq(self, other: Self, epsilon: f32) -> bool {
                true $(&& (self.$field - other.$field).abs() <= epsilon)+
            }
        }

        impl From<[f32; $n]> for $name {
            #[inline]
            fn from(values: [f32; $n]) -> Self {
                let [$($field),+] = values;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

/// 为 N×N 行主序矩阵生成构造、元素访问、通用代数与逐元素运算
///
/// 调用方需实现 `determinant` 与 `adjoint`，以及 `from_rows`。
macro_rules! impl_matrix {
    ($name:ident, $vector:ident, $dim:literal) => {
        impl $name {
            /// 维度 N
            pub const DIM: usize = $dim;

            #[inline]
            pub const fn new(m: [f32; $dim * $dim]) -> Self {
                Self { m }
            }

            /// 全零矩阵（也是 `Default`）
            #[inline]
            pub const fn zero() -> Self {
                Self::splat(0.0)
            }

            #[inline]
            pub const fn splat(value: f32) -> Self {
                Self { m: [value; $dim * $dim] }
            }

            pub fn identity() -> Self {
                let mut result = Self::zero();
                for i in 0..$dim {
                    result.m[i * $dim + i] = 1.0;
                }
                result
            }

            pub fn from_slice(values: &[f32]) -> $crate::error::MathResult<Self> {
                $crate::error::MathError::check_len(values.len(), $dim * $dim)?;
                let mut m = [0.0f32; $dim * $dim];
                m.copy_from_slice(&values[..$dim * $dim]);
                Ok(Self { m })
            }

            #[inline]
            pub fn as_array(&self) -> &[f32; $dim * $dim] {
                &self.m
            }

            /// 读取 (row, column) 处的元素
            pub fn get(&self, row: usize, column: usize) -> $crate::error::MathResult<f32> {
                $crate::error::MathError::check_index(row, $dim)?;
                $crate::error::MathError::check_index(column, $dim)?;
                Ok(self.m[row * $dim + column])
            }

            /// 第 `index` 行，即 `m[index*N .. index*N + N]`
            pub fn row(&self, index: usize) -> $crate::error::MathResult<$vector> {
                $crate::error::MathError::check_index(index, $dim)?;
                let values: [f32; $dim] = std::array::from_fn(|c| self.m[index * $dim + c]);
                Ok($vector::from(values))
            }

            /// 第 `index` 列，步长为 N
            pub fn column(&self, index: usize) -> $crate::error::MathResult<$vector> {
                $crate::error::MathError::check_index(index, $dim)?;
                let values: [f32; $dim] = std::array::from_fn(|r| self.m[r * $dim + index]);
                Ok($vector::from(values))
            }

            pub fn transpose(&self) -> Self {
                let mut result = Self::zero();
                for r in 0..$dim {
                    for c in 0..$dim {
                        result.m[c * $dim + r] = self.m[r * $dim + c];
                    }
                }
                result
            }

            /// 矩阵乘积 `self · other`；`*` 运算符只用于标量缩放
            pub fn multiply(&self, other: &Self) -> Self {
                let mut result = Self::zero();
                for r in 0..$dim {
                    for c in 0..$dim {
                        let mut sum = 0.0;
                        for k in 0..$dim {
                            sum += self.m[r * $dim + k] * other.m[k * $dim + c];
                        }
                        result.m[r * $dim + c] = sum;
                    }
                }
                result
            }

            /// 逆矩阵 `transpose(adjoint) / determinant`
            ///
            /// 行列式为 0 时返回 `NonInvertible`。
            pub fn inverse(&self) -> $crate::error::MathResult<Self> {
                let determinant = self.determinant();
                if determinant == 0.0 {
                    tracing::debug!(
                        target: "vecmath",
                        matrix = stringify!($name),
                        "matrix is not invertible"
                    );
                    return Err($crate::error::MathError::NonInvertible { determinant });
                }
                let inverse = self.adjoint().transpose().map(|value| value / determinant);
                if determinant.is_finite() && inverse.is_finite() {
                    return Ok(inverse);
                }
                self.inverse_by_largest(determinant)
            }

            /// 行列式或余子式溢出时，先除以绝对值最大的元素再求逆
            fn inverse_by_largest(&self, determinant: f32) -> $crate::error::MathResult<Self> {
                if !self.is_finite() {
                    return Err($crate::error::MathError::non_finite("inverse"));
                }
                let largest = self.m.iter().fold(0.0f32, |acc, value| acc.max(value.abs()));
                let reduced = self.map(|value| value / largest);
                let reduced_determinant = reduced.determinant();
                if reduced_determinant == 0.0 {
                    tracing::debug!(
                        target: "vecmath",
                        matrix = stringify!($name),
                        "matrix is not invertible"
                    );
                    return Err($crate::error::MathError::NonInvertible { determinant });
                }
                let inverse = reduced
                    .adjoint()
                    .transpose()
                    .map(|value| value / reduced_determinant / largest);
                if !inverse.is_finite() {
                    tracing::debug!(
                        target: "vecmath",
                        matrix = stringify!($name),
                        "inverse overflows f32"
                    );
                    return Err($crate::error::MathError::non_finite("inverse"));
                }
                Ok(inverse)
            }

            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().all(|value| value.is_finite())
            }

            /// 原地求逆；失败时 `self` 保持不变
            pub fn invert(&mut self) -> $crate::error::MathResult<()> {
                *self = self.inverse()?;
                Ok(())
            }

            #[inline]
            fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self { m: self.m.map(f) }
            }

            #[inline]
            fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut m = self.m;
                for (value, rhs) in m.iter_mut().zip(other.m) {
                    *value = f(*value, rhs);
                }
                Self { m }
            }

            #[inline]
            pub fn add_scalar(self, value: f32) -> Self {
                self.map(|v| v + value)
            }

            #[inline]
            pub fn sub_scalar(self, value: f32) -> Self {
                self.map(|v| v - value)
            }

            pub fn checked_div(self, divisor: f32) -> $crate::error::MathResult<Self> {
                if divisor == 0.0 {
                    return Err($crate::error::MathError::divide_by_zero("matrix division"));
                }
                let inverse = 1.0 / divisor;
                Ok(self.map(|v| v * inverse))
            }

            pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.m
                    .iter()
                    .zip(other.m.iter())
                    .all(|(a, b)| (a - b).abs() <= epsilon)
            }
        }

        impl From<[f32; $dim * $dim]> for $name {
            #[inline]
            fn from(m: [f32; $dim * $dim]) -> Self {
                Self { m }
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a + b)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a - b)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self {
                self.map(|v| v * rhs)
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }
    };
}
