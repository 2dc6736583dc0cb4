//! # vecmath_simd
//!
//! vecmath 的 SIMD 内核：CPU 特性检测、后端选择，以及由 4 通道寄存器承载的
//! 3 维向量 `Packed3`。
//!
//! ## 特性
//!
//! - **编译期后端**: x86_64 使用 SSE2，aarch64 使用 NEON，其他平台使用标量通道
//! - **运行时检测**: 报告宿主 CPU 支持的更宽指令集（AVX/AVX2/AVX-512/SVE）
//! - **共享契约**: `VectorOps` trait 由 `Packed3` 与标量 `Vector3` 共同实现
//! - **共享错误**: `MathError` 覆盖除零、不可逆矩阵、索引越界
//!
//! ## 快速开始
//!
//! ```rust
//! use vecmath_simd::math::{self, Packed3};
//! use vecmath_simd::SimdBackend;
//!
//! let a = Packed3::new(12.0, 27.0, 50.0);
//! let b = Packed3::new(8.0, 95.0, 12.0);
//!
//! assert_eq!(math::dot(a, b), 3261.0);
//! let unit = math::normalize(b).unwrap();
//! assert!((math::magnitude(unit) - 1.0).abs() < 1e-6);
//!
//! println!("编译后端: {:?}", Packed3::backend());
//! println!("宿主最优后端: {:?}", SimdBackend::best_available());
//! ```
//!
//! ## 模块
//!
//! - [`cpu_detect`]: CPU特性检测
//! - [`math`]: `Packed3` 及其自由函数、`VectorOps` trait
//! - [`error`]: 共享错误类型

pub mod cpu_detect;
pub mod error;
pub mod math;

// 重新导出主要类型
pub use cpu_detect::{detect_cpu_features, CpuFeatures, CpuVendor};
pub use error::{MathError, MathResult};
pub use math::{Packed3, VectorOps};

/// SIMD向量宽度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdWidth {
    /// 128位 (SSE, NEON)
    W128,
    /// 256位 (AVX, AVX2)
    W256,
    /// 512位 (AVX-512, SVE)
    W512,
}

/// SIMD后端类型
///
/// 表示可用的SIMD指令集后端，按性能从低到高排序。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdBackend {
    /// 标量回退实现（无SIMD）
    Scalar,
    /// SSE2 (Intel/AMD)
    Sse2,
    /// SSE4.1 (Intel/AMD)
    Sse41,
    /// AVX (Intel/AMD)
    Avx,
    /// AVX2 (Intel/AMD)
    Avx2,
    /// AVX-512 (Intel/AMD高端)
    Avx512,
    /// ARM NEON
    Neon,
    /// ARM SVE
    Sve,
}

impl SimdBackend {
    /// 获取当前平台最优的SIMD后端
    ///
    /// 根据运行时检测的CPU特性，返回当前平台支持的最高性能SIMD后端。
    /// 这只是报告；`Packed3` 实际使用的后端见 [`Packed3::backend`]。
    pub fn best_available() -> Self {
        let features = detect_cpu_features();

        #[cfg(target_arch = "x86_64")]
        {
            if features.avx512f {
                return Self::Avx512;
            }
            if features.avx2 {
                return Self::Avx2;
            }
            if features.avx {
                return Self::Avx;
            }
            if features.sse41 {
                return Self::Sse41;
            }
            if features.sse2 {
                return Self::Sse2;
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            if features.sve {
                return Self::Sve;
            }
            if features.neon {
                return Self::Neon;
            }
        }

        let _ = features;
        Self::Scalar
    }

    /// 获取SIMD向量宽度
    pub fn width(&self) -> SimdWidth {
        match self {
            Self::Scalar | Self::Sse2 | Self::Sse41 | Self::Neon => SimdWidth::W128,
            Self::Avx | Self::Avx2 => SimdWidth::W256,
            Self::Avx512 | Self::Sve => SimdWidth::W512,
        }
    }

    /// 获取可以并行处理的f32数量
    ///
    /// ```rust
    /// use vecmath_simd::SimdBackend;
    ///
    /// assert_eq!(SimdBackend::Sse2.f32_lanes(), 4);
    /// assert_eq!(SimdBackend::Avx2.f32_lanes(), 8);
    /// assert_eq!(SimdBackend::Avx512.f32_lanes(), 16);
    /// ```
    pub fn f32_lanes(&self) -> usize {
        match self.width() {
            SimdWidth::W128 => 4,
            SimdWidth::W256 => 8,
            SimdWidth::W512 => 16,
        }
    }
}
