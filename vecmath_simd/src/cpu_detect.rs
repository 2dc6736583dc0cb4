/// CPU特性检测模块
///
/// 运行时检测宿主CPU支持的SIMD指令集。检测结果只用于报告与后端选择，
/// `Packed3` 本身在编译期绑定到目标架构的基线指令集（x86_64 为 SSE2，
/// aarch64 为 NEON）。

use std::fmt::Write as _;
use std::sync::OnceLock;

/// CPU特性标志
#[derive(Debug, Clone)]
pub struct CpuFeatures {
    // x86/x64特性
    pub sse2: bool,
    pub sse41: bool,
    pub avx: bool,
    pub avx2: bool,
    pub avx512f: bool,
    pub fma: bool,

    // ARM特性
    pub neon: bool,
    pub sve: bool,

    /// 逻辑核心数
    pub logical_cores: usize,
    pub vendor: CpuVendor,
    pub brand: String,
}

/// CPU厂商
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuVendor {
    Intel,
    Amd,
    AppleSilicon,
    Other,
}

impl CpuFeatures {
    fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        let features = Self::detect_x86_64();

        #[cfg(target_arch = "aarch64")]
        let features = Self::detect_aarch64();

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        let features = Self::default();

        tracing::debug!(
            target: "vecmath_simd",
            vendor = ?features.vendor,
            cores = features.logical_cores,
            "CPU features detected"
        );
        features
    }

    #[cfg(target_arch = "x86_64")]
    fn detect_x86_64() -> Self {
        Self {
            sse2: is_x86_feature_detected!("sse2"),
            sse41: is_x86_feature_detected!("sse4.1"),
            avx: is_x86_feature_detected!("avx"),
            avx2: is_x86_feature_detected!("avx2"),
            avx512f: is_x86_feature_detected!("avx512f"),
            fma: is_x86_feature_detected!("fma"),
            neon: false,
            sve: false,
            logical_cores: num_cpus::get(),
            vendor: Self::detect_x86_vendor(),
            brand: Self::cpu_brand(),
        }
    }

    #[cfg(target_arch = "aarch64")]
    fn detect_aarch64() -> Self {
        let brand = Self::cpu_brand();
        let vendor = if brand.to_lowercase().contains("apple") {
            CpuVendor::AppleSilicon
        } else {
            CpuVendor::Other
        };

        Self {
            sse2: false,
            sse41: false,
            avx: false,
            avx2: false,
            avx512f: false,
            fma: false,
            // aarch64 上 NEON 是强制支持的
            neon: true,
            sve: std::arch::is_aarch64_feature_detected!("sve"),
            logical_cores: num_cpus::get(),
            vendor,
            brand,
        }
    }

    #[cfg(target_arch = "x86_64")]
    fn detect_x86_vendor() -> CpuVendor {
        // cpuid 叶 0 的厂商字符串按 ebx, edx, ecx 顺序拼接
        let result = unsafe { std::arch::x86_64::__cpuid(0) };
        let mut vendor = [0u8; 12];
        vendor[0..4].copy_from_slice(&result.ebx.to_le_bytes());
        vendor[4..8].copy_from_slice(&result.edx.to_le_bytes());
        vendor[8..12].copy_from_slice(&result.ecx.to_le_bytes());

        match &vendor {
            b"GenuineIntel" => CpuVendor::Intel,
            b"AuthenticAMD" => CpuVendor::Amd,
            _ => CpuVendor::Other,
        }
    }

    fn cpu_brand() -> String {
        #[cfg(target_os = "linux")]
        {
            if let Ok(content) = std::fs::read_to_string("/proc/cpuinfo") {
                let brand = content
                    .lines()
                    .filter(|line| line.starts_with("model name") || line.starts_with("Hardware"))
                    .find_map(|line| line.split(':').nth(1));
                if let Some(name) = brand {
                    return name.trim().to_string();
                }
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Ok(output) = std::process::Command::new("sysctl")
                .arg("-n")
                .arg("machdep.cpu.brand_string")
                .output()
            {
                if let Ok(brand) = String::from_utf8(output.stdout) {
                    return brand.trim().to_string();
                }
            }
        }

        "Unknown".to_string()
    }

    /// 生成人类可读的特性摘要
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Vendor: {:?}", self.vendor);
        let _ = writeln!(out, "Brand: {}", self.brand);
        let _ = writeln!(out, "Logical cores: {}", self.logical_cores);

        #[cfg(target_arch = "x86_64")]
        {
            let _ = writeln!(out, "SSE2: {}", self.sse2);
            let _ = writeln!(out, "SSE4.1: {}", self.sse41);
            let _ = writeln!(out, "AVX: {}", self.avx);
            let _ = writeln!(out, "AVX2: {}", self.avx2);
            let _ = writeln!(out, "AVX-512F: {}", self.avx512f);
            let _ = writeln!(out, "FMA: {}", self.fma);
        }

        #[cfg(target_arch = "aarch64")]
        {
            let _ = writeln!(out, "NEON: {}", self.neon);
            let _ = writeln!(out, "SVE: {}", self.sve);
        }

        out
    }
}

impl Default for CpuFeatures {
    fn default() -> Self {
        Self {
            sse2: false,
            sse41: false,
            avx: false,
            avx2: false,
            avx512f: false,
            fma: false,
            neon: false,
            sve: false,
            logical_cores: 1,
            vendor: CpuVendor::Other,
            brand: "Unknown".to_string(),
        }
    }
}

/// 全局CPU特性缓存
static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// 检测CPU特性（缓存结果）
pub fn detect_cpu_features() -> &'static CpuFeatures {
    CPU_FEATURES.get_or_init(CpuFeatures::detect)
}
