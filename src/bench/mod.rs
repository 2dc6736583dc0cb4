//! 标量与 SIMD 向量内核的基准驱动
//!
//! 驱动只通过 [`VectorOps`] 调用内核，因此同一段负载代码可以同时测量
//! `Vector3` 和 `Packed3`。

use std::hint::black_box;

use serde::Serialize;
use vecmath_profiling::{Benchmark, BenchmarkResult, Comparison};
use vecmath_simd::{Packed3, SimdBackend, VectorOps};

use crate::config::BenchConfig;
use crate::error::{VecmathError, VecmathResult};
use crate::math::Vector3;

/// 标量内核的基准名称
pub const SCALAR_KERNEL: &str = "scalar";
/// SIMD 内核的基准名称
pub const PACKED_KERNEL: &str = "packed";

/// 单个内核的测量结果
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadReport {
    pub kernel: String,
    pub timing: BenchmarkResult,
    /// 最后一个样本结束时累加得到的向量
    pub accumulated: [f32; 3],
}

/// 一组运算在单个内核上的结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationCheck {
    pub dot: f32,
    pub magnitude: f32,
    pub sqr_magnitude: f32,
    pub angle: f32,
    pub distance: f32,
    pub normalized: [f32; 3],
    pub reflected: [f32; 3],
}

impl OperationCheck {
    /// 两个结果之间最大的绝对差
    pub fn max_deviation(&self, other: &Self) -> f32 {
        let scalars = [
            (self.dot, other.dot),
            (self.magnitude, other.magnitude),
            (self.sqr_magnitude, other.sqr_magnitude),
            (self.angle, other.angle),
            (self.distance, other.distance),
        ];
        let vectors = self
            .normalized
            .iter()
            .zip(other.normalized.iter())
            .chain(self.reflected.iter().zip(other.reflected.iter()))
            .map(|(a, b)| (*a, *b));

        scalars
            .into_iter()
            .chain(vectors)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }

    /// 归约运算是否逐位一致
    pub fn reductions_bit_identical(&self, other: &Self) -> bool {
        self.dot.to_bits() == other.dot.to_bits()
            && self.magnitude.to_bits() == other.magnitude.to_bits()
            && self.sqr_magnitude.to_bits() == other.sqr_magnitude.to_bits()
            && self.angle.to_bits() == other.angle.to_bits()
            && self.distance.to_bits() == other.distance.to_bits()
    }
}

/// 完整驱动运行的报告
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    /// 编译期绑定的 SIMD 后端
    pub compiled_backend: String,
    /// 宿主 CPU 支持的最优后端
    pub host_backend: String,
    pub scalar: WorkloadReport,
    pub packed: WorkloadReport,
    /// packed 相对 scalar 的加速比
    pub comparison: Option<Comparison>,
    pub scalar_check: OperationCheck,
    pub packed_check: OperationCheck,
    pub max_deviation: f32,
}

/// 对任意实现了 `VectorOps` 的内核运行负载
///
/// 每个样本执行 `repetitions` 次：累加 `increment`，再计算 a、b 的
/// 点积、长度、长度平方、夹角与距离。
pub fn measure<V: VectorOps>(
    benchmark: &mut Benchmark,
    kernel: &str,
    config: &BenchConfig,
) -> WorkloadReport {
    let [ax, ay, az] = config.operand_a;
    let [bx, by, bz] = config.operand_b;
    let [ix, iy, iz] = config.increment;
    let a = V::from_xyz(ax, ay, az);
    let b = V::from_xyz(bx, by, bz);
    let increment = V::from_xyz(ix, iy, iz);

    let mut accumulated = V::from_xyz(0.0, 0.0, 0.0);
    let timing = benchmark.run(kernel, config.samples, || {
        let mut res = V::from_xyz(0.0, 0.0, 0.0);
        for _ in 0..config.repetitions {
            res = res.add(black_box(increment));
            black_box(a.dot(b));
            black_box(a.magnitude());
            black_box(a.sqr_magnitude());
            let _ = black_box(a.angle(b));
            black_box(a.distance(b));
        }
        accumulated = res;
    });

    WorkloadReport {
        kernel: kernel.to_string(),
        timing,
        accumulated: accumulated.to_array(),
    }
}

/// 测量标量 `Vector3`
pub fn measure_scalar(config: &BenchConfig) -> WorkloadReport {
    measure::<Vector3>(&mut Benchmark::new(), SCALAR_KERNEL, config)
}

/// 测量 SIMD `Packed3`
pub fn measure_packed(config: &BenchConfig) -> WorkloadReport {
    measure::<Packed3>(&mut Benchmark::new(), PACKED_KERNEL, config)
}

/// 对单个内核计算一次完整的运算结果
pub fn check_vector_operations<V: VectorOps>(a: V, b: V) -> VecmathResult<OperationCheck> {
    Ok(OperationCheck {
        dot: a.dot(b),
        magnitude: a.magnitude(),
        sqr_magnitude: a.sqr_magnitude(),
        angle: a.angle(b)?,
        distance: a.distance(b),
        normalized: b.normalize()?.to_array(),
        reflected: b.reflect(a.normalize()?).to_array(),
    })
}

/// 运行完整驱动：两个内核的计时与结果核对
///
/// 两个内核的归约结果不一致时返回 `VecmathError::Benchmark`。
pub fn run(config: &BenchConfig) -> VecmathResult<DriverReport> {
    config.validate()?;

    let compiled_backend = Packed3::backend();
    let host_backend = SimdBackend::best_available();
    tracing::info!(
        target: "vecmath::bench",
        compiled = ?compiled_backend,
        host = ?host_backend,
        repetitions = config.repetitions,
        samples = config.samples,
        "starting benchmark"
    );

    let mut benchmark = Benchmark::new();
    let scalar = measure::<Vector3>(&mut benchmark, SCALAR_KERNEL, config);
    let packed = measure::<Packed3>(&mut benchmark, PACKED_KERNEL, config);
    let comparison = benchmark.compare(SCALAR_KERNEL, PACKED_KERNEL);

    let scalar_check = check_vector_operations(
        Vector3::from(config.operand_a),
        Vector3::from(config.operand_b),
    )?;
    let packed_check = check_vector_operations(
        Packed3::from(config.operand_a),
        Packed3::from(config.operand_b),
    )?;

    if !scalar_check.reductions_bit_identical(&packed_check) {
        return Err(VecmathError::Benchmark(format!(
            "kernels disagree: scalar {:?} vs packed {:?}",
            scalar_check, packed_check
        )));
    }

    let max_deviation = scalar_check.max_deviation(&packed_check);
    tracing::debug!(
        target: "vecmath::bench",
        scalar_avg_micros = scalar.timing.avg_micros(),
        packed_avg_micros = packed.timing.avg_micros(),
        max_deviation,
        "benchmark complete"
    );

    Ok(DriverReport {
        compiled_backend: format!("{:?}", compiled_backend),
        host_backend: format!("{:?}", host_backend),
        scalar,
        packed,
        comparison,
        scalar_check,
        packed_check,
        max_deviation,
    })
}
