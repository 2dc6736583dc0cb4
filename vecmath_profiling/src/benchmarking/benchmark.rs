use std::collections::HashMap;
use std::fmt;
/// 性能基准测试框架
///
/// 以固定样本数运行一段闭包，记录每个样本的耗时并给出统计量。
/// 驱动程序用它对比标量与 SIMD 两个向量内核。
use std::time::{Duration, Instant};

use serde::Serialize;

/// 基准测试结果
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub samples: usize,
    pub total_duration: Duration,
    pub min_duration: Duration,
    pub max_duration: Duration,
    pub avg_duration: Duration,
    pub stddev_duration: Duration,
}

impl BenchmarkResult {
    /// 平均耗时（微秒）
    pub fn avg_micros(&self) -> f64 {
        self.avg_duration.as_secs_f64() * 1_000_000.0
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\n  Samples: {}\n  Total: {:.3}ms\n  Avg: {:.3}μs\n  Min: {:.3}μs\n  Max: {:.3}μs\n  StdDev: {:.3}μs",
            self.name,
            self.samples,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_micros(),
            self.min_duration.as_secs_f64() * 1_000_000.0,
            self.max_duration.as_secs_f64() * 1_000_000.0,
            self.stddev_duration.as_secs_f64() * 1_000_000.0,
        )
    }
}

/// 两个结果的平均耗时之比
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub baseline: String,
    pub candidate: String,
    pub baseline_avg_micros: f64,
    pub candidate_avg_micros: f64,
    /// baseline / candidate，大于 1 表示 candidate 更快
    pub speedup: f64,
}

impl Comparison {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 基准测试器
#[derive(Default)]
pub struct Benchmark {
    results: HashMap<String, BenchmarkResult>,
}

impl Benchmark {
    /// 创建新的基准测试器
    pub fn new() -> Self {
        Self::default()
    }

    /// 运行基准测试
    pub fn run<F>(&mut self, name: &str, samples: usize, mut f: F) -> BenchmarkResult
    where
        F: FnMut(),
    {
        let mut durations = Vec::with_capacity(samples);

        // 预热 (10%)
        let warmup_samples = (samples / 10).max(1);
        for _ in 0..warmup_samples {
            f();
        }

        // 实际测试
        let start = Instant::now();
        for _ in 0..samples {
            let sample_start = Instant::now();
            f();
            durations.push(sample_start.elapsed());
        }
        let total_duration = start.elapsed();

        // 统计计算
        let min_duration = durations.iter().min().copied().unwrap_or(Duration::ZERO);
        let max_duration = durations.iter().max().copied().unwrap_or(Duration::ZERO);
        let sum: Duration = durations.iter().sum();
        let avg_duration = Duration::from_nanos(sum.as_nanos() as u64 / samples.max(1) as u64);

        // 标准差
        let variance: f64 = durations
            .iter()
            .map(|d| {
                let diff = d.as_nanos() as f64 - avg_duration.as_nanos() as f64;
                diff * diff
            })
            .sum::<f64>()
            / samples.max(1) as f64;
        let stddev_duration = Duration::from_nanos(variance.sqrt() as u64);

        let result = BenchmarkResult {
            name: name.to_string(),
            samples,
            total_duration,
            min_duration,
            max_duration,
            avg_duration,
            stddev_duration,
        };

        tracing::debug!(
            target: "vecmath_profiling",
            name,
            samples,
            avg_micros = result.avg_micros(),
            "benchmark finished"
        );

        self.results.insert(name.to_string(), result.clone());
        result
    }

    /// 获取结果
    pub fn get_result(&self, name: &str) -> Option<&BenchmarkResult> {
        self.results.get(name)
    }

    /// 比较两个结果；任一结果缺失或 candidate 耗时为 0 时返回 `None`
    pub fn compare(&self, baseline: &str, candidate: &str) -> Option<Comparison> {
        let base = self.results.get(baseline)?;
        let cand = self.results.get(candidate)?;

        let cand_nanos = cand.avg_duration.as_nanos();
        if cand_nanos == 0 {
            return None;
        }

        Some(Comparison {
            baseline: base.name.clone(),
            candidate: cand.name.clone(),
            baseline_avg_micros: base.avg_micros(),
            candidate_avg_micros: cand.avg_micros(),
            speedup: base.avg_duration.as_nanos() as f64 / cand_nanos as f64,
        })
    }

    /// 清空结果
    pub fn clear(&mut self) {
        self.results.clear();
    }
}
