pub mod benchmark;

pub use benchmark::{Benchmark, BenchmarkResult, Comparison};
