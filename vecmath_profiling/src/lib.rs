//! # vecmath profiling
//!
//! Timing harness used by the vecmath benchmark driver.
//!
//! ## Modules
//!
//! - [`benchmarking`] - Sampled wall-clock benchmarks and result comparison
//!
//! ## Example
//!
//! ```rust
//! use vecmath_profiling::Benchmark;
//!
//! let mut benchmark = Benchmark::new();
//! let mut total = 0u64;
//! let result = benchmark.run("accumulate", 100, || {
//!     total = total.wrapping_add(1);
//! });
//! println!("{}", result);
//! ```

pub mod benchmarking;

// Re-export public APIs
pub use benchmarking::*;
