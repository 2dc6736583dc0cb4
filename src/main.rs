use vecmath::bench::{self, WorkloadReport};
use vecmath::config::BenchConfig;
use vecmath::logging::init_logging;
use vecmath::VecmathResult;

fn main() {
    if let Err(e) = run() {
        eprintln!("vecmath-bench failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> VecmathResult<()> {
    // 唯一的位置参数是配置文件路径
    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::from_file(path)?,
        None => BenchConfig::default(),
    };
    init_logging(&config.logging);

    let report = bench::run(&config)?;

    println!(
        "SIMD backend: compiled {}, host best {}",
        report.compiled_backend, report.host_backend
    );
    print_workload(&report.scalar);
    print_workload(&report.packed);
    if let Some(comparison) = &report.comparison {
        println!("Speedup (scalar / packed): {:.2}x", comparison.speedup);
    }

    let check = &report.packed_check;
    println!("DotProduct: {:.6}", check.dot);
    println!("Magnitude: {:.6}", check.magnitude);
    println!("SqrMagnitude: {:.6}", check.sqr_magnitude);
    println!("Angle: {:.6}", check.angle);
    println!("Distance: {:.6}", check.distance);
    println!("Normalize(b): {:?}", check.normalized);
    println!("Reflect(b, normalize(a)): {:?}", check.reflected);
    println!("Max deviation scalar vs packed: {:e}", report.max_deviation);
    Ok(())
}

fn print_workload(report: &WorkloadReport) {
    let [x, y, z] = report.accumulated;
    println!("{} time: {:.3}us", report.kernel, report.timing.avg_micros());
    println!("X[{:.6}] Y[{:.6}] Z[{:.6}]", x, y, z);
}
