//! Shared criterion settings for the curve benchmarks
use criterion::{measurement::WallTime, BenchmarkGroup, Criterion};
#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};
use std::time::Duration;

/// Sample sizes the benchmarks sweep over
pub const SAMPLE_SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

#[cfg(not(target_os = "windows"))]
pub fn get_default_profiling_configs() -> Criterion {
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Curve building is dominated by sorting, large inputs need fewer samples
pub fn set_default_benchmark_configs(benchmark: &mut BenchmarkGroup<WallTime>) {
    benchmark
        .sample_size(50)
        .measurement_time(Duration::new(5, 0))
        .confidence_level(0.97)
        .warm_up_time(Duration::new(2, 0))
        .noise_threshold(0.05);
}
