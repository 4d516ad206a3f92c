//! Timing benchmark for the four statistics over in-memory buffers of increasing length.

use audio_stats::operations::{mean, running_mean, running_variance, standard_deviation};
use std::hint::black_box;
use std::time::Instant;

/// Generate sine wave test data
fn generate_test_audio(duration_seconds: f64, sample_rate: usize) -> Vec<f32> {
    let num_samples = (duration_seconds * sample_rate as f64) as usize;
    let frequency = 440.0; // A4

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            ((2.0 * std::f64::consts::PI * frequency * t).sin() * 0.5) as f32
        })
        .collect()
}

fn time<F: FnMut() -> f32>(label: &str, iterations: u32, mut f: F) {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let per_call = start.elapsed() / iterations;
    println!("  {label:<20} {per_call:?}");
}

fn benchmark(duration: f64, label: &str) {
    let samples = generate_test_audio(duration, 44100);
    let iterations = 20;

    println!("Benchmarking {}: {:.1}s audio, {} samples", label, duration, samples.len());
    time("mean", iterations, || mean(black_box(&samples)));
    time("standard_deviation", iterations, || {
        let m = mean(black_box(&samples));
        standard_deviation(black_box(&samples), m)
    });
    time("running_mean", iterations, || running_mean(black_box(&samples)));
    time("running_variance", iterations, || {
        running_variance(black_box(&samples))
    });
}

fn main() {
    benchmark(1.0, "short");
    benchmark(30.0, "medium");
    benchmark(300.0, "long");
}
