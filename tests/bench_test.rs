//! Benchmark tests for the scoring engine
//!
//! Run with: cargo test --release -- --ignored --nocapture bench

use std::time::Instant;

use unshorten::scoring::assess;

/// Benchmark helper to measure execution time
fn benchmark<F>(name: &str, iterations: usize, mut f: F)
where
    F: FnMut(),
{
    let start = Instant::now();

    for _ in 0..iterations {
        f();
    }

    let duration = start.elapsed();
    let avg_us = duration.as_micros() as f64 / iterations as f64;
    let ops_per_sec = (iterations as f64 / duration.as_secs_f64()) as u64;

    println!("  {} ({} iterations)", name, iterations);
    println!("    Total time: {:?}", duration);
    println!("    Avg time: {:.3}us", avg_us);
    println!("    Throughput: {} ops/sec\n", ops_per_sec);
}

#[test]
#[ignore] // Run explicitly with: cargo test bench --release -- --ignored --nocapture
fn bench_assess() {
    println!("\n=== Benchmark: Risk scoring ===\n");

    let iterations = 100_000;

    benchmark("Clean URL", iterations, || {
        let _ = assess("https://example.com/normal-page", "example.com");
    });

    benchmark("IP host", iterations, || {
        let _ = assess("http://192.168.1.1/cgi-bin/login", "192.168.1.1");
    });

    let long_url = format!(
        "https://secure-login.paypal.account-verify.ml/{}?update=1.2.3.4",
        "x".repeat(120)
    );
    benchmark("Many rules firing", iterations, || {
        let _ = assess(&long_url, "secure-login.paypal.account-verify.ml");
    });
}
