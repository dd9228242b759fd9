//! Capacity planning example.
//!
//! Prints recommended sizes for a few workloads, then fills a small
//! term-tracking filter past its capacity and reports the false positives it
//! produces along the way.
//!
//! Run with: RUST_LOG=termbloom=debug cargo run --example capacity_planning

use termbloom::core::params::optimal_size_and_hash_count;
use termbloom::{BloomFilter, BloomFilterBuilder, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("Bloom filter capacity planning\n");
    println!("{:<22} {:>10} {:>8} {:>6} {:>10}", "workload", "terms", "fp", "k", "bits");

    let workloads = [
        ("Search vocabulary", 100, 0.001),
        ("Session tokens", 10_000, 0.01),
        ("Crawler URL dedup", 1_000_000, 0.001),
        ("Spell checker", 250_000, 0.0001),
    ];
    for (name, terms, fp) in workloads {
        let (size, k) = optimal_size_and_hash_count(terms, fp)?;
        println!("{name:<22} {terms:>10} {fp:>8} {k:>6} {size:>10}");
    }

    println!("\nFilling a 256-bit, 3-hash filter:\n");
    let mut filter = BloomFilterBuilder::new()
        .size(256)
        .hash_functions(3)
        .build_term_filter()?;

    let probes: Vec<String> = (0..2_000).map(|i| format!("probe-{i}")).collect();
    for round in 0..6 {
        for i in 0..5 {
            filter.add_term(Some(format!("word-{round}-{i}").as_str()));
        }

        let false_positives = probes.iter().filter(|p| filter.is_false_positive(p)).count();
        let stats = filter.stats();
        println!(
            "{:>3} terms | fill {:>5.1}% | est. FPR {:.4} | observed {:.4} | filled: {}",
            stats.num_terms,
            stats.fill_ratio * 100.0,
            stats.false_positive_rate,
            false_positives as f64 / probes.len() as f64,
            filter.is_filled()
        );
    }

    println!("\n{}", filter.stats());
    Ok(())
}
