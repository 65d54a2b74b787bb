mod config_generator;

use config_generator::generate_config;
use criterion::{Criterion, criterion_group, criterion_main};
use dupini::{Config, similarity};
use std::hint::black_box;

fn mutation_benchmarks(c: &mut Criterion) {
    let small = generate_config(50);
    let large = generate_config(1000);

    let mut group = c.benchmark_group("mutation");

    // First-match update
    group.bench_function("set", |b| {
        let mut config: Config = small.parse().unwrap();
        b.iter(|| config.set_option("SectionA", "Value0", "42", ""))
    });

    // Miss with suggestions
    group.bench_function("set_miss_with_suggestions", |b| {
        let mut config: Config = large.parse().unwrap();
        b.iter(|| config.set_option("SectionA", "Valu0", "42", ""))
    });

    // Walk every occurrence of a repeated key
    group.bench_function("set_multiple_options", |b| {
        let mut config: Config = large.parse().unwrap();
        let values = ["(R=1,G=1,B=1,A=1)"; 8];
        b.iter(|| config.set_multiple_options("SectionA", "Repeated", &values, 1))
    });

    // Serialization - small config
    group.bench_function("serialize_small", |b| {
        let config: Config = small.parse().unwrap();
        b.iter(|| config.serialize())
    });

    // Serialization - large config
    group.bench_function("serialize_large", |b| {
        let config: Config = large.parse().unwrap();
        b.iter(|| config.serialize())
    });

    // Round-trip: parse -> mutate -> serialize
    group.bench_function("round_trip", |b| {
        b.iter(|| {
            let mut config: Config = small.parse().unwrap();
            config.set_option("SectionA", "Value0", "42", "");
            let output = config.serialize();
            let config2: Config = output.parse().unwrap();
            config2
        })
    });

    group.finish();
}

fn similarity_benchmarks(c: &mut Criterion) {
    c.bench_function("similarity_ratio", |b| {
        b.iter(|| similarity::ratio(black_box("bAllowSwitchingStreamingSystem"), black_box("bAllowStreamingSystem")))
    });
}

criterion_group!(benches, mutation_benchmarks, similarity_benchmarks);
criterion_main!(benches);
