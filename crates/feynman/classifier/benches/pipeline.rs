//! Classification pipeline benchmarks.
//!
//! Run with: cargo bench --package feynman-classifier --bench pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feynman_classifier::{separate, Classifier};
use feynman_types::{ParticleTable, Reaction};

fn reactions() -> Vec<(&'static str, Reaction)> {
    vec![
        ("annihilation", Reaction::new(["electron", "positron"], ["muon", "antimuon"])),
        (
            "muon_decay",
            Reaction::new(["muon"], ["electron", "electron antineutrino", "muon neutrino"]),
        ),
        (
            "beta_decay",
            Reaction::new(["neutron"], ["proton", "electron", "electron antineutrino"]),
        ),
        (
            "proton_antiproton",
            Reaction::new(["proton", "antiproton"], ["pi plus", "pi minus", "pi zero"]),
        ),
    ]
}

fn bench_classify(c: &mut Criterion) {
    let table = ParticleTable::standard().unwrap();
    let classifier = Classifier::default();
    let mut group = c.benchmark_group("classify");

    for (name, reaction) in reactions() {
        group.bench_function(name, |b| {
            b.iter(|| classifier.classify(black_box(&reaction), &table).unwrap());
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let table = ParticleTable::standard().unwrap();
    let classifier = Classifier::default();
    let reaction = Reaction::new(["proton", "antiproton"], ["pi plus", "pi minus", "pi zero"])
        .expand_composites(&table)
        .unwrap();
    let interacting = separate(&reaction).interacting;

    c.bench_function("run_stages", |b| {
        b.iter(|| classifier.run_stages(black_box(&interacting), &table).unwrap());
    });
}

criterion_group!(benches, bench_classify, bench_stages);
criterion_main!(benches);
