// -------------------------------------------------------------------------
// SCPN Shot Dashboard -- Signal Synthesizer Benchmark
// Full 5000-sample x 32-channel shot, entropy vs per-shot seeded RNG.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, Criterion};
use dashboard_synth::synth::Synthesizer;
use dashboard_types::config::{SeedPolicy, SynthConfig};
use dashboard_types::state::ShotNumber;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_5000x32");

    for (label, seed) in [
        ("entropy", SeedPolicy::Entropy),
        ("per_shot", SeedPolicy::PerShot),
    ] {
        let synth = Synthesizer::new(SynthConfig {
            seed,
            ..Default::default()
        })
        .expect("default config is valid");

        group.bench_function(label, |b| {
            b.iter(|| black_box(synth.generate(ShotNumber(10086))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
