use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_bala::{
    StrengthConfig, StrengthInputs, cheshta_bala, compute_strengths, drik_bala, kala_bala,
    sthana_bala,
};
use jyotish_base::{DivisionalDignities, Graha, Positions};

fn sample_positions() -> Positions {
    Positions::new()
        .with(Graha::Surya, 280.5)
        .with(Graha::Chandra, 33.2)
        .with(Graha::Mangal, 297.0)
        .with(Graha::Buddh, 265.4)
        .with(Graha::Guru, 95.0)
        .with(Graha::Shukra, 330.1)
        .with(Graha::Shani, 201.0)
        .with(Graha::Rahu, 12.0)
        .with_ascendant(185.0)
}

fn component_bench(c: &mut Criterion) {
    let positions = sample_positions();
    let dignities = DivisionalDignities::new();

    let mut group = c.benchmark_group("components");
    group.bench_function("sthana_bala", |b| {
        b.iter(|| {
            sthana_bala(
                black_box(Graha::Guru),
                &positions,
                &dignities,
                Default::default(),
            )
        })
    });
    group.bench_function("cheshta_bala", |b| {
        b.iter(|| cheshta_bala(black_box(Graha::Buddh), black_box(-0.4), black_box(15.1)))
    });
    group.bench_function("kala_bala", |b| {
        b.iter(|| kala_bala(black_box(Graha::Chandra), black_box(2_460_325.3), true, 112.7))
    });
    group.bench_function("drik_bala", |b| {
        b.iter(|| drik_bala(black_box(Graha::Shukra), &positions))
    });
    group.finish();
}

fn aggregate_bench(c: &mut Criterion) {
    let positions = sample_positions();
    let dignities = DivisionalDignities::new();
    let speeds = [1.01, 12.8, 0.77, -0.4, -0.08, 1.2, 0.03, -0.05, -0.05];
    let inputs = StrengthInputs {
        jd: 2_460_325.0,
        positions: &positions,
        speeds: &speeds,
        dignities: &dignities,
    };
    let config = StrengthConfig::default().with_nodes();

    let mut group = c.benchmark_group("aggregate");
    group.bench_function("compute_strengths", |b| {
        b.iter(|| compute_strengths(black_box(&inputs), &config))
    });
    group.finish();
}

criterion_group!(benches, component_bench, aggregate_bench);
criterion_main!(benches);
