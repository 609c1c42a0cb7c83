use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gochara_base::{DoubleAspectPair, DrishtiTable, Graha, Position, PositionSet, Rashi};
use gochara_engine::{Banding, assess_ruler, score_houses};

fn build_positions() -> PositionSet {
    let lagna_lon = 95.0;
    let lons = [15.0, 100.0, 200.0, 48.0, 130.0, 75.0, 310.0, 170.0, 350.0];
    let mut arr = [Position::from_longitude(lagna_lon, lagna_lon, false); 10];
    for (i, lon) in lons.iter().enumerate() {
        arr[i] = Position::from_longitude(*lon, lagna_lon, false);
    }
    PositionSet::new(arr)
}

fn score_bench(c: &mut Criterion) {
    let transit = build_positions();
    let table = DrishtiTable::default();

    let mut group = c.benchmark_group("score");
    group.bench_function("assess_ruler", |b| {
        b.iter(|| assess_ruler(black_box(Graha::Shani), &transit, &table))
    });
    group.bench_function("score_houses", |b| {
        b.iter(|| {
            score_houses(
                black_box(Rashi::Karka),
                &transit,
                &table,
                DoubleAspectPair::default(),
                Banding::Wide,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, score_bench);
criterion_main!(benches);
