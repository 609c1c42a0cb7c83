use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gochara_base::{
    DrishtiTable, Graha, active_periods, mahadashas, nakshatra_from_longitude,
    rashi_from_longitude, subdivide, whole_sign_house,
};

fn geometry_bench(c: &mut Criterion) {
    let lon = 198.97;

    let mut group = c.benchmark_group("geometry");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("whole_sign_house", |b| {
        b.iter(|| whole_sign_house(black_box(lon), black_box(123.4)))
    });
    group.finish();
}

fn drishti_bench(c: &mut Criterion) {
    let table = DrishtiTable::default();

    let mut group = c.benchmark_group("drishti");
    group.bench_function("aspected_houses_shani", |b| {
        b.iter(|| table.aspected_houses(Graha::Shani, black_box(4)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_451_545.0;
    let moon_lon = 100.0;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("mahadashas", |b| {
        b.iter(|| mahadashas(black_box(birth_jd), black_box(moon_lon)))
    });
    group.bench_function("subdivide", |b| {
        let periods = mahadashas(birth_jd, moon_lon);
        b.iter(|| subdivide(black_box(&periods[0])))
    });
    group.bench_function("active_periods", |b| {
        b.iter(|| {
            active_periods(
                black_box(birth_jd),
                black_box(moon_lon),
                black_box(birth_jd + 10_000.0),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, geometry_bench, drishti_bench, dasha_bench);
criterion_main!(benches);
