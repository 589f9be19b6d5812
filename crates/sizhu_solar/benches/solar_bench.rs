use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_solar::{next_jie, solar_longitude};

fn bench_solar_longitude(c: &mut Criterion) {
    c.bench_function("solar_longitude", |b| {
        b.iter(|| solar_longitude(black_box(1_718_409_600.0)))
    });
}

fn bench_jie_search(c: &mut Criterion) {
    c.bench_function("next_jie", |b| {
        b.iter(|| next_jie(black_box(1_718_409_600.0)))
    });
}

criterion_group!(benches, bench_solar_longitude, bench_jie_search);
criterion_main!(benches);
