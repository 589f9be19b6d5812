use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_chart::FourPillars;
use sizhu_core::{Branch, Stem, StemBranch};
use sizhu_energy::analyze_strengths;

fn bench_strengths(c: &mut Criterion) {
    let chart = FourPillars::new(
        StemBranch::new(Stem::Wu, Branch::Zi),
        StemBranch::new(Stem::Geng, Branch::Shen),
        StemBranch::new(Stem::Geng, Branch::Chen),
        StemBranch::new(Stem::Bing, Branch::Xu),
    );
    c.bench_function("analyze_strengths", |b| {
        b.iter(|| analyze_strengths(black_box(&chart)))
    });
}

criterion_group!(benches, bench_strengths);
criterion_main!(benches);
