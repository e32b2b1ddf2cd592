use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mage_base::{
    CompatibilityMatrix, GeoLocation, ZodiacSign, biorhythm, birth_chart, crush_score,
    love_calculator_score, lucky_numbers, milestones, moon_phase,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn cycles_bench(c: &mut Criterion) {
    let birth = date(1990, 6, 15);
    let as_of = date(2024, 3, 1);
    let moment = birth.and_hms_opt(14, 30, 0).unwrap_or_default();
    let loc = GeoLocation {
        latitude_deg: 40.7128,
        longitude_deg: -74.006,
    };

    let mut group = c.benchmark_group("cycles");
    group.bench_function("biorhythm", |b| {
        b.iter(|| biorhythm(black_box(birth), black_box(as_of)))
    });
    group.bench_function("birth_chart", |b| {
        b.iter(|| birth_chart(black_box(moment), &loc))
    });
    group.bench_function("moon_phase", |b| b.iter(|| moon_phase(black_box(moment))));
    group.finish();
}

fn seeded_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("seeded");
    group.bench_function("compatibility_matrix", |b| {
        b.iter(|| CompatibilityMatrix::from_seed(black_box(42)))
    });
    group.bench_function("lucky_numbers", |b| {
        b.iter(|| lucky_numbers(black_box(date(2024, 1, 15)), ZodiacSign::Leo))
    });
    group.finish();
}

fn names_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("love_score");
    group.bench_function("crush", |b| {
        b.iter(|| crush_score(black_box("Romeo Montague"), black_box("Juliet Capulet")))
    });
    group.bench_function("calculator", |b| {
        b.iter(|| love_calculator_score(black_box("Romeo Montague"), black_box("Juliet Capulet")))
    });
    group.finish();
}

fn timeline_bench(c: &mut Criterion) {
    c.bench_function("milestones", |b| {
        b.iter(|| milestones(black_box(date(2015, 2, 14)), black_box(date(2024, 3, 1))))
    });
}

criterion_group!(benches, cycles_bench, seeded_bench, names_bench, timeline_bench);
criterion_main!(benches);
