use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rent_schedule::schedule::{RentAgreement, RentChangeDetails, RentDetails};

fn long_lease(frequency: &str) -> RentAgreement {
    let details = RentDetails {
        rent_amount: 15000.0,
        rent_frequency: frequency.into(),
        rent_start_date: "2000-01-31".into(),
        rent_end_date: "2099-12-31".into(),
        payment_method: Some("bank_transfer".into()),
    };
    let changes: Vec<RentChangeDetails> = (2001..2100)
        .map(|year| {
            RentChangeDetails::new(15000.0 + (year - 2000) as f64 * 250.0, format!("{year}-01-01"))
        })
        .collect();
    RentAgreement::new(&details, &changes).expect("valid agreement")
}

fn bench_generate(c: &mut Criterion) {
    let weekly = long_lease("weekly");
    let monthly = long_lease("monthly");

    c.bench_function("generate_weekly_100y", |b| {
        b.iter(|| black_box(&weekly).generate())
    });
    c.bench_function("generate_monthly_100y", |b| {
        b.iter(|| black_box(&monthly).generate())
    });
}

fn bench_construct(c: &mut Criterion) {
    c.bench_function("construct_with_99_changes", |b| {
        b.iter(|| long_lease(black_box("fortnightly")))
    });
}

criterion_group!(benches, bench_generate, bench_construct);
criterion_main!(benches);
