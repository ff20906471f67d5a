use chrono::{Duration, NaiveDate};
use rent_schedule::schedule::{
    PaymentMethod, PaymentRecord, RentAgreement, RentChangeDetails, RentDetails,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn details(frequency: &str, start: &str, end: &str, method: Option<&str>) -> RentDetails {
    RentDetails {
        rent_amount: 1000.0,
        rent_frequency: frequency.into(),
        rent_start_date: start.into(),
        rent_end_date: end.into(),
        payment_method: method.map(str::to_string),
    }
}

fn occurrence_dates(records: &[PaymentRecord]) -> Vec<NaiveDate> {
    records.iter().map(|record| record.occurrence_date).collect()
}

#[test]
fn weekly_schedule_without_changes() {
    let agreement = RentAgreement::new(
        &details("weekly", "2025-07-01", "2025-07-22", Some("instant")),
        &[],
    )
    .expect("valid agreement");
    let schedule = agreement.generate();

    let expected = vec![
        date(2025, 7, 1),
        date(2025, 7, 8),
        date(2025, 7, 15),
        date(2025, 7, 22),
    ];
    assert_eq!(occurrence_dates(&schedule), expected);
    assert_eq!(
        schedule.iter().map(|r| r.payment_date).collect::<Vec<_>>(),
        expected
    );
    assert!(schedule.iter().all(|record| record.amount == 1000.0));
    assert!(schedule
        .iter()
        .all(|record| record.method == PaymentMethod::Instant));
}

#[test]
fn weekly_schedule_with_rent_change() {
    let changes = [RentChangeDetails::new(1200.0, "2025-07-15")];
    let agreement = RentAgreement::new(
        &details("weekly", "2025-07-01", "2025-07-22", Some("instant")),
        &changes,
    )
    .expect("valid agreement");
    let amounts: Vec<f64> = agreement.generate().iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![1000.0, 1000.0, 1200.0, 1200.0]);
}

#[test]
fn fortnightly_schedule_stops_before_end_date() {
    let agreement =
        RentAgreement::new(&details("fortnightly", "2025-07-01", "2025-08-22", None), &[])
            .expect("valid agreement");
    assert_eq!(
        agreement.payment_dates(),
        vec![
            date(2025, 7, 1),
            date(2025, 7, 15),
            date(2025, 7, 29),
            date(2025, 8, 12)
        ]
    );
}

#[test]
fn monthly_credit_card_schedule_applies_two_day_lead() {
    let agreement = RentAgreement::new(
        &details("monthly", "2025-07-15", "2025-10-15", Some("credit_card")),
        &[],
    )
    .expect("valid agreement");
    let payment_dates: Vec<NaiveDate> = agreement
        .generate()
        .iter()
        .map(|record| record.payment_date)
        .collect();
    assert_eq!(
        payment_dates,
        vec![
            date(2025, 7, 13),
            date(2025, 8, 13),
            date(2025, 9, 13),
            date(2025, 10, 13)
        ]
    );
}

#[test]
fn monthly_schedule_clamps_month_end() {
    let agreement =
        RentAgreement::new(&details("monthly", "2024-01-31", "2024-03-31", None), &[])
            .expect("valid agreement");
    assert_eq!(
        agreement.payment_dates(),
        vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 29)]
    );
}

#[test]
fn lead_time_matches_each_method() {
    for (method, lead) in [("instant", 0), ("credit_card", 2), ("bank_transfer", 3)] {
        let agreement = RentAgreement::new(
            &details("fortnightly", "2025-01-01", "2025-06-30", Some(method)),
            &[],
        )
        .expect("valid agreement");
        for record in agreement.generate() {
            assert_eq!(
                record.payment_date,
                record.occurrence_date - Duration::days(lead),
                "lead time for {method}"
            );
        }
    }
}

#[test]
fn schedule_bounds_and_monotonicity_hold() {
    let cases = [
        ("weekly", "2025-01-03", "2025-12-30"),
        ("fortnightly", "2024-02-29", "2025-02-28"),
        ("monthly", "2023-08-31", "2025-08-30"),
        ("monthly", "2025-05-05", "2025-05-05"),
    ];
    for (frequency, start, end) in cases {
        let input = details(frequency, start, end, Some("bank_transfer"));
        let agreement = RentAgreement::new(&input, &[]).expect("valid agreement");
        let schedule = agreement.generate();

        assert!(!schedule.is_empty());
        assert_eq!(schedule[0].occurrence_date, agreement.start_date());
        let last = schedule.last().unwrap().occurrence_date;
        assert!(last <= agreement.end_date());
        assert!(
            agreement.frequency().next_date(last).unwrap() > agreement.end_date(),
            "{frequency} {start}..{end} stopped early"
        );
        for pair in schedule.windows(2) {
            assert!(pair[0].occurrence_date < pair[1].occurrence_date);
            assert!(pair[0].payment_date < pair[1].payment_date);
        }
    }
}

#[test]
fn amounts_follow_successive_changes() {
    let changes = [
        RentChangeDetails::new(1300.0, "2025-10-01"),
        RentChangeDetails::new(1100.0, "2025-08-01"),
        RentChangeDetails::new(1200.0, "2025-09-01"),
    ];
    let agreement = RentAgreement::new(
        &details("monthly", "2025-07-01", "2025-11-01", None),
        &changes,
    )
    .expect("valid agreement");
    let amounts: Vec<f64> = agreement.generate().iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![1000.0, 1100.0, 1200.0, 1300.0, 1300.0]);
    assert_eq!(agreement.total_amount(), 5900.0);
}

#[test]
fn same_day_changes_resolve_to_last_listed() {
    let changes = [
        RentChangeDetails::new(1500.0, "2025-07-08"),
        RentChangeDetails::new(1400.0, "2025-07-08"),
    ];
    let agreement = RentAgreement::new(
        &details("weekly", "2025-07-01", "2025-07-08", None),
        &changes,
    )
    .expect("valid agreement");
    let amounts: Vec<f64> = agreement.generate().iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![1000.0, 1400.0]);
}

#[test]
fn generate_is_idempotent() {
    let changes = [RentChangeDetails::new(1200.0, "2025-08-01")];
    let agreement = RentAgreement::new(
        &details("weekly", "2025-07-01", "2025-09-30", Some("credit_card")),
        &changes,
    )
    .expect("valid agreement");
    assert_eq!(agreement.generate(), agreement.generate());
}

#[test]
fn agreements_can_generate_from_multiple_threads() {
    let agreement = RentAgreement::new(
        &details("weekly", "2025-01-01", "2025-12-31", None),
        &[],
    )
    .expect("valid agreement");
    let expected = agreement.generate();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| agreement.generate()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
