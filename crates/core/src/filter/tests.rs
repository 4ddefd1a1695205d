//! Property-based and unit tests for the filter facade.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::criteria::ActivityFilter;
use crate::activity::{ActivityStatus, BudgetActivity, MonthAmounts, QuarterAmounts};
use crate::period::{Month, Period, Quarter};
use rkas_shared::types::ActivityId;

fn activity(
    name: &str,
    field: &str,
    status: ActivityStatus,
    year: i32,
    quarters: QuarterAmounts,
) -> BudgetActivity {
    let now = Utc::now();
    BudgetActivity {
        id: ActivityId::new(),
        activity_name: name.to_string(),
        description: None,
        field_of_activity: field.to_string(),
        standard: "Standar Proses".to_string(),
        funding_source: "BOS-01".to_string(),
        year,
        status,
        quarter_amounts: quarters,
        month_amounts: None,
        total_override: None,
        total: quarters.sum(),
        created_at: now,
        updated_at: now,
    }
}

fn sample_records() -> Vec<BudgetActivity> {
    vec![
        activity(
            "Pelatihan guru",
            "Kurikulum",
            ActivityStatus::Approved,
            2026,
            QuarterAmounts::new(dec!(1_000_000), dec!(0), dec!(0), dec!(0)),
        ),
        activity(
            "Perbaikan atap kelas",
            "Sarana Prasarana",
            ActivityStatus::Draft,
            2026,
            QuarterAmounts::new(dec!(0), dec!(7_500_000), dec!(0), dec!(0)),
        ),
        activity(
            "Lomba literasi",
            "Kesiswaan",
            ActivityStatus::Submitted,
            2025,
            QuarterAmounts::new(dec!(0), dec!(0), dec!(2_000_000), dec!(500_000)),
        ),
    ]
}

fn arb_status() -> impl Strategy<Value = ActivityStatus> {
    prop::sample::select(ActivityStatus::ALL.to_vec())
}

fn arb_records() -> impl Strategy<Value = Vec<BudgetActivity>> {
    prop::collection::vec(
        (
            "[a-z]{3,12}",
            prop::sample::select(vec!["Kurikulum", "Kesiswaan", "Sarana Prasarana"]),
            arb_status(),
            2024i32..2028,
            0i64..10_000_000,
            0i64..10_000_000,
        )
            .prop_map(|(name, field, status, year, tw1, tw3)| {
                activity(
                    &name,
                    field,
                    status,
                    year,
                    QuarterAmounts::new(
                        Decimal::from(tw1),
                        Decimal::ZERO,
                        Decimal::from(tw3),
                        Decimal::ZERO,
                    ),
                )
            }),
        0..20,
    )
}

proptest! {
    /// An empty filter is the identity: same records, same order.
    #[test]
    fn test_empty_filter_is_identity(records in arb_records()) {
        let filter = ActivityFilter::default();
        prop_assert!(filter.is_empty());
        prop_assert_eq!(filter.apply(&records), records);
    }

    /// Filtering twice with the same criteria equals filtering once.
    #[test]
    fn test_filter_is_idempotent(
        records in arb_records(),
        status in arb_status(),
        year in 2024i32..2028,
    ) {
        let filter = ActivityFilter::new()
            .with_status(status)
            .with_year(year)
            .with_period(Period::Quarterly(Quarter::Tw1));

        let once = filter.apply(&records);
        let twice = filter.apply(&once);
        prop_assert_eq!(once, twice);
    }

    /// Every record the filter keeps actually satisfies the criteria.
    #[test]
    fn test_kept_records_satisfy_criteria(
        records in arb_records(),
        status in arb_status(),
    ) {
        let filter = ActivityFilter::new().with_status(status);
        for record in filter.apply(&records) {
            prop_assert_eq!(record.status, status);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = sample_records();

        let by_name = ActivityFilter::new().with_search("PELATIHAN");
        assert_eq!(by_name.apply(&records).len(), 1);

        let by_field = ActivityFilter::new().with_search("sarana");
        assert_eq!(by_field.apply(&records).len(), 1);

        let mut with_description = sample_records();
        with_description[0].description = Some("Workshop kurikulum merdeka".to_string());
        let by_description = ActivityFilter::new().with_search("merdeka");
        assert_eq!(by_description.apply(&with_description).len(), 1);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let records = sample_records();
        let filter = ActivityFilter::new().with_search("");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records).len(), records.len());
    }

    #[test]
    fn test_status_and_year_are_exact() {
        let records = sample_records();

        let approved = ActivityFilter::new().with_status(ActivityStatus::Approved);
        assert_eq!(approved.apply(&records).len(), 1);

        let of_2025 = ActivityFilter::new().with_year(2025);
        let kept = of_2025.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].activity_name, "Lomba literasi");
    }

    #[test]
    fn test_quarterly_period_requires_positive_bucket() {
        let records = sample_records();

        let tw2 = ActivityFilter::new().with_period(Period::Quarterly(Quarter::Tw2));
        let kept = tw2.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].activity_name, "Perbaikan atap kelas");

        // Nothing planned in TW1 for the second and third record.
        let tw1 = ActivityFilter::new().with_period(Period::Quarterly(Quarter::Tw1));
        assert_eq!(tw1.apply(&records).len(), 1);
    }

    #[test]
    fn test_monthly_period_uses_month_buckets_when_present() {
        let mut record = activity(
            "Kegiatan bulanan",
            "Kurikulum",
            ActivityStatus::Draft,
            2026,
            QuarterAmounts::new(dec!(9_000), dec!(0), dec!(0), dec!(0)),
        );
        let mut months = MonthAmounts::default();
        months.0[4] = dec!(250_000); // Mei
        record.month_amounts = Some(months);

        let mei = ActivityFilter::new().with_period(Period::Monthly(Month::new(5).unwrap()));
        assert_eq!(mei.apply(std::slice::from_ref(&record)).len(), 1);

        // Januari is in TW1 which has a quarterly amount, but the monthly
        // buckets exist and Januari's bucket is zero.
        let januari = ActivityFilter::new().with_period(Period::Monthly(Month::new(1).unwrap()));
        assert!(januari.apply(std::slice::from_ref(&record)).is_empty());
    }

    #[test]
    fn test_monthly_period_falls_back_to_containing_quarter() {
        let records = sample_records();

        // "Perbaikan atap kelas" has no month buckets and plans TW2; Mei
        // belongs to TW2.
        let mei = ActivityFilter::new().with_period(Period::Monthly(Month::new(5).unwrap()));
        let kept = mei.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].activity_name, "Perbaikan atap kelas");
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let records = sample_records();

        let filter = ActivityFilter::new()
            .with_search("a")
            .with_year(2026)
            .with_status(ActivityStatus::Draft);
        let kept = filter.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].activity_name, "Perbaikan atap kelas");

        // Same criteria, contradictory year: nothing passes.
        let none = ActivityFilter::new()
            .with_search("a")
            .with_year(2024)
            .with_status(ActivityStatus::Draft);
        assert!(none.apply(&records).is_empty());
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let records = sample_records();
        let before = records.clone();
        let _ = ActivityFilter::new()
            .with_status(ActivityStatus::Approved)
            .apply(&records);
        assert_eq!(records, before);
    }
}
