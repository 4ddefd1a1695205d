//! Property-based and unit tests for the allocation store.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::store::AllocationStore;
use super::types::{
    AllocationStatus, CreateAllocationInput, UpdateAllocationInput,
};
use crate::period::{Period, Quarter};

fn create_input(allocated: Decimal, used: Decimal) -> CreateAllocationInput {
    CreateAllocationInput {
        activity: "Operasional laboratorium".to_string(),
        field_of_activity: "Sarana Prasarana".to_string(),
        standard: "Standar Sarana dan Prasarana".to_string(),
        allocated_budget: allocated,
        used_budget: used,
        period: Period::Quarterly(Quarter::Tw1),
        year: 2026,
        responsible: "Kepala Sekolah".to_string(),
    }
}

proptest! {
    /// Status is a pure function of the usage ratio.
    #[test]
    fn test_status_matches_ratio(
        allocated in 1i64..1_000_000_000,
        used in 0i64..1_000_000_000,
    ) {
        let allocated = Decimal::from(allocated);
        let used = Decimal::from(used);

        let status = AllocationStatus::from_usage(used, allocated);
        let ratio = used / allocated;

        if ratio > dec!(0.95) {
            prop_assert_eq!(status, AllocationStatus::OverBudget);
        } else if ratio < dec!(0.50) {
            prop_assert_eq!(status, AllocationStatus::UnderBudget);
        } else {
            prop_assert_eq!(status, AllocationStatus::OnTrack);
        }
    }

    /// Remaining budget is always allocated minus used, even when negative.
    #[test]
    fn test_remaining_is_allocated_minus_used(
        allocated in 0i64..1_000_000_000,
        used in 0i64..1_000_000_000,
    ) {
        let allocated = Decimal::from(allocated);
        let used = Decimal::from(used);

        let mut store = AllocationStore::new();
        let record = store.create(create_input(allocated, used)).unwrap();

        prop_assert_eq!(record.remaining_budget, allocated - used);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::allocation::error::AllocationError;
    use rkas_shared::types::AllocationId;
    use rstest::rstest;

    #[rstest]
    #[case(dec!(0.49), AllocationStatus::UnderBudget)]
    #[case(dec!(0.50), AllocationStatus::OnTrack)]
    #[case(dec!(0.95), AllocationStatus::OnTrack)]
    #[case(dec!(0.96), AllocationStatus::OverBudget)]
    fn test_status_boundaries(#[case] ratio: Decimal, #[case] expected: AllocationStatus) {
        let allocated = dec!(100);
        let used = allocated * ratio;
        assert_eq!(AllocationStatus::from_usage(used, allocated), expected);
    }

    #[test]
    fn test_zero_allocation_statuses() {
        assert_eq!(
            AllocationStatus::from_usage(dec!(0), dec!(0)),
            AllocationStatus::OnTrack
        );
        assert_eq!(
            AllocationStatus::from_usage(dec!(1), dec!(0)),
            AllocationStatus::OverBudget
        );
    }

    #[test]
    fn test_create_derives_fields() {
        let mut store = AllocationStore::new();
        let record = store
            .create(create_input(dec!(100_000_000), dec!(96_000_000)))
            .unwrap();

        assert_eq!(record.status, AllocationStatus::OverBudget);
        assert_eq!(record.remaining_budget, dec!(4_000_000));
    }

    #[test]
    fn test_update_recomputes_derived_fields() {
        let mut store = AllocationStore::new();
        let record = store
            .create(create_input(dec!(10_000_000), dec!(2_000_000)))
            .unwrap();
        assert_eq!(record.status, AllocationStatus::UnderBudget);

        let updated = store
            .update(
                record.id,
                UpdateAllocationInput {
                    used_budget: Some(dec!(7_000_000)),
                    ..UpdateAllocationInput::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, AllocationStatus::OnTrack);
        assert_eq!(updated.remaining_budget, dec!(3_000_000));
        assert!(updated.last_updated >= record.last_updated);
    }

    #[test]
    fn test_create_rejects_negative_amounts() {
        let mut store = AllocationStore::new();
        let result = store.create(create_input(dec!(-1), dec!(0)));
        assert!(matches!(
            result,
            Err(AllocationError::NegativeAmount("allocated_budget"))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_empty_activity() {
        let mut store = AllocationStore::new();
        let mut input = create_input(dec!(100), dec!(0));
        input.activity = " ".to_string();
        assert!(matches!(
            store.create(input),
            Err(AllocationError::EmptyField("activity"))
        ));
    }

    #[test]
    fn test_delete_semantics() {
        let mut store = AllocationStore::new();
        let record = store.create(create_input(dec!(100), dec!(50))).unwrap();

        assert!(matches!(
            store.delete(AllocationId::new()),
            Err(AllocationError::NotFound(_))
        ));
        assert_eq!(store.len(), 1);

        store.delete(record.id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.delete(record.id),
            Err(AllocationError::NotFound(_))
        ));
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AllocationStatus::OverBudget).unwrap(),
            "\"over-budget\""
        );
        assert_eq!(AllocationStatus::UnderBudget.as_str(), "under-budget");
    }
}
