//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `ActivityId` where an
//! `AllocationId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(ActivityId, "Unique identifier for a budget activity (kegiatan).");
typed_id!(
    AllocationId,
    "Unique identifier for a budget allocation item."
);
typed_id!(
    FundingSourceId,
    "Unique identifier for a funding source (dana)."
);
typed_id!(
    AccountingCodeId,
    "Unique identifier for an accounting code (rekening)."
);
typed_id!(
    ComponentId,
    "Unique identifier for a line-item component (komponen)."
);
typed_id!(
    FieldOfActivityId,
    "Unique identifier for a field of activity (bidang)."
);
typed_id!(
    StandardId,
    "Unique identifier for a national education standard (standar)."
);
typed_id!(PreferenceId, "Unique identifier for a user preference record.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_ids_are_unique() {
        let a = ActivityId::new();
        let b = ActivityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_roundtrip_through_string() {
        let id = AllocationId::new();
        let parsed = AllocationId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::now_v7();
        let id = FundingSourceId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_invalid_string_rejected() {
        assert!(ActivityId::from_str("not-a-uuid").is_err());
    }
}
