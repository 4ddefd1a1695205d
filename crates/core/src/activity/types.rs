//! Activity data types.

use chrono::{DateTime, Utc};
use rkas_shared::types::ActivityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::period::{Month, Quarter};

/// Activity status in the planning lifecycle.
///
/// Transitions are externally driven: callers set the status directly, there
/// is no workflow engine in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Activity is being drafted.
    Draft,
    /// Activity has been submitted for review.
    Submitted,
    /// Activity has been approved.
    Approved,
    /// Activity has been rejected.
    Rejected,
}

impl ActivityStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::Submitted, Self::Approved, Self::Rejected];

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if the activity counts toward completion figures.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four quarterly planning buckets of an activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterAmounts {
    /// TW1 amount.
    pub tw1: Decimal,
    /// TW2 amount.
    pub tw2: Decimal,
    /// TW3 amount.
    pub tw3: Decimal,
    /// TW4 amount.
    pub tw4: Decimal,
}

impl QuarterAmounts {
    /// Builds buckets from calendar-ordered values.
    #[must_use]
    pub const fn new(tw1: Decimal, tw2: Decimal, tw3: Decimal, tw4: Decimal) -> Self {
        Self { tw1, tw2, tw3, tw4 }
    }

    /// The bucket for a quarter.
    #[must_use]
    pub const fn get(&self, quarter: Quarter) -> Decimal {
        match quarter {
            Quarter::Tw1 => self.tw1,
            Quarter::Tw2 => self.tw2,
            Quarter::Tw3 => self.tw3,
            Quarter::Tw4 => self.tw4,
        }
    }

    /// Sum of all four buckets.
    #[must_use]
    pub fn sum(&self) -> Decimal {
        self.tw1 + self.tw2 + self.tw3 + self.tw4
    }

    /// The first quarter carrying a negative amount, if any.
    #[must_use]
    pub fn first_negative(&self) -> Option<Quarter> {
        Quarter::ALL
            .into_iter()
            .find(|quarter| self.get(*quarter).is_sign_negative())
    }
}

/// Optional twelve monthly planning buckets, the finer alternative to
/// quarters. Both bucket sets may coexist on one activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthAmounts(pub [Decimal; 12]);

impl MonthAmounts {
    /// The bucket for a month.
    #[must_use]
    pub const fn get(&self, month: Month) -> Decimal {
        self.0[month.index()]
    }

    /// Sum of all twelve buckets.
    #[must_use]
    pub fn sum(&self) -> Decimal {
        self.0.iter().copied().sum()
    }

    /// The first month carrying a negative amount, if any.
    #[must_use]
    pub fn first_negative(&self) -> Option<Month> {
        Month::all().find(|month| self.get(*month).is_sign_negative())
    }
}

/// One planned activity line (kegiatan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetActivity {
    /// Activity ID, assigned at creation, immutable.
    pub id: ActivityId,
    /// Activity name.
    pub activity_name: String,
    /// Optional subtitle shown under the name.
    pub description: Option<String>,
    /// Field of activity (bidang).
    pub field_of_activity: String,
    /// National education standard (standar) the activity maps to.
    pub standard: String,
    /// Funding source reference code (kode dana).
    pub funding_source: String,
    /// Budget year.
    pub year: i32,
    /// Current status.
    pub status: ActivityStatus,
    /// Quarterly planning buckets.
    pub quarter_amounts: QuarterAmounts,
    /// Optional monthly planning buckets.
    pub month_amounts: Option<MonthAmounts>,
    /// Manual total override; takes precedence over the computed sum while
    /// present.
    pub total_override: Option<Decimal>,
    /// Derived total (override or bucket sum).
    pub total: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl BudgetActivity {
    /// Derives the total per the override-or-sum rule.
    ///
    /// The override wins while present. Otherwise monthly buckets, being the
    /// finer granularity, win over quarterly buckets whenever they carry a
    /// positive sum.
    #[must_use]
    pub fn computed_total(&self) -> Decimal {
        if let Some(total) = self.total_override {
            return total;
        }
        if let Some(months) = &self.month_amounts {
            let month_sum = months.sum();
            if month_sum > Decimal::ZERO {
                return month_sum;
            }
        }
        self.quarter_amounts.sum()
    }
}

/// Input for creating a new activity.
///
/// New activities always start in `Draft`.
#[derive(Debug, Clone)]
pub struct CreateActivityInput {
    /// Activity name.
    pub activity_name: String,
    /// Optional subtitle.
    pub description: Option<String>,
    /// Field of activity (bidang).
    pub field_of_activity: String,
    /// National education standard.
    pub standard: String,
    /// Funding source reference code.
    pub funding_source: String,
    /// Budget year.
    pub year: i32,
    /// Quarterly planning buckets.
    pub quarter_amounts: QuarterAmounts,
    /// Optional monthly planning buckets.
    pub month_amounts: Option<MonthAmounts>,
    /// Optional manual total override.
    pub total_override: Option<Decimal>,
}

/// Input for partially updating an activity.
///
/// `None` leaves a field untouched; the double-`Option` fields distinguish
/// "leave alone" from "clear".
#[derive(Debug, Clone, Default)]
pub struct UpdateActivityInput {
    /// New activity name.
    pub activity_name: Option<String>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// New field of activity.
    pub field_of_activity: Option<String>,
    /// New national education standard.
    pub standard: Option<String>,
    /// New funding source code.
    pub funding_source: Option<String>,
    /// New budget year.
    pub year: Option<i32>,
    /// New status (externally driven, set directly).
    pub status: Option<ActivityStatus>,
    /// New quarterly buckets.
    pub quarter_amounts: Option<QuarterAmounts>,
    /// New monthly buckets (`Some(None)` removes them).
    pub month_amounts: Option<Option<MonthAmounts>>,
    /// New total override (`Some(None)` clears it, reverting to the sum).
    pub total_override: Option<Option<Decimal>>,
}
