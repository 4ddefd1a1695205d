//! Period types.
//!
//! RKAS planning follows the Indonesian budgeting convention: amounts are
//! bucketed per quarter (triwulan, TW1..TW4) or per calendar month. The
//! label mappings here are fixed lookup tables, never computed from dates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Granularity of the active period selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    /// Quarterly buckets (TW1..TW4).
    Quarterly,
    /// Monthly buckets (Januari..Desember).
    Monthly,
}

impl PeriodType {
    /// Returns the string representation of the period type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quarterly => "quarterly",
            Self::Monthly => "monthly",
        }
    }
}

/// A budget quarter (triwulan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quarter {
    /// TW1: Januari - Maret.
    Tw1,
    /// TW2: April - Juni.
    Tw2,
    /// TW3: Juli - September.
    Tw3,
    /// TW4: Oktober - Desember.
    Tw4,
}

impl Quarter {
    /// All quarters in calendar order.
    pub const ALL: [Self; 4] = [Self::Tw1, Self::Tw2, Self::Tw3, Self::Tw4];

    /// Quarter number, 1..=4.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Tw1 => 1,
            Self::Tw2 => 2,
            Self::Tw3 => 3,
            Self::Tw4 => 4,
        }
    }

    /// Short label ("TW1".."TW4").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tw1 => "TW1",
            Self::Tw2 => "TW2",
            Self::Tw3 => "TW3",
            Self::Tw4 => "TW4",
        }
    }

    /// Fixed three-month range label for display.
    #[must_use]
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Tw1 => "Januari - Maret",
            Self::Tw2 => "April - Juni",
            Self::Tw3 => "Juli - September",
            Self::Tw4 => "Oktober - Desember",
        }
    }

    /// Returns the quarter containing the given month.
    #[must_use]
    pub const fn containing(month: Month) -> Self {
        match month.get() {
            1..=3 => Self::Tw1,
            4..=6 => Self::Tw2,
            7..=9 => Self::Tw3,
            _ => Self::Tw4,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for a month number outside 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Month number out of range 1..=12: {0}")]
pub struct InvalidMonth(pub u8);

/// Indonesian month names, calendar order.
const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// A calendar month, 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a month from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` for 0 or anything above 12.
    pub const fn new(number: u8) -> Result<Self, InvalidMonth> {
        if matches!(number, 1..=12) {
            Ok(Self(number))
        } else {
            Err(InvalidMonth(number))
        }
    }

    /// The 1-based month number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-month bucket arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Indonesian month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Iterates all months in calendar order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=12).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidMonth;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A concrete period value: one quarter or one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum Period {
    /// A quarter.
    Quarterly(Quarter),
    /// A month.
    Monthly(Month),
}

impl Period {
    /// Display label for the period.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Quarterly(quarter) => {
                format!("{} ({})", quarter.label(), quarter.range_label())
            }
            Self::Monthly(month) => month.name().to_string(),
        }
    }
}

/// The period selection a user carries through the screens.
///
/// Both the quarter and the month selection persist independently; switching
/// the mode does not reset the inactive selection. Changing any part is an
/// atomic value update, there is no state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSelection {
    /// Which granularity is active.
    pub period_type: PeriodType,
    /// The quarter selection (kept while monthly mode is active).
    pub quarter: Quarter,
    /// The month selection (kept while quarterly mode is active).
    pub month: Month,
}

impl Default for PeriodSelection {
    fn default() -> Self {
        Self {
            period_type: PeriodType::Quarterly,
            quarter: Quarter::Tw1,
            month: Month(1),
        }
    }
}

impl PeriodSelection {
    /// Switches the active granularity, preserving both selections.
    #[must_use]
    pub const fn with_mode(mut self, period_type: PeriodType) -> Self {
        self.period_type = period_type;
        self
    }

    /// Replaces the quarter selection without touching the mode.
    #[must_use]
    pub const fn with_quarter(mut self, quarter: Quarter) -> Self {
        self.quarter = quarter;
        self
    }

    /// Replaces the month selection without touching the mode.
    #[must_use]
    pub const fn with_month(mut self, month: Month) -> Self {
        self.month = month;
        self
    }

    /// Projects the active mode into a concrete period value.
    #[must_use]
    pub const fn active_period(self) -> Period {
        match self.period_type {
            PeriodType::Quarterly => Period::Quarterly(self.quarter),
            PeriodType::Monthly => Period::Monthly(self.month),
        }
    }
}
