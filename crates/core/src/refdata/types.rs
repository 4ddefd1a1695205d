//! Reference data types.

use chrono::{DateTime, Utc};
use rkas_shared::types::{
    AccountingCodeId, ComponentId, FieldOfActivityId, FundingSourceId, PreferenceId, StandardId,
};
use serde::{Deserialize, Serialize};

use super::error::RefDataError;
use crate::period::PeriodSelection;

/// A funding source (kode dana), e.g. BOS or BOP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingSource {
    /// Funding source ID.
    pub id: FundingSourceId,
    /// Unique reference code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

impl FundingSource {
    /// Creates a funding source, trimming and validating the code and name.
    ///
    /// # Errors
    ///
    /// Returns `RefDataError::EmptyField` for an empty code or name.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, RefDataError> {
        Ok(Self {
            id: FundingSourceId::new(),
            code: required("code", code.into())?,
            name: required("name", name.into())?,
            description,
        })
    }
}

/// An accounting code (kode rekening).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingCode {
    /// Accounting code ID.
    pub id: AccountingCodeId,
    /// Unique reference code.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl AccountingCode {
    /// Creates an accounting code, trimming and validating both fields.
    ///
    /// # Errors
    ///
    /// Returns `RefDataError::EmptyField` for an empty code or name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, RefDataError> {
        Ok(Self {
            id: AccountingCodeId::new(),
            code: required("code", code.into())?,
            name: required("name", name.into())?,
        })
    }
}

/// A line-item component (komponen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemComponent {
    /// Component ID.
    pub id: ComponentId,
    /// Unique reference code.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl LineItemComponent {
    /// Creates a component, trimming and validating both fields.
    ///
    /// # Errors
    ///
    /// Returns `RefDataError::EmptyField` for an empty code or name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, RefDataError> {
        Ok(Self {
            id: ComponentId::new(),
            code: required("code", code.into())?,
            name: required("name", name.into())?,
        })
    }
}

/// A field of activity (bidang), e.g. Kurikulum or Kesiswaan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOfActivity {
    /// Field ID.
    pub id: FieldOfActivityId,
    /// Unique display name.
    pub name: String,
}

impl FieldOfActivity {
    /// Creates a field of activity, trimming and validating the name.
    ///
    /// # Errors
    ///
    /// Returns `RefDataError::EmptyField` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, RefDataError> {
        Ok(Self {
            id: FieldOfActivityId::new(),
            name: required("name", name.into())?,
        })
    }
}

/// A national education standard (standar nasional pendidikan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalStandard {
    /// Standard ID.
    pub id: StandardId,
    /// Unique display name.
    pub name: String,
}

impl NationalStandard {
    /// Creates a national standard, trimming and validating the name.
    ///
    /// # Errors
    ///
    /// Returns `RefDataError::EmptyField` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, RefDataError> {
        Ok(Self {
            id: StandardId::new(),
            name: required("name", name.into())?,
        })
    }
}

/// A user's persisted period selection.
///
/// Keeping this per user is what lets the inactive quarter/month selection
/// survive across sessions, not just across mode switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreference {
    /// Preference record ID.
    pub id: PreferenceId,
    /// Owner user name.
    pub owner: String,
    /// Persisted period selection.
    pub selection: PeriodSelection,
    /// Persisted budget year.
    pub year: i32,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl UserPreference {
    /// Creates a preference record for a user.
    ///
    /// # Errors
    ///
    /// Returns `RefDataError::EmptyField` for an empty owner.
    pub fn new(
        owner: impl Into<String>,
        selection: PeriodSelection,
        year: i32,
    ) -> Result<Self, RefDataError> {
        Ok(Self {
            id: PreferenceId::new(),
            owner: required("owner", owner.into())?,
            selection,
            year,
            updated_at: Utc::now(),
        })
    }

    /// Replaces the stored selection and stamps `updated_at`.
    pub fn remember(&mut self, selection: PeriodSelection, year: i32) {
        self.selection = selection;
        self.year = year;
        self.updated_at = Utc::now();
    }
}

fn required(field: &'static str, value: String) -> Result<String, RefDataError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RefDataError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
