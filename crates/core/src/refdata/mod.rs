//! Master/reference data records.
//!
//! These back the reference CRUD screens: funding sources (dana),
//! accounting codes (rekening), line-item components (komponen), fields of
//! activity (bidang), and national education standards (standar).
//! Uniqueness of codes and names is the store adapter's concern; this
//! module only validates record shape at the boundary.

pub mod error;
pub mod types;

pub use error::RefDataError;
pub use types::{
    AccountingCode, FieldOfActivity, FundingSource, LineItemComponent, NationalStandard,
    UserPreference,
};
