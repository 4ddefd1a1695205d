//! Shared types, errors, and configuration for RKAS.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Rupiah formatting and parsing utilities
//! - Pagination types for table views
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
