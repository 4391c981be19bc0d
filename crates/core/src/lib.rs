//! Shared domain vocabulary for the InnovaLex dashboard.
//!
//! This crate has no I/O: entity enumerations, status constants, labels,
//! case-number generation and display helpers. Rows and remote access live
//! in `innovalex-db`.

pub mod alert;
pub mod document;
pub mod error;
pub mod format;
pub mod ip_asset;
pub mod legal_case;
pub mod severity;
pub mod types;
