//! Core types shared across Faultline facilities
//!
//! This crate provides foundational types used by both the report engine
//! and its logging facility:
//!
//! - **Correlation types**: ReportId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::ReportId;
