//! Use-case services layered over the unit of work.
//!
//! # Responsibility
//! - Expose reporting and measurement workflows without leaking SQL.

pub mod analytics;
pub mod benchmark;
