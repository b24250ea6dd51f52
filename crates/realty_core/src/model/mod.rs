//! Brokerage domain records.
//!
//! # Responsibility
//! - Define one plain record per storage table.
//! - Own field-level validation; storage-level rules stay in `repo`.
//!
//! # Invariants
//! - Records reference each other by key, never by owned sub-objects.
//! - A record that fails `validate()` is never written.

pub mod contact;
pub mod contract;
pub mod estate;
pub mod link;
pub mod person;
pub mod price;
pub mod settlement;
pub mod validation;
