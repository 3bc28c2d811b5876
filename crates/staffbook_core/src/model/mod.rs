//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record shared by storage and callers.
//! - Host the pure conversions (gender label, birth date to age).
//!
//! # Invariants
//! - `id` is assigned by storage on insert and immutable afterwards.
//! - A persisted gender value is always 0 or 1; label conversion rejects
//!   anything else.

pub mod employee;
