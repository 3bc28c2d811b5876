//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for employee records.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every statement is parameterized; caller-controlled text never reaches
//!   SQL source.
//! - Repository APIs return semantic errors (`NotFound`, `InvalidId`) in
//!   addition to DB transport errors.

pub mod employee_repo;
