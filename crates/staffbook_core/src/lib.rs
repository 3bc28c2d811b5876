//! Core employee data-access logic for staffbook.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{ensure_schema, open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::employee::{
    age_at, age_from_birth_date, gender_label, BirthDateView, Employee, EmployeeBuilder,
    EmployeeId, EmployeeValidationError, EmployeeView, GenderView, NewEmployee,
};
pub use repo::employee_repo::{
    ComparisonOp, EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use service::employee_service::{EmployeeService, ServiceError, ServiceResult};
pub use service::selection::{EmployeeSelection, SelectionError, SelectionResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
