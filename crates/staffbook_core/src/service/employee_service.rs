//! Employee use-case service.
//!
//! # Responsibility
//! - Provide load/create/remove entry points over a repository.
//! - Wrap storage failures into the save/delete error kinds callers expect.
//!
//! # Invariants
//! - The service never bypasses repository validation or parameter binding.
//! - Records are plain values; the storage handle lives here, not inside
//!   the record.

use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Employee operation error at the service boundary.
#[derive(Debug)]
pub enum ServiceError {
    /// Lookup yielded no row for the given id.
    NotFound(EmployeeId),
    /// Persisting a new record failed.
    SaveFailed(RepoError),
    /// Deleting a record failed.
    DeleteFailed(RepoError),
    /// Any other repository failure, passed through unchanged.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no employee with id {id}"),
            Self::SaveFailed(err) => write!(f, "can't save employee: {err}"),
            Self::DeleteFailed(err) => write!(f, "can't delete employee: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::SaveFailed(err) | Self::DeleteFailed(err) | Self::Repo(err) => Some(err),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case service wrapper for employee operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads an existing employee by id.
    ///
    /// # Errors
    /// - `NotFound` when no row matches the id.
    /// - `Repo` for invalid ids and storage failures.
    pub fn load(&self, id: EmployeeId) -> ServiceResult<Employee> {
        match self.repo.get(id) {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) => Err(ServiceError::NotFound(id)),
            Err(err) => Err(ServiceError::Repo(err)),
        }
    }

    /// Persists a validated field set and returns the stored record with its
    /// storage-assigned id.
    pub fn create(&self, fields: NewEmployee) -> ServiceResult<Employee> {
        let id = self
            .repo
            .insert(&fields)
            .map_err(ServiceError::SaveFailed)?;
        Ok(fields.into_employee(id))
    }

    /// Deletes an employee by explicit id.
    ///
    /// The id is a parameter rather than an attribute of a live record:
    /// records are plain values here and carry no storage handle, so any id
    /// can be targeted regardless of what is currently loaded.
    pub fn remove(&self, id: EmployeeId) -> ServiceResult<()> {
        self.repo.delete(id).map_err(ServiceError::DeleteFailed)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
