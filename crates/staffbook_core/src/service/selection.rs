//! Bulk operations over an id set selected by a comparison predicate.
//!
//! # Responsibility
//! - Run one range query at construction and hold the resulting id list.
//! - Offer bulk read and bulk delete over that list.
//!
//! # Invariants
//! - The operator text is validated against the closed set before any query
//!   is issued.
//! - Bulk reads skip ids that no longer resolve; bulk deletes are fail-fast
//!   and leave earlier deletions in place.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{ComparisonOp, EmployeeRepository, RepoError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Selection and bulk-operation error.
#[derive(Debug)]
pub enum SelectionError {
    /// Operator text outside the supported set `<`, `>`, `!=`.
    UnsupportedOperator(String),
    /// The range query matched no ids; bulk operations have nothing to act on.
    EmptyIdList,
    Repo(RepoError),
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperator(op) => {
                write!(f, "provided operator `{op}` is not supported")
            }
            Self::EmptyIdList => write!(f, "id list is empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SelectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::UnsupportedOperator(_) | Self::EmptyIdList => None,
        }
    }
}

impl From<RepoError> for SelectionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type SelectionResult<T> = Result<T, SelectionError>;

/// Id set selected by one comparison predicate, with bulk read/delete.
#[derive(Debug)]
pub struct EmployeeSelection<'repo, R: EmployeeRepository> {
    repo: &'repo R,
    ids: Vec<EmployeeId>,
}

impl<'repo, R: EmployeeRepository> EmployeeSelection<'repo, R> {
    /// Validates the operator text and runs the range query once.
    ///
    /// # Errors
    /// - `UnsupportedOperator` before any query when the text is outside
    ///   `<`, `>`, `!=`.
    /// - `Repo` when the range query itself fails.
    pub fn select(repo: &'repo R, number: i64, operator: &str) -> SelectionResult<Self> {
        let op = ComparisonOp::parse(operator)
            .ok_or_else(|| SelectionError::UnsupportedOperator(operator.to_string()))?;

        let ids = repo.find_ids(number, op)?;
        Ok(Self { repo, ids })
    }

    /// Ids captured at selection time, in ascending order.
    pub fn ids(&self) -> &[EmployeeId] {
        &self.ids
    }

    /// Fetches every selected employee that still exists.
    ///
    /// Ids deleted between selection and fetch are skipped rather than
    /// aborting the batch; storage failures still propagate.
    pub fn list_employees(&self) -> SelectionResult<Vec<Employee>> {
        if self.ids.is_empty() {
            return Err(SelectionError::EmptyIdList);
        }

        let mut employees = Vec::with_capacity(self.ids.len());
        for &id in &self.ids {
            match self.repo.get(id)? {
                Some(employee) => employees.push(employee),
                None => {
                    warn!("event=selection_read module=service status=skip id={id}");
                }
            }
        }

        Ok(employees)
    }

    /// Deletes every selected id, in order, fail-fast.
    ///
    /// The first failing delete aborts the loop; ids deleted before the
    /// failure stay deleted. Callers that need all-or-nothing semantics
    /// must wrap this in their own transaction.
    pub fn delete_all(&self) -> SelectionResult<()> {
        if self.ids.is_empty() {
            return Err(SelectionError::EmptyIdList);
        }

        for &id in &self.ids {
            self.repo.delete(id)?;
        }

        Ok(())
    }
}
