//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD and range-query primitives over the `employees` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Negative ids are rejected before any statement is prepared.
//! - The comparison operator is a closed enum mapped to fixed SQL templates,
//!   never interpolated caller text.
//! - Absent rows surface as `Ok(None)`, not as a default-initialized record.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical timestamp format used for the `birthDate` column.
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    lastName,
    birthDate,
    gender,
    birthCity
FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Negative id rejected before touching the store.
    InvalidId(i64),
    /// A targeted statement affected zero rows.
    NotFound(EmployeeId),
    Db(DbError),
    /// A persisted row failed to parse back into the domain shape.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "employee id {id} is less than 0"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidId(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Closed set of supported range-query predicates over employee ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    LessThan,
    GreaterThan,
    NotEqual,
}

impl ComparisonOp {
    /// Parses the textual operator form; anything outside `<`, `>`, `!=`
    /// is unsupported.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "<" => Some(Self::LessThan),
            ">" => Some(Self::GreaterThan),
            "!=" => Some(Self::NotEqual),
            _ => None,
        }
    }

    /// Fixed, fully parameterized WHERE clause for this predicate.
    fn sql_condition(self) -> &'static str {
        match self {
            Self::LessThan => "id < ?1",
            Self::GreaterThan => "id > ?1",
            Self::NotEqual => "id != ?1",
        }
    }
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::NotEqual => "!=",
        };
        f.write_str(text)
    }
}

/// Repository interface for employee storage operations.
pub trait EmployeeRepository {
    fn insert(&self, employee: &NewEmployee) -> RepoResult<EmployeeId>;
    fn get(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    fn delete(&self, id: EmployeeId) -> RepoResult<()>;
    fn find_ids(&self, number: i64, op: ComparisonOp) -> RepoResult<Vec<EmployeeId>>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn insert(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        let birth_date = employee.birth_date.format(BIRTH_DATE_FORMAT).to_string();

        self.conn.execute(
            "INSERT INTO employees (name, lastName, birthDate, gender, birthCity)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                employee.name.as_str(),
                employee.last_name.as_str(),
                birth_date,
                employee.gender,
                employee.birth_city.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        if id < 0 {
            return Err(RepoError::InvalidId(id));
        }

        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<()> {
        if id < 0 {
            return Err(RepoError::InvalidId(id));
        }

        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn find_ids(&self, number: i64, op: ComparisonOp) -> RepoResult<Vec<EmployeeId>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id FROM employees WHERE {} ORDER BY id ASC;",
            op.sql_condition()
        ))?;

        let mut rows = stmt.query(params![number])?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next()? {
            ids.push(row.get(0)?);
        }

        Ok(ids)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let birth_date_text: String = row.get("birthDate")?;
    let birth_date = chrono::NaiveDateTime::parse_from_str(&birth_date_text, BIRTH_DATE_FORMAT)
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid timestamp `{birth_date_text}` in employees.birthDate"
            ))
        })?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        last_name: row.get("lastName")?,
        birth_date,
        gender: row.get("gender")?,
        birth_city: row.get("birthCity")?,
    })
}
