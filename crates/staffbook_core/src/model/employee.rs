//! Employee record, builder and display formatting.
//!
//! # Responsibility
//! - Define the persisted employee shape and its insert-time counterpart.
//! - Validate field sets atomically before they reach storage.
//! - Provide the read-only display projection with optional age/gender
//!   formatting.
//!
//! # Invariants
//! - `NewEmployee` can only be produced through `EmployeeBuilder::build`,
//!   so storage never sees a partial or invalid field set.
//! - `gender` is a raw binary value (0 = female, 1 = male) everywhere; the
//!   label conversion is the single place that interprets it.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned employee identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

pub const GENDER_FEMALE: i64 = 0;
pub const GENDER_MALE: i64 = 1;

/// Canonical persisted employee record (the 6-field mapping).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Auto-increment primary key; immutable once assigned.
    pub id: EmployeeId,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDateTime,
    /// Raw binary value, 0 or 1.
    pub gender: i64,
    #[serde(rename = "birthCity")]
    pub birth_city: String,
}

/// Validated field set for an employee that has not been persisted yet.
///
/// Produced exclusively by [`EmployeeBuilder::build`]; the id is assigned by
/// storage on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub last_name: String,
    pub birth_date: NaiveDateTime,
    pub gender: i64,
    pub birth_city: String,
}

impl NewEmployee {
    /// Attaches the storage-assigned id, yielding the persisted record shape.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            gender: self.gender,
            birth_city: self.birth_city,
        }
    }
}

/// Validation failure for employee field sets and conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// A required field was never supplied to the builder.
    MissingField(&'static str),
    /// Gender value outside the binary domain.
    InvalidGender(i64),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "employee field `{field}` is not set"),
            Self::InvalidGender(value) => write!(f, "invalid gender binary value {value}"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Accumulates employee fields and validates them atomically.
///
/// Replaces setter chaining on a live record: the builder is the only write
/// path, and `build` either yields a complete [`NewEmployee`] or the first
/// validation failure.
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    name: Option<String>,
    last_name: Option<String>,
    birth_date: Option<NaiveDateTime>,
    gender: Option<i64>,
    birth_city: Option<String>,
}

impl EmployeeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn birth_date(mut self, value: NaiveDateTime) -> Self {
        self.birth_date = Some(value);
        self
    }

    pub fn gender(mut self, value: i64) -> Self {
        self.gender = Some(value);
        self
    }

    pub fn birth_city(mut self, value: impl Into<String>) -> Self {
        self.birth_city = Some(value.into());
        self
    }

    /// Validates the accumulated fields and produces an immutable record.
    ///
    /// # Errors
    /// - `MissingField` when any of the five fields was never supplied.
    /// - `InvalidGender` when gender is not 0 or 1.
    pub fn build(self) -> Result<NewEmployee, EmployeeValidationError> {
        let name = self
            .name
            .ok_or(EmployeeValidationError::MissingField("name"))?;
        let last_name = self
            .last_name
            .ok_or(EmployeeValidationError::MissingField("lastName"))?;
        let birth_date = self
            .birth_date
            .ok_or(EmployeeValidationError::MissingField("birthDate"))?;
        let gender = self
            .gender
            .ok_or(EmployeeValidationError::MissingField("gender"))?;
        let birth_city = self
            .birth_city
            .ok_or(EmployeeValidationError::MissingField("birthCity"))?;

        if gender != GENDER_FEMALE && gender != GENDER_MALE {
            return Err(EmployeeValidationError::InvalidGender(gender));
        }

        Ok(NewEmployee {
            name,
            last_name,
            birth_date,
            gender,
            birth_city,
        })
    }
}

/// Converts a binary gender value to its display label.
///
/// # Errors
/// - `InvalidGender` for any value other than 0 or 1.
pub fn gender_label(binary: i64) -> Result<&'static str, EmployeeValidationError> {
    match binary {
        GENDER_FEMALE => Ok("Female"),
        GENDER_MALE => Ok("Male"),
        other => Err(EmployeeValidationError::InvalidGender(other)),
    }
}

/// Whole calendar years between today and the given birth date.
///
/// Truncates to the last passed anniversary; a birthday tomorrow still
/// counts the previous year.
pub fn age_from_birth_date(birth_date: NaiveDateTime) -> u32 {
    age_at(birth_date, Local::now().date_naive())
}

/// Deterministic form of [`age_from_birth_date`] for a fixed "today".
pub fn age_at(birth_date: NaiveDateTime, today: NaiveDate) -> u32 {
    today.years_since(birth_date.date()).unwrap_or(0)
}

/// Birth date slot of a display view, either verbatim or as computed age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BirthDateView {
    Date(NaiveDateTime),
    Age(u32),
}

/// Gender slot of a display view, either raw binary or its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenderView {
    Binary(i64),
    Label(&'static str),
}

/// Read-only display projection of an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeView {
    pub id: EmployeeId,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: BirthDateView,
    pub gender: GenderView,
    #[serde(rename = "birthCity")]
    pub birth_city: String,
}

impl Employee {
    /// Copies the record into a display view, optionally replacing the birth
    /// date with the computed age and the gender with its label.
    ///
    /// # Errors
    /// - `InvalidGender` when label formatting is requested and the stored
    ///   gender value is outside the binary domain.
    pub fn formatted(
        &self,
        age_as_years: bool,
        gender_as_label: bool,
    ) -> Result<EmployeeView, EmployeeValidationError> {
        let birth_date = if age_as_years {
            BirthDateView::Age(age_from_birth_date(self.birth_date))
        } else {
            BirthDateView::Date(self.birth_date)
        };

        let gender = if gender_as_label {
            GenderView::Label(gender_label(self.gender)?)
        } else {
            GenderView::Binary(self.gender)
        };

        Ok(EmployeeView {
            id: self.id,
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            birth_date,
            gender,
            birth_city: self.birth_city.clone(),
        })
    }
}
