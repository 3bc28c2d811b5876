use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use staffbook_core::{
    age_at, age_from_birth_date, gender_label, BirthDateView, Employee, EmployeeBuilder,
    EmployeeValidationError, GenderView,
};

fn birth(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn sample_employee(gender: i64) -> Employee {
    Employee {
        id: 7,
        name: "test".to_string(),
        last_name: "lnTest".to_string(),
        birth_date: birth(1990, 6, 15),
        gender,
        birth_city: "testCity".to_string(),
    }
}

#[test]
fn gender_label_maps_binary_values() {
    assert_eq!(gender_label(0).unwrap(), "Female");
    assert_eq!(gender_label(1).unwrap(), "Male");
}

#[test]
fn gender_label_rejects_out_of_domain_values() {
    for value in [-1, 2, 100] {
        let err = gender_label(value).unwrap_err();
        assert_eq!(err, EmployeeValidationError::InvalidGender(value));
    }
}

#[test]
fn age_counts_whole_calendar_years() {
    let d = birth(1990, 6, 15);
    assert_eq!(age_at(d, NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()), 30);
}

#[test]
fn age_truncates_until_anniversary_passes() {
    // Born 30 years and 1 day before "today": still 30, not 31.
    let d = birth(1990, 6, 14);
    assert_eq!(age_at(d, NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()), 30);

    // One day short of the 30th anniversary: still 29.
    let d = birth(1990, 6, 16);
    assert_eq!(age_at(d, NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()), 29);
}

#[test]
fn age_from_birth_date_agrees_with_fixed_today() {
    let today = Local::now().date_naive();
    let d = birth(today.year() - 30, today.month(), 15);
    assert_eq!(age_from_birth_date(d), age_at(d, today));
}

#[test]
fn builder_produces_complete_field_set() {
    let fields = EmployeeBuilder::new()
        .name("test")
        .last_name("lnTest")
        .birth_date(birth(1990, 6, 15))
        .gender(1)
        .birth_city("testCity")
        .build()
        .unwrap();

    assert_eq!(fields.name, "test");
    assert_eq!(fields.gender, 1);

    let employee = fields.into_employee(3);
    assert_eq!(employee.id, 3);
    assert_eq!(employee.last_name, "lnTest");
}

#[test]
fn builder_rejects_missing_fields() {
    let err = EmployeeBuilder::new()
        .name("test")
        .last_name("lnTest")
        .build()
        .unwrap_err();
    assert_eq!(err, EmployeeValidationError::MissingField("birthDate"));
}

#[test]
fn builder_rejects_invalid_gender_atomically() {
    let err = EmployeeBuilder::new()
        .name("test")
        .last_name("lnTest")
        .birth_date(birth(1990, 6, 15))
        .gender(2)
        .birth_city("testCity")
        .build()
        .unwrap_err();
    assert_eq!(err, EmployeeValidationError::InvalidGender(2));
}

#[test]
fn formatted_copies_fields_verbatim_by_default() {
    let employee = sample_employee(0);
    let view = employee.formatted(false, false).unwrap();

    assert_eq!(view.id, 7);
    assert_eq!(view.birth_date, BirthDateView::Date(employee.birth_date));
    assert_eq!(view.gender, GenderView::Binary(0));
    assert_eq!(view.birth_city, "testCity");
}

#[test]
fn formatted_replaces_birth_date_with_age() {
    let employee = sample_employee(1);
    let view = employee.formatted(true, false).unwrap();

    let expected = age_from_birth_date(employee.birth_date);
    assert_eq!(view.birth_date, BirthDateView::Age(expected));
    assert_eq!(view.gender, GenderView::Binary(1));
}

#[test]
fn formatted_replaces_gender_with_label() {
    let view = sample_employee(1).formatted(false, true).unwrap();
    assert_eq!(view.gender, GenderView::Label("Male"));
}

#[test]
fn formatted_rejects_invalid_stored_gender_when_labelling() {
    let err = sample_employee(3).formatted(false, true).unwrap_err();
    assert_eq!(err, EmployeeValidationError::InvalidGender(3));

    // Without label formatting the raw value passes through untouched.
    let view = sample_employee(3).formatted(false, false).unwrap();
    assert_eq!(view.gender, GenderView::Binary(3));
}

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let employee = sample_employee(0);
    let json = serde_json::to_value(&employee).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "test");
    assert_eq!(json["lastName"], "lnTest");
    assert_eq!(json["gender"], 0);
    assert_eq!(json["birthCity"], "testCity");

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn formatted_view_serializes_age_and_label_as_plain_values() {
    let view = sample_employee(1).formatted(true, true).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert!(json["birthDate"].is_u64());
    assert_eq!(json["gender"], "Male");
}
