//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the staffbook core end-to-end against a throwaway database
//!   with fixed sample records.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use staffbook_core::{
    open_db_in_memory, EmployeeBuilder, EmployeeSelection, EmployeeService, NewEmployee,
    SqliteEmployeeRepository,
};
use std::error::Error;

fn sample(name: &str, last_name: &str, gender: i64, city: &str) -> Result<NewEmployee, Box<dyn Error>> {
    let fields = EmployeeBuilder::new()
        .name(name)
        .last_name(last_name)
        .birth_date(
            NaiveDate::from_ymd_opt(1992, 3, 1)
                .ok_or("invalid sample date")?
                .and_hms_opt(9, 0, 0)
                .ok_or("invalid sample time")?,
        )
        .gender(gender)
        .birth_city(city)
        .build()?;
    Ok(fields)
}

fn main() -> Result<(), Box<dyn Error>> {
    let conn = open_db_in_memory()?;
    let service = EmployeeService::new(SqliteEmployeeRepository::new(&conn));

    let first = service.create(sample("test", "lnTest", 0, "testCity")?)?;
    service.create(sample("test2", "lnTest2", 0, "testCity2")?)?;
    service.create(sample("test3", "lnTest3", 1, "testCity3")?)?;

    let loaded = service.load(first.id)?;
    let view = loaded.formatted(true, true)?;
    println!("employee {} => {}", loaded.id, describe_view(&view));

    let selection = EmployeeSelection::select(service.repository(), first.id, "!=")?;
    println!("selection ids != {} => {:?}", first.id, selection.ids());
    for employee in selection.list_employees()? {
        println!("listed employee {} {} {}", employee.id, employee.name, employee.birth_city);
    }

    selection.delete_all()?;
    println!("deleted {} employees", selection.ids().len());

    Ok(())
}

fn describe_view(view: &staffbook_core::EmployeeView) -> String {
    format!(
        "{} {} (birthDate {:?}, gender {:?}, born in {})",
        view.name, view.last_name, view.birth_date, view.gender, view.birth_city
    )
}
