use chrono::NaiveDate;
use staffbook_core::{
    open_db_in_memory, ComparisonOp, Employee, EmployeeBuilder, EmployeeId, EmployeeRepository,
    EmployeeSelection, NewEmployee, RepoError, RepoResult, SelectionError,
    SqliteEmployeeRepository,
};

fn sample_fields(name: &str, gender: i64, city: &str) -> NewEmployee {
    EmployeeBuilder::new()
        .name(name)
        .last_name(format!("ln{name}"))
        .birth_date(
            NaiveDate::from_ymd_opt(1988, 2, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
        .gender(gender)
        .birth_city(city)
        .build()
        .unwrap()
}

/// Repository double that fails the test if any query is issued.
#[derive(Debug)]
struct UnreachableRepo;

impl EmployeeRepository for UnreachableRepo {
    fn insert(&self, _employee: &NewEmployee) -> RepoResult<EmployeeId> {
        panic!("no query expected");
    }

    fn get(&self, _id: EmployeeId) -> RepoResult<Option<Employee>> {
        panic!("no query expected");
    }

    fn delete(&self, _id: EmployeeId) -> RepoResult<()> {
        panic!("no query expected");
    }

    fn find_ids(&self, _number: i64, _op: ComparisonOp) -> RepoResult<Vec<EmployeeId>> {
        panic!("no query expected");
    }
}

#[test]
fn unsupported_operator_fails_before_any_query() {
    let repo = UnreachableRepo;

    let err = EmployeeSelection::select(&repo, 5, "<=").unwrap_err();
    assert!(matches!(
        err,
        SelectionError::UnsupportedOperator(op) if op == "<="
    ));
}

#[test]
fn not_equal_selection_captures_all_other_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    repo.insert(&sample_fields("test", 0, "testCity")).unwrap();
    repo.insert(&sample_fields("test2", 0, "testCity2")).unwrap();
    repo.insert(&sample_fields("test3", 1, "testCity3")).unwrap();

    let selection = EmployeeSelection::select(&repo, 2, "!=").unwrap();
    assert_eq!(selection.ids(), &[1, 3]);

    let employees = selection.list_employees().unwrap();
    let names: Vec<_> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["test", "test3"]);
}

#[test]
fn less_than_and_greater_than_selections() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    for i in 0..4 {
        repo.insert(&sample_fields(&format!("e{i}"), i % 2, "city"))
            .unwrap();
    }

    let below = EmployeeSelection::select(&repo, 3, "<").unwrap();
    assert_eq!(below.ids(), &[1, 2]);

    let above = EmployeeSelection::select(&repo, 2, ">").unwrap();
    assert_eq!(above.ids(), &[3, 4]);
}

#[test]
fn empty_selection_rejects_bulk_operations() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let selection = EmployeeSelection::select(&repo, 0, ">").unwrap();
    assert!(selection.ids().is_empty());

    assert!(matches!(
        selection.list_employees(),
        Err(SelectionError::EmptyIdList)
    ));
    assert!(matches!(
        selection.delete_all(),
        Err(SelectionError::EmptyIdList)
    ));
}

#[test]
fn list_skips_ids_deleted_after_selection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    repo.insert(&sample_fields("a", 0, "city")).unwrap();
    repo.insert(&sample_fields("b", 1, "city")).unwrap();
    repo.insert(&sample_fields("c", 0, "city")).unwrap();

    let selection = EmployeeSelection::select(&repo, 0, ">").unwrap();
    repo.delete(2).unwrap();

    let employees = selection.list_employees().unwrap();
    let ids: Vec<_> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn delete_all_removes_every_selected_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    repo.insert(&sample_fields("a", 0, "city")).unwrap();
    repo.insert(&sample_fields("b", 1, "city")).unwrap();

    let selection = EmployeeSelection::select(&repo, 0, ">").unwrap();
    selection.delete_all().unwrap();

    assert!(repo.get(1).unwrap().is_none());
    assert!(repo.get(2).unwrap().is_none());
}

#[test]
fn delete_all_is_fail_fast_with_partial_effect() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    for name in ["a", "b", "c", "d"] {
        repo.insert(&sample_fields(name, 0, "city")).unwrap();
    }

    // Selection holds [2, 3, 4]; id 3 disappears before the bulk delete.
    let selection = EmployeeSelection::select(&repo, 1, ">").unwrap();
    assert_eq!(selection.ids(), &[2, 3, 4]);
    repo.delete(3).unwrap();

    let err = selection.delete_all().unwrap_err();
    assert!(matches!(
        err,
        SelectionError::Repo(RepoError::NotFound(3))
    ));

    // The loop aborted at id 3: 2 is gone, 4 was never reached.
    assert!(repo.get(2).unwrap().is_none());
    assert!(repo.get(4).unwrap().is_some());
}
