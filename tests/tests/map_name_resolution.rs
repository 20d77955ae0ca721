use rowmap::{nullable::Int4, Record, Value};
use tests::text;

#[derive(rowmap::Row)]
struct AccountRow {
    user_id: i64,
    display_name: rowmap::nullable::Text,
    login_count: Int4,
}

#[allow(non_snake_case)]
#[derive(Debug, PartialEq, rowmap::Model)]
struct Account {
    UserId: i64,
    #[row(name = "display_name")]
    name: Option<String>,
    login_count: Option<i32>,
    email: String,
}

#[test]
fn camel_case_field_falls_back_to_snake_case_source() {
    let row = AccountRow {
        user_id: 42,
        display_name: text("Ann"),
        login_count: Int4::new(3),
    };

    let account: Account = rowmap::map_one(&row).unwrap();

    assert_eq!(account.UserId, 42);
    assert_eq!(account.name.as_deref(), Some("Ann"));
    assert_eq!(account.login_count, Some(3));
}

#[test]
fn missing_source_field_keeps_zero_value() {
    let row = AccountRow {
        user_id: 1,
        display_name: text("x"),
        login_count: Int4::null(),
    };

    let account: Account = rowmap::map_one(&row).unwrap();

    assert_eq!(account.email, "");
    assert_eq!(account.login_count, None);
}

#[test]
fn exact_name_beats_fallback() {
    let record = Record::new()
        .with("user_id", 1i64)
        .with("UserId", 2i64);

    let account: Account = rowmap::map_one(&record).unwrap();
    assert_eq!(account.UserId, 2);
}

#[test]
fn camel_case_source_matches_snake_case_field() {
    let record = Record::new()
        .with("loginCount", Int4::new(9))
        .with("email", "ann@example.com");

    let account: Account = rowmap::map_one(&record).unwrap();

    assert_eq!(account.login_count, Some(9));
    assert_eq!(account.email, "ann@example.com");
}

#[test]
fn annotation_replaces_field_name() {
    // `name` is annotated with `display_name`, so a source `name` is ignored.
    let record = Record::new().with("name", "ignored");

    let account: Account = rowmap::map_one(&record).unwrap();
    assert_eq!(account.name, None);
}

#[derive(rowmap::Row)]
struct RenamedRow {
    #[row("UserId")]
    id: i64,
}

#[test]
fn row_annotation_renames_source_field() {
    let record = rowmap::Row::to_record(&RenamedRow { id: 5 });
    assert_eq!(record.get("UserId"), Some(&Value::I64(5)));

    let account: Account = rowmap::map_one(&RenamedRow { id: 5 }).unwrap();
    assert_eq!(account.UserId, 5);
}
