use pretty_assertions::assert_eq;
use rowmap::nullable::{Text, Timestamptz, Uuid};
use tests::{text, timestamptz, uuid};

#[derive(Debug, rowmap::Row)]
struct UserRow {
    #[row("ID")]
    id: Uuid,
    #[row("Name")]
    name: Text,
    #[row("CreatedAt")]
    created_at: Timestamptz,
}

#[derive(Debug, PartialEq, rowmap::Model)]
struct User {
    #[row("ID")]
    id: String,
    #[row("Name")]
    name: Option<String>,
    #[row("CreatedAt")]
    created_at: String,
}

#[test]
fn uuid_text_and_timestamp_columns() {
    let row = UserRow {
        id: uuid("67e55044-10b1-426f-9247-bb680e5fe0c8"),
        name: text("Ann"),
        created_at: timestamptz("2024-01-02T03:04:05Z"),
    };

    let user: User = rowmap::map_one(&row).unwrap();

    assert_eq!(
        user,
        User {
            id: "67e55044-10b1-426f-9247-bb680e5fe0c8".to_string(),
            name: Some("Ann".to_string()),
            created_at: "2024-01-02T03:04:05Z".to_string(),
        }
    );
}

#[test]
fn null_columns_map_to_zero_values() {
    let row = UserRow {
        id: Uuid::null(),
        name: Text::null(),
        created_at: Timestamptz::null(),
    };

    let user: User = rowmap::map_one(&row).unwrap();

    assert_eq!(
        user,
        User {
            id: String::new(),
            name: None,
            created_at: String::new(),
        }
    );
}

#[test]
fn mapping_is_repeatable() {
    let row = UserRow {
        id: uuid("00000000-0000-0000-0000-000000000001"),
        name: text("Bo"),
        created_at: timestamptz("2024-06-30T23:59:59+05:30"),
    };

    let first: User = rowmap::map_one(&row).unwrap();
    let second: User = rowmap::map_one(&row).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.created_at, "2024-06-30T23:59:59+05:30");
}
