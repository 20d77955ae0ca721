use pretty_assertions::assert_eq;
use rowmap::{
    nullable::{Bool, Float8, Int4, Text, Timestamptz, Uuid},
    Mapper, Record,
};
use tests::{text, timestamptz, uuid};

#[derive(rowmap::Row)]
struct ColumnsRow {
    id: Uuid,
    title: Text,
    ratio: Float8,
    count: Int4,
    active: Bool,
    seen_at: Timestamptz,
}

#[derive(Debug, Default, PartialEq, rowmap::Model)]
struct Columns {
    id: String,
    title: Option<String>,
    ratio: Option<f64>,
    count: Option<i32>,
    active: Option<bool>,
    seen_at: String,
}

#[test]
fn every_wrapper_maps_into_its_target() {
    let row = ColumnsRow {
        id: uuid("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11"),
        title: text("hello"),
        ratio: Float8::new(0.25),
        count: Int4::new(-4),
        active: Bool::new(false),
        seen_at: timestamptz("2023-11-14T22:13:20.750Z"),
    };

    let columns: Columns = rowmap::map_one(&row).unwrap();

    assert_eq!(
        columns,
        Columns {
            id: "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11".to_string(),
            title: Some("hello".to_string()),
            ratio: Some(0.25),
            count: Some(-4),
            active: Some(false),
            // Fractional seconds are dropped
            seen_at: "2023-11-14T22:13:20Z".to_string(),
        }
    );
}

#[test]
fn null_wrappers_map_to_zero() {
    let row = ColumnsRow {
        id: Uuid::null(),
        title: Text::null(),
        ratio: Float8::null(),
        count: Int4::null(),
        active: Bool::null(),
        seen_at: Timestamptz::null(),
    };

    let columns: Columns = rowmap::map_one(&row).unwrap();
    assert_eq!(columns, Columns::default());
}

#[test]
fn valid_empty_text_is_not_null() {
    let record = Record::new().with("title", text(""));

    let columns: Columns = rowmap::map_one(&record).unwrap();
    assert_eq!(columns.title, Some(String::new()));
}

// The same columns, declared with types their converters do not produce.
#[derive(Debug, Default, PartialEq, rowmap::Model)]
struct Mismatched {
    id: Option<String>,
    title: String,
    ratio: f64,
    count: Option<i64>,
    active: bool,
    seen_at: Option<String>,
}

#[test]
fn mismatched_targets_are_left_zero() {
    let row = ColumnsRow {
        id: uuid("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11"),
        title: text("hello"),
        ratio: Float8::new(0.25),
        count: Int4::new(4),
        active: Bool::new(true),
        seen_at: timestamptz("2023-11-14T22:13:20Z"),
    };

    let mismatched: Mismatched = rowmap::map_one(&row).unwrap();
    assert_eq!(mismatched, Mismatched::default());
}

#[test]
fn mismatched_targets_fail_when_strict() {
    let strict = Mapper::builder().strict(true).build();

    let cases = [
        (Record::new().with("id", Uuid::new([1; 16])), "id", "Uuid", "Option<String>"),
        (Record::new().with("title", text("x")), "title", "Text", "String"),
        (Record::new().with("ratio", Float8::new(1.0)), "ratio", "Float8", "f64"),
        (Record::new().with("count", Int4::new(1)), "count", "Int4", "Option<i64>"),
        (Record::new().with("active", Bool::new(true)), "active", "Bool", "bool"),
        (
            Record::new().with("seen_at", timestamptz("2023-11-14T22:13:20Z")),
            "seen_at",
            "Timestamptz",
            "Option<String>",
        ),
    ];

    for (record, field, found, expected) in cases {
        let err = strict.map_one::<Mismatched>(&record).unwrap_err();

        assert!(err.is_incompatible_field());
        assert_eq!(
            err.to_string(),
            format!("incompatible field Mismatched.{field}: cannot map {found} into {expected}")
        );
    }
}
