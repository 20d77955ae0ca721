use rowmap::{
    nullable::{Float8, Text},
    Mapper, Record, Value,
};
use tests::{assert_err, assert_ok};

#[derive(Debug, PartialEq, rowmap::Model)]
struct Item {
    label: Option<String>,
    price: f64,
    tags: Vec<String>,
}

#[derive(Debug, PartialEq, rowmap::Model)]
struct Cart {
    owner: String,
    items: Vec<Item>,
}

fn strict() -> Mapper {
    Mapper::builder().strict(true).build()
}

fn item(price: impl Into<Value>) -> Value {
    Value::Record(
        Record::new()
            .with("label", Text::new("pen".to_string()))
            .with("price", price),
    )
}

#[test]
fn lenient_leaves_incompatible_fields_zero() {
    // Float8 converts to Option<f64>, which does not fit `price: f64`
    let record = Record::new()
        .with("owner", "ann")
        .with("items", Value::List(vec![item(Float8::new(2.5))]));

    let cart: Cart = rowmap::map_one(&record).unwrap();

    assert_eq!(cart.owner, "ann");
    assert_eq!(
        cart.items,
        [Item {
            label: Some("pen".to_string()),
            price: 0.0,
            tags: vec![],
        }]
    );
}

#[test]
fn strict_reports_nested_incompatible_field() {
    let record = Record::new()
        .with("owner", "ann")
        .with("items", Value::List(vec![item(1.0), item(Float8::new(2.5))]));

    let err = assert_err!(strict().map_one::<Cart>(&record));

    assert!(err.root().is_incompatible_field());
    assert_eq!(
        err.to_string(),
        "mapping Cart.items: element 1: incompatible field Item.price: cannot map Float8 into f64"
    );
}

#[test]
fn strict_accepts_compatible_input() {
    let record = Record::new()
        .with("owner", "ann")
        .with("items", Value::List(vec![item(2.5f32)]));

    let cart = assert_ok!(strict().map_one::<Cart>(&record));

    // f32 widens into f64
    assert_eq!(cart.items[0].price, 2.5);
}

#[test]
fn strict_still_ignores_missing_fields() {
    let cart = assert_ok!(strict().map_one::<Cart>(&Record::new()));

    assert_eq!(cart.owner, "");
    assert!(cart.items.is_empty());
}

#[test]
fn list_elements_follow_the_mapper_mode() {
    let record = Record::new().with(
        "items",
        Value::List(vec![Value::Record(
            Record::new().with("tags", Value::List(vec!["a".into(), 1i32.into(), "b".into()])),
        )]),
    );

    let cart: Cart = rowmap::map_one(&record).unwrap();
    assert_eq!(cart.items[0].tags, ["a", "", "b"]);

    let err = assert_err!(strict().map_one::<Cart>(&record));
    assert_eq!(
        err.to_string(),
        "mapping Cart.items: element 0: element 1: incompatible field Item.tags: cannot map I32 into String"
    );
}

#[test]
fn null_into_required_field() {
    let record = Record::new().with("owner", Value::Null);

    let cart: Cart = rowmap::map_one(&record).unwrap();
    assert_eq!(cart.owner, "");

    let err = assert_err!(strict().map_one::<Cart>(&record));
    assert_eq!(
        err.to_string(),
        "incompatible field Cart.owner: cannot map Null into String"
    );
}

#[test]
fn strict_list_error_names_the_element() {
    let record = Record::new()
        .with("owner", "ann")
        .with("items", Value::List(vec![item(1.0), Value::from("pen"), item(2.0)]));

    let err = assert_err!(strict().map_one::<Cart>(&record));

    assert!(err.root().is_incompatible_field());
    assert_eq!(
        err.to_string(),
        "element 1: incompatible field Cart.items: cannot map String into Item"
    );
}
