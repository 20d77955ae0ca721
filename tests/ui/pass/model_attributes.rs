#[derive(rowmap::Model)]
pub struct Invoice {
    #[row("InvoiceNo")]
    number: String,
    #[row(name = "total_cents")]
    total: Option<i32>,
    #[row(skip)]
    cached: std::collections::HashMap<String, String>,
    r#type: String,
}

fn main() {
    let schema = <Invoice as rowmap::Model>::schema();
    assert_eq!(schema.name, "Invoice");
    assert_eq!(schema.fields.len(), 3);
    assert_eq!(schema.fields[2].name, "type");
}
