#[test]
fn derive_ui() {
    let t = trybuild::TestCases::new();
    t.pass("ui/pass/*.rs");
}
