extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowmap::Model`, making the struct a mapping target.
///
/// Field attribute `#[row("name")]` (or `#[row(name = "name")]`) names the
/// source field to read; `#[row(skip)]` leaves the field at its default.
#[proc_macro_derive(Model, attributes(row))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate_model(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives `rowmap::Row`, making the struct a mapping source.
///
/// Field attribute `#[row("name")]` renames the emitted source field;
/// `#[row(skip)]` omits it.
#[proc_macro_derive(Row, attributes(row))]
pub fn derive_row(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate_row(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
