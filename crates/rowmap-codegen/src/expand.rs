mod model;
mod primitive;
mod row;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The struct being expanded
    model: &'a Model,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

pub(super) fn model(model: &Model) -> TokenStream {
    let expand = Expand::new(model);
    let model_impls = expand.expand_model_impls();
    let primitive_impl = expand.expand_primitive_impl();

    wrap_in_const(quote! {
        #model_impls
        #primitive_impl
    })
}

pub(super) fn row(model: &Model) -> TokenStream {
    let expand = Expand::new(model);
    wrap_in_const(expand.expand_row_impls())
}

impl<'a> Expand<'a> {
    fn new(model: &'a Model) -> Self {
        Self {
            model,
            rowmap: quote!(_rowmap::codegen_support),
        }
    }
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
