use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the model appear as a field of other models, directly or inside
    /// `Option` and `Vec`.
    pub(super) fn expand_primitive_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let model_name = &self.model.name;

        quote! {
            impl #rowmap::Primitive for #model_ident {
                fn ty() -> #rowmap::Type {
                    #rowmap::Type::Model(#rowmap::ModelRef::new(
                        <Self as #rowmap::Model>::schema,
                    ))
                }

                fn load(value: #rowmap::Value) -> #rowmap::Result<Self> {
                    match value {
                        #rowmap::Value::Record(record) => <Self as #rowmap::Model>::load(record),
                        #rowmap::Value::Null => <Self as #rowmap::Model>::load(#rowmap::Record::new()),
                        value => Err(#rowmap::Error::type_conversion(value, #model_name)),
                    }
                }
            }
        }
    }
}
