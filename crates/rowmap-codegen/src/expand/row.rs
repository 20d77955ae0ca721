use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_row_impls(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let capacity = self.model.mapped_fields().count();

        let inserts = self.model.mapped_fields().map(|field| {
            let ident = &field.ident;
            let name = field.row_name();

            quote! {
                record.insert(#name, #rowmap::ToValue::to_value(&self.#ident));
            }
        });

        quote! {
            impl #rowmap::Row for #model_ident {
                fn to_record(&self) -> #rowmap::Record {
                    let mut record = #rowmap::Record::with_capacity(#capacity);
                    #( #inserts )*
                    record
                }
            }

            impl #rowmap::ToValue for #model_ident {
                fn to_value(&self) -> #rowmap::Value {
                    #rowmap::Value::Record(#rowmap::Row::to_record(self))
                }
            }
        }
    }
}
