use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let load_fields = self.expand_load_fields();

        quote! {
            impl #rowmap::Model for #model_ident {
                #model_schema

                fn load(mut record: #rowmap::Record) -> #rowmap::Result<Self> {
                    Ok(Self {
                        #load_fields
                    })
                }
            }
        }
    }

    fn expand_model_schema(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_name = &self.model.name;

        let fields = self.model.mapped_fields().map(|field| {
            let name = &field.name;
            let ty = &field.ty;

            let mut tokens = quote! {
                #rowmap::Field::new(#name, <#ty as #rowmap::Primitive>::ty())
            };

            if let Some(source) = &field.attrs.source {
                tokens = quote!(#tokens.with_source(#source));
            }

            tokens
        });

        quote! {
            fn schema() -> &'static #rowmap::ModelSchema {
                static SCHEMA: #rowmap::OnceLock<#rowmap::ModelSchema> = #rowmap::OnceLock::new();
                SCHEMA.get_or_init(|| #rowmap::ModelSchema {
                    name: #model_name,
                    fields: vec![ #( #fields, )* ],
                })
            }
        }
    }

    fn expand_load_fields(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_name = &self.model.name;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.name;
                let ty = &field.ty;

                if field.attrs.skip {
                    quote!(#ident: #rowmap::Default::default(),)
                } else {
                    quote! {
                        #ident: <#ty as #rowmap::Primitive>::load(record.take(#name))
                            .map_err(|e| e.context(#rowmap::err!("field {}.{}", #model_name, #name)))?,
                    }
                }
            })
            .collect()
    }
}
