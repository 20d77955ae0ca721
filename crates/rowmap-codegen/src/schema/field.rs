use super::{ErrorSet, RowAttr};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field name, without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Source field name given by `#[row("name")]`
    pub(crate) source: Option<syn::LitStr>,

    /// True if the field is annotated with `#[row(skip)]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut seen = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("row") {
                continue;
            }

            if seen {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[row] attribute"));
                continue;
            }
            seen = true;

            match RowAttr::from_ast(attr) {
                Ok(row) => {
                    attrs.source = row.name;
                    attrs.skip = row.skip;
                }
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// Name the field is emitted under by `#[derive(Row)]`.
    pub(crate) fn row_name(&self) -> String {
        match &self.attrs.source {
            Some(source) => source.value(),
            None => self.name.clone(),
        }
    }
}
