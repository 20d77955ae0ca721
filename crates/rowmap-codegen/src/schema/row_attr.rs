mod kw {
    syn::custom_keyword!(name);
    syn::custom_keyword!(skip);
}

/// Arguments of a field-level `#[row(...)]` attribute.
#[derive(Debug)]
pub(crate) struct RowAttr {
    /// Source field name
    pub(crate) name: Option<syn::LitStr>,

    /// True if the field is excluded from mapping
    pub(crate) skip: bool,
}

impl RowAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<RowAttr> {
        let row: RowAttr = attr.parse_args()?;

        if row.skip && row.name.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "`skip` cannot be combined with a source name",
            ));
        }

        Ok(row)
    }
}

impl syn::parse::Parse for RowAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            skip: false,
        };

        // Allowed syntax:
        //
        // #[row("name")]
        // #[row(name = "name")]
        // #[row(skip)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate source name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::name) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate source name"));
                }
                let _kw: kw::name = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::skip) {
                if result.skip {
                    return Err(syn::Error::new(input.span(), "duplicate `skip`"));
                }
                let _kw: kw::skip = input.parse()?;
                result.skip = true;
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        if let Some(name) = &result.name {
            if name.value().is_empty() {
                return Err(syn::Error::new_spanned(name, "source name cannot be empty"));
            }
        }

        Ok(result)
    }
}
