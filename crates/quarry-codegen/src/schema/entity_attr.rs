#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    /// Optional database table name to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// Optional container (database schema) holding the table
    pub(crate) container: Option<syn::LitStr>,
}

impl EntityAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    return Err(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                }

                self.table = Some(name_value(attr, "expected `table = \"table_name\"`")?);
            } else if attr.path().is_ident("container") {
                if self.container.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "duplicate `container` attribute",
                    ));
                }

                self.container = Some(name_value(attr, "expected `container = \"schema_name\"`")?);
            }
        }

        Ok(())
    }
}

fn name_value(attr: &syn::Attribute, expected: &str) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(attr, expected));
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(syn::Error::new_spanned(attr, expected));
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(syn::Error::new_spanned(attr, expected));
    };

    Ok(lit.clone())
}
