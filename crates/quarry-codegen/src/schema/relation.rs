/// A navigation field: `#[relation]` or `#[relation(alias = "Name")]`.
#[derive(Debug)]
pub(crate) struct Relation {
    /// Navigation type, e.g. `Option<Customer>`
    pub(crate) ty: syn::Type,

    /// Alias of the entity occurrence the navigation reaches
    pub(crate) alias: Option<syn::LitStr>,
}

mod kw {
    syn::custom_keyword!(alias);
}

impl Relation {
    pub(super) fn from_ast(attr: &syn::Attribute, ty: &syn::Type) -> syn::Result<Relation> {
        let alias = match &attr.meta {
            syn::Meta::Path(_) => None,
            syn::Meta::List(_) => attr.parse_args_with(parse_alias)?,
            syn::Meta::NameValue(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `#[relation]` or `#[relation(alias = \"Name\")]`",
                ));
            }
        };

        Ok(Relation {
            ty: ty.clone(),
            alias,
        })
    }
}

fn parse_alias(input: syn::parse::ParseStream) -> syn::Result<Option<syn::LitStr>> {
    if input.is_empty() {
        return Ok(None);
    }

    let _kw: kw::alias = input.parse()?;
    let _eq_token: syn::Token![=] = input.parse()?;
    let alias: syn::LitStr = input.parse()?;

    if !input.is_empty() {
        return Err(syn::Error::new(input.span(), "unexpected tokens after alias"));
    }

    Ok(Some(alias))
}
