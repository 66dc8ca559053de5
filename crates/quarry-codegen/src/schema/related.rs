/// A flat attribute stored on a related entity's table:
/// `#[related(Customer, alias = "Buyer", attribute = name)]`.
#[derive(Debug)]
pub(crate) struct Related {
    /// Field type, e.g. `String`
    pub(crate) ty: syn::Type,

    /// Entity type owning the attribute
    pub(crate) target: syn::Type,

    pub(crate) alias: Option<syn::LitStr>,

    /// Field name on the target entity
    pub(crate) attribute: syn::Ident,
}

mod kw {
    syn::custom_keyword!(alias);
    syn::custom_keyword!(attribute);
}

struct RelatedArgs {
    target: syn::Type,
    alias: Option<syn::LitStr>,
    attribute: Option<syn::Ident>,
}

impl Related {
    pub(super) fn from_ast(attr: &syn::Attribute, ty: &syn::Type) -> syn::Result<Related> {
        let args: RelatedArgs = attr.parse_args()?;

        let Some(attribute) = args.attribute else {
            return Err(syn::Error::new_spanned(
                attr,
                "#[related] requires `attribute = <field>`",
            ));
        };

        Ok(Related {
            ty: ty.clone(),
            target: args.target,
            alias: args.alias,
            attribute,
        })
    }
}

impl syn::parse::Parse for RelatedArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = RelatedArgs {
            target: input.parse()?,
            alias: None,
            attribute: None,
        };

        // Allowed syntax, after the target type, in any order:
        //
        // , alias = "Name"
        // , attribute = field
        while !input.is_empty() {
            let _comma_token: syn::Token![,] = input.parse()?;

            if input.is_empty() {
                break;
            }

            let lookahead = input.lookahead1();

            if lookahead.peek(kw::alias) {
                if result.alias.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate alias"));
                }
                let _kw: kw::alias = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.alias = Some(input.parse()?);
            } else if lookahead.peek(kw::attribute) {
                if result.attribute.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate attribute"));
                }
                let _kw: kw::attribute = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.attribute = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }
        }

        Ok(result)
    }
}
