use super::{EntityAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Entity visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Entity fields
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// Optional container holding the table
    pub(crate) container: Option<syn::LitStr>,

    /// The field struct identifier
    pub(crate) field_struct_ident: syn::Ident,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut entity_attr = EntityAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::default();

        errs.check(entity_attr.populate_from_ast(&ast.attrs));

        for (index, node) in node.named.iter().enumerate() {
            fields.extend(errs.check(Field::from_ast(node, &ast.ident, index)));
        }

        errs.finish()?;

        if fields.iter().all(|field| field.attrs.key.is_none()) {
            return Err(syn::Error::new_spanned(
                ast,
                "entity must have at least one field-level `#[key]` attribute",
            ));
        }

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            table: entity_attr.table,
            container: entity_attr.container,
            field_struct_ident: struct_ident("Fields", ast),
        })
    }
}

fn struct_ident(suffix: &str, entity: &syn::ItemStruct) -> syn::Ident {
    syn::Ident::new(&format!("{}{}", entity.ident, suffix), entity.ident.span())
}
