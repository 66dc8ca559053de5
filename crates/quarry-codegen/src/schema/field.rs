use super::{Column, ErrorSet, Related, Relation};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing entity
    pub(crate) index: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier, also the accessor name on the fields struct
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[auto]`
    pub(crate) auto: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    Primitive(syn::Type),
    Related(Related),
    Relation(Relation),
}

impl Field {
    pub(super) fn from_ast(
        field: &syn::Field,
        entity_ident: &syn::Ident,
        index: usize,
    ) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut attrs = FieldAttr::default();
        let mut ty = None;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    attrs.auto = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("relation") {
                if ty.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one relation attribute",
                    ));
                } else {
                    ty = Some(FieldTy::Relation(Relation::from_ast(attr, &field.ty)?));
                }
            } else if attr.path().is_ident("related") {
                if ty.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one relation attribute",
                    ));
                } else {
                    ty = Some(FieldTy::Related(Related::from_ast(attr, &field.ty)?));
                }
            }
        }

        if matches!(ty, Some(FieldTy::Relation(_))) {
            if attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "relation fields cannot have a column name",
                ));
            }

            if attrs.key.is_some() || attrs.auto.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "relation fields cannot be part of the primary key",
                ));
            }
        }

        if matches!(ty, Some(FieldTy::Related(_))) && (attrs.key.is_some() || attrs.auto.is_some())
        {
            errs.push(syn::Error::new_spanned(
                field,
                "related attributes cannot be part of the primary key",
            ));
        }

        if let (Some(auto), None) = (&attrs.auto, &attrs.key) {
            errs.push(syn::Error::new_spanned(auto, "#[auto] requires #[key]"));
        }

        errs.finish()?;

        let mut ty = ty.unwrap_or_else(|| FieldTy::Primitive(field.ty.clone()));

        match &mut ty {
            FieldTy::Primitive(ty) => rewrite_self(ty, entity_ident),
            FieldTy::Related(rel) => rewrite_self(&mut rel.target, entity_ident),
            FieldTy::Relation(rel) => rewrite_self(&mut rel.ty, entity_ident),
        }

        Ok(Self {
            index,
            attrs,
            ident: ident.clone(),
            ty,
        })
    }

    /// Explicit column name, when `#[column]` is present.
    pub(crate) fn storage_name(&self) -> Option<&syn::LitStr> {
        self.attrs.column.as_ref().map(|column| &column.name)
    }
}

fn rewrite_self(ty: &mut syn::Type, entity: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(entity).visit_type_mut(ty);
}
