use super::{util, Expand};
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_register_impl(&self) -> TokenStream {
        let quarry = &self.quarry;
        let ident = &self.entity.ident;
        let name = ident.to_string();
        let table = util::opt_str(self.entity.table.as_ref());
        let container = util::opt_str(self.entity.container.as_ref());
        let fields = self.expand_schema_fields();

        quote! {
            impl #quarry::Register for #ident {
                fn entity_type() -> #quarry::schema::EntityType {
                    #quarry::schema::EntityType::of::<#ident>(
                        #name,
                        <#ident as #quarry::Register>::schema,
                    )
                }

                fn schema() -> #quarry::schema::Entity {
                    #quarry::schema::Entity {
                        name: #name,
                        table: #table,
                        container: #container,
                        fields: vec![ #( #fields ),* ],
                    }
                }
            }
        }
    }

    fn expand_schema_fields(&self) -> Vec<TokenStream> {
        let quarry = &self.quarry;

        self.entity
            .fields
            .iter()
            .map(|field| {
                let index = util::int(field.index);
                let app_name = field.ident.to_string();
                let storage_name = util::opt_str(field.storage_name());
                let primary_key = field.attrs.key.is_some();
                let auto = field.attrs.auto.is_some();

                let (field_ty, nullable) = match &field.ty {
                    FieldTy::Primitive(ty) => (
                        quote!(#quarry::schema::FieldTy::Primitive(#quarry::schema::FieldPrimitive {
                            ty: <#ty as #quarry::Primitive>::TYPE,
                            related: None,
                        })),
                        quote!(<#ty as #quarry::Primitive>::NULLABLE),
                    ),
                    FieldTy::Related(rel) => {
                        let ty = &rel.ty;
                        let target = &rel.target;
                        let alias = util::opt_str(rel.alias.as_ref());
                        let attribute = rel.attribute.to_string();

                        (
                            quote!(#quarry::schema::FieldTy::Primitive(#quarry::schema::FieldPrimitive {
                                ty: <#ty as #quarry::Primitive>::TYPE,
                                related: Some(#quarry::schema::Related {
                                    target: <#target as #quarry::Register>::entity_type(),
                                    alias: #alias,
                                    attribute: #attribute,
                                }),
                            })),
                            quote!(<#ty as #quarry::Primitive>::NULLABLE),
                        )
                    }
                    FieldTy::Relation(rel) => {
                        let ty = &rel.ty;
                        let alias = util::opt_str(rel.alias.as_ref());

                        (
                            quote!(#quarry::schema::FieldTy::Relation(#quarry::schema::Relation {
                                target: <<#ty as #quarry::Navigation>::Entity as #quarry::Register>::entity_type(),
                                alias: #alias,
                            })),
                            quote!(<#ty as #quarry::Navigation>::NULLABLE),
                        )
                    }
                };

                quote! {
                    #quarry::schema::Field {
                        index: #index,
                        name: #quarry::schema::FieldName {
                            app_name: #app_name,
                            storage_name: #storage_name,
                        },
                        ty: #field_ty,
                        nullable: #nullable,
                        primary_key: #primary_key,
                        auto: #auto,
                    }
                }
            })
            .collect()
    }
}
