use super::{util, Expand};
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let quarry = &self.quarry;
        let vis = &self.entity.vis;
        let field_struct_ident = &self.entity.field_struct_ident;
        let entity_ident = &self.entity.ident;

        // Each accessor extends the path by one field
        let methods = self.entity.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let member = {
                let index = util::int(field.index);
                let name = field.ident.to_string();
                quote!(#quarry::Member::new(#index, #name))
            };

            match &field.ty {
                FieldTy::Primitive(ty) => quote! {
                    #vis fn #field_ident(&self) -> #quarry::Path<R, #ty> {
                        self.path.attribute(#member, None)
                    }
                },
                FieldTy::Related(rel) => {
                    let ty = &rel.ty;
                    let target = &rel.target;
                    let alias = util::opt_str(rel.alias.as_ref());
                    let attribute = rel.attribute.to_string();

                    quote! {
                        #vis fn #field_ident(&self) -> #quarry::Path<R, #ty> {
                            self.path.attribute(
                                #member,
                                Some(#quarry::RelatedAttribute {
                                    entity: #quarry::EntityReference::new(
                                        <#target as #quarry::Register>::entity_type(),
                                        #alias,
                                    ),
                                    attribute: #attribute,
                                }),
                            )
                        }
                    }
                }
                FieldTy::Relation(rel) => {
                    let ty = &rel.ty;
                    let alias = util::opt_str(rel.alias.as_ref());

                    quote! {
                        #vis fn #field_ident(
                            &self,
                        ) -> <<#ty as #quarry::Navigation>::Entity as #quarry::Entity>::Fields<R> {
                            <<#ty as #quarry::Navigation>::Entity as #quarry::Entity>::fields_at(
                                self.path.relation(
                                    #member,
                                    #quarry::EntityReference::new(
                                        <<#ty as #quarry::Navigation>::Entity as #quarry::Register>::entity_type(),
                                        #alias,
                                    ),
                                ),
                            )
                        }
                    }
                }
            }
        });

        quote!(
            #vis struct #field_struct_ident<R> {
                path: #quarry::EntityPath<R, #entity_ident>,
            }

            impl<R> #field_struct_ident<R> {
                #( #methods )*
            }
        )
    }
}
