use super::{util, Expand};
use crate::schema::{FieldTy, Related};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let quarry = &self.quarry;
        let ident = &self.entity.ident;
        let name = ident.to_string();

        let arms = self.entity.fields.iter().map(|field| {
            let index = util::int(field.index);
            let field_ident = &field.ident;

            match &field.ty {
                FieldTy::Primitive(ty) | FieldTy::Related(Related { ty, .. }) => {
                    quote! {
                        [#index] => Ok(<#ty as #quarry::Primitive>::to_value(&self.#field_ident)),
                    }
                }
                FieldTy::Relation(_) => quote! {
                    [#index, rest @ ..] => #quarry::Record::value_at(&self.#field_ident, rest),
                },
            }
        });

        quote! {
            impl #quarry::Record for #ident {
                fn value_at(&self, projection: &[usize]) -> #quarry::Result<#quarry::Value> {
                    match projection {
                        #( #arms )*
                        _ => Err(#quarry::Error::invalid_path(format!(
                            "`{}` has no attribute at {:?}",
                            #name,
                            projection,
                        ))),
                    }
                }
            }
        }
    }
}
