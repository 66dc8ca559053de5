mod fields;
mod record;
mod schema;
mod util;

use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for quarry types
    quarry: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let register_impl = self.expand_register_impl();
        let entity_impls = self.expand_entity_impls();
        let record_impl = self.expand_record_impl();
        let field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #register_impl
            #entity_impls
            #record_impl
            #field_struct
        })
    }

    fn expand_entity_impls(&self) -> TokenStream {
        let quarry = &self.quarry;
        let vis = &self.entity.vis;
        let ident = &self.entity.ident;
        let field_struct_ident = &self.entity.field_struct_ident;

        quote! {
            impl #quarry::Entity for #ident {
                type Fields<R> = #field_struct_ident<R>;

                fn fields_at<R>(path: #quarry::EntityPath<R, Self>) -> #field_struct_ident<R> {
                    #field_struct_ident { path }
                }
            }

            impl #quarry::Navigation for #ident {
                type Entity = #ident;
            }

            impl #ident {
                #vis fn fields() -> #field_struct_ident<#ident> {
                    <#ident as #quarry::Entity>::fields_at(#quarry::EntityPath::root())
                }
            }
        }
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    Expand {
        entity,
        quarry: quote!(_quarry::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use quarry as _quarry;
            #code
        };
    }
}
