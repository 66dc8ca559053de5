use proc_macro2::{Literal, TokenStream};
use quote::quote;

/// An unsuffixed integer literal, usable as any integer type.
pub(crate) fn int(v: usize) -> TokenStream {
    let lit = Literal::usize_unsuffixed(v);
    quote!(#lit)
}

/// `Some("lit")` or `None`.
pub(crate) fn opt_str(lit: Option<&syn::LitStr>) -> TokenStream {
    match lit {
        Some(lit) => quote!(Some(#lit)),
        None => quote!(None),
    }
}
