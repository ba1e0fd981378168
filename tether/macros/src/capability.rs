//! Implementation of the `#[capability]` attribute.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, parse2, Error, ItemStruct, Result};

/// Main implementation for the `#[capability]` macro.
pub fn capability_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    match capability_inner(attr, item) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn capability_inner(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    if !attr.is_empty() {
        return Err(Error::new_spanned(
            attr,
            "#[capability] takes no arguments; declare the verb by implementing Get<..> or Post<..>",
        ));
    }

    let item: ItemStruct = parse2(item)?;
    if !item.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &item.generics,
            "capabilities cannot be generic; every contract slot must be a concrete type",
        ));
    }

    let name = &item.ident;
    let name_str = name.unraw().to_string();

    Ok(quote! {
        #item

        impl ::tether_define::Capability for #name {
            const NAME: &'static str = #name_str;
        }
    })
}
