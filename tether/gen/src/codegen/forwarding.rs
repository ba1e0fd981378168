//! Forwarding functions.
//!
//! The body of a forwarding function is exactly one call to the runtime's
//! generic primitive, instantiated with the binding's resolved types. All
//! request and response handling lives in the runtime.

use proc_macro2::TokenStream;
use quote::quote;

use crate::naming::ident;
use crate::resolver::CapabilityBinding;

/// Generates the forwarding function for one binding.
///
/// ```text
/// GET:  fn op(transport, node: N) -> ApiResponse<R, E>            { get::<N, R, E>(transport, node) }
/// POST: fn op(transport, node: N, param: P) -> ApiResponse<R, E>  { post::<N, P, R, E>(transport, node, param) }
/// ```
pub fn generate_operation(
    binding: &CapabilityBinding,
    template: &str,
    runtime: &syn::Path,
) -> TokenStream {
    let name = ident(&binding.operation());
    let node = &binding.node;
    let result = &binding.result;
    let error = &binding.error;
    let doc = format!(" {} `{}` on `{}`.", binding.verb, binding.name, template);

    match &binding.param {
        None => quote! {
            #[doc = #doc]
            pub async fn #name(
                transport: &impl #runtime::Transport,
                node: #node,
            ) -> #runtime::ApiResponse<#result, #error> {
                #runtime::get::<#node, #result, #error>(transport, node).await
            }
        },
        Some(param) => quote! {
            #[doc = #doc]
            pub async fn #name(
                transport: &impl #runtime::Transport,
                node: #node,
                param: #param,
            ) -> #runtime::ApiResponse<#result, #error> {
                #runtime::post::<#node, #param, #result, #error>(transport, node, param).await
            }
        },
    }
}
