//! Implementation of the `#[resource]` attribute.
//!
//! Emits the struct unchanged (minus tether field attributes) followed by an
//! `impl ::tether_define::Resource`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, parse2, Error, Fields, Ident, ItemStruct, Result, Type};

use crate::parse::{option_inner, placeholders, FieldAttrs, ResourceArgs};

/// Main implementation for the `#[resource]` macro.
pub fn resource_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    match resource_inner(attr, item) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// How one field takes part in routing.
enum Role<'a> {
    Parent,
    Path,
    Query { optional: Option<&'a Type>, default: bool },
}

struct NodeField<'a> {
    ident: &'a Ident,
    name: String,
    ty: &'a Type,
    role: Role<'a>,
}

fn resource_inner(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    let args: ResourceArgs = parse2(attr)?;
    let mut item: ItemStruct = parse2(item)?;

    if !item.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &item.generics,
            "resource nodes cannot be generic",
        ));
    }
    if let Fields::Unnamed(fields) = &item.fields {
        return Err(Error::new_spanned(
            fields,
            "resource nodes need named fields (or none at all)",
        ));
    }

    let mut attrs = Vec::with_capacity(item.fields.len());
    for field in item.fields.iter_mut() {
        attrs.push(FieldAttrs::take(&mut field.attrs)?);
    }

    let segment = args.segment.value();
    let wanted = placeholders(&segment);
    let fields = classify_fields(&item, &attrs, &wanted)?;

    for name in &wanted {
        if !fields.iter().any(|f| &f.name == name) {
            return Err(Error::new(
                args.segment.span(),
                format!(
                    "placeholder `{{{}}}` does not name a field of `{}`",
                    name, item.ident
                ),
            ));
        }
    }

    let impl_block = generate_resource_impl(&item, &args.segment, &fields);

    Ok(quote! {
        #item
        #impl_block
    })
}

fn classify_fields<'a>(
    item: &'a ItemStruct,
    attrs: &[FieldAttrs],
    placeholders: &[String],
) -> Result<Vec<NodeField<'a>>> {
    let mut fields = Vec::new();
    let mut parent_seen = false;

    for (field, attrs) in item.fields.iter().zip(attrs) {
        // Unnamed fields were rejected by the caller.
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = ident.unraw().to_string();
        let in_path = placeholders.contains(&name);

        let role = if attrs.parent {
            if parent_seen {
                return Err(Error::new_spanned(
                    ident,
                    "a resource node can have only one #[parent] field",
                ));
            }
            if in_path {
                return Err(Error::new_spanned(
                    ident,
                    "the #[parent] field cannot be used as a path placeholder",
                ));
            }
            parent_seen = true;
            Role::Parent
        } else if in_path {
            if option_inner(&field.ty).is_some() || attrs.default {
                return Err(Error::new_spanned(
                    ident,
                    "path placeholder fields are always required and cannot be optional or defaulted",
                ));
            }
            Role::Path
        } else {
            Role::Query {
                optional: option_inner(&field.ty),
                default: attrs.default,
            }
        };

        fields.push(NodeField {
            ident,
            name,
            ty: &field.ty,
            role,
        });
    }

    Ok(fields)
}

fn generate_resource_impl(
    item: &ItemStruct,
    segment: &syn::LitStr,
    fields: &[NodeField<'_>],
) -> TokenStream {
    let name = &item.ident;
    let parent = fields.iter().find(|f| matches!(f.role, Role::Parent));

    let template_body = match parent {
        Some(parent) => {
            let parent_ty = parent.ty;
            quote! {
                ::tether_define::resource::join_segments(
                    &<#parent_ty as ::tether_define::Resource>::template(),
                    Self::SEGMENT,
                )
            }
        }
        None => quote! {
            ::tether_define::resource::join_segments("", Self::SEGMENT)
        },
    };

    let parent_path = match parent {
        Some(parent) => {
            let ident = parent.ident;
            quote! { ::tether_define::Resource::path(&self.#ident)? }
        }
        None => quote! { ::std::string::String::new() },
    };

    let path_values = fields
        .iter()
        .filter(|f| matches!(f.role, Role::Path))
        .map(|f| {
            let ident = f.ident;
            let key = &f.name;
            quote! { (#key, ::std::string::ToString::to_string(&self.#ident)) }
        });

    let query_fields: Vec<_> = fields
        .iter()
        .filter(|f| matches!(f.role, Role::Query { .. }))
        .collect();
    let query_body = if query_fields.is_empty() {
        quote! { ::std::vec::Vec::new() }
    } else {
        let pushes = query_fields.iter().map(|f| {
            let ident = f.ident;
            let key = &f.name;
            match f.role {
                Role::Query {
                    optional: Some(_), ..
                } => quote! {
                    if let ::std::option::Option::Some(value) = &self.#ident {
                        query.push((#key, ::std::string::ToString::to_string(value)));
                    }
                },
                _ => quote! {
                    query.push((#key, ::std::string::ToString::to_string(&self.#ident)));
                },
            }
        });
        quote! {
            let mut query = ::std::vec::Vec::new();
            #(#pushes)*
            query
        }
    };

    let construct = match &item.fields {
        Fields::Unit => quote! { { let _ = params; Self } },
        _ if fields.is_empty() => quote! { { let _ = params; Self {} } },
        _ => {
            let inits = fields.iter().map(|f| {
                let ident = f.ident;
                let key = &f.name;
                let ty = f.ty;
                match f.role {
                    Role::Parent => quote! {
                        #ident: <#ty as ::tether_define::Resource>::from_params(params)?
                    },
                    Role::Path
                    | Role::Query {
                        optional: None,
                        default: false,
                    } => quote! {
                        #ident: params.require::<#ty>(#key)?
                    },
                    Role::Query {
                        optional: Some(inner),
                        ..
                    } => quote! {
                        #ident: params.optional::<#inner>(#key)?
                    },
                    Role::Query {
                        optional: None,
                        default: true,
                    } => quote! {
                        #ident: params.optional::<#ty>(#key)?.unwrap_or_default()
                    },
                }
            });
            quote! { Self { #(#inits),* } }
        }
    };

    quote! {
        impl ::tether_define::Resource for #name {
            const SEGMENT: &'static str = #segment;

            fn template() -> ::std::string::String {
                #template_body
            }

            fn path(
                &self,
            ) -> ::std::result::Result<::std::string::String, ::tether_define::ConstructionError> {
                let segment = ::tether_define::resource::render_segment(
                    Self::SEGMENT,
                    &[#(#path_values),*],
                )?;
                ::std::result::Result::Ok(::tether_define::resource::join_segments(
                    &#parent_path,
                    &segment,
                ))
            }

            fn query(&self) -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
                #query_body
            }

            fn from_params(
                params: &::tether_define::RouteParams,
            ) -> ::std::result::Result<Self, ::tether_define::ConstructionError> {
                ::std::result::Result::Ok(#construct)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn expand(attr: TokenStream, item: TokenStream) -> String {
        resource_impl(attr, item).to_string()
    }

    /// Token spacing is not stable, so structural checks compare without whitespace.
    fn compact(code: &str) -> String {
        code.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn root_node_expands() {
        let out = expand(quote!("/orders"), quote!(pub struct Orders;));
        assert!(!out.contains("compile_error"));
        assert!(compact(&out).contains("impl::tether_define::ResourceforOrders"));
    }

    #[test]
    fn parent_attribute_is_stripped() {
        let out = expand(
            quote!("{id}"),
            quote!(
                pub struct OrderById {
                    #[parent]
                    pub parent: Orders,
                    pub id: u64,
                }
            ),
        );
        assert!(!out.contains("compile_error"));
        assert!(!compact(&out).contains("#[parent]"));
        assert!(compact(&out).contains("<Ordersas::tether_define::Resource>::from_params"));
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        let out = expand(quote!("{sku}"), quote!(pub struct Item { pub id: u64 }));
        assert!(out.contains("compile_error"));
        assert!(out.contains("does not name a field"));
    }

    #[test]
    fn two_parents_are_rejected() {
        let out = expand(
            quote!("x"),
            quote!(
                pub struct X {
                    #[parent]
                    a: A,
                    #[parent]
                    b: B,
                }
            ),
        );
        assert!(out.contains("only one #[parent]"));
    }

    #[test]
    fn tuple_structs_are_rejected() {
        let out = expand(quote!("x"), quote!(pub struct X(u64);));
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn generic_nodes_are_rejected() {
        let out = expand(quote!("x"), quote!(pub struct X<T> { t: T }));
        assert!(out.contains("cannot be generic"));
    }

    #[test]
    fn optional_placeholder_is_rejected() {
        let out = expand(quote!("{id}"), quote!(pub struct X { id: Option<u64> }));
        assert!(out.contains("always required"));
    }

    #[test]
    fn query_fields_are_collected() {
        let out = expand(
            quote!("/search"),
            quote!(
                pub struct Search {
                    term: String,
                    page: Option<u32>,
                    #[param(default)]
                    limit: u32,
                }
            ),
        );
        assert!(!out.contains("compile_error"));
        assert!(compact(&out).contains("params.optional::<u32>(\"page\")"));
        assert!(out.contains("unwrap_or_default"));
        assert!(compact(&out).contains("params.require::<String>(\"term\")"));
    }
}
