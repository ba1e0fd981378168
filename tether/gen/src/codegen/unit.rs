//! Output units: one `pub mod` per compiled node.

use proc_macro2::TokenStream;
use quote::quote;

use super::forwarding::generate_operation;
use crate::naming::ident;
use crate::tree::CompiledUnit;

/// Generates the module for `unit`, its operations, and its child modules.
pub fn generate_unit(unit: &CompiledUnit, runtime: &syn::Path) -> TokenStream {
    let module = ident(&unit.module);
    let doc = format!(" `{}` at `{}`.", unit.name, unit.template);
    let operations = unit
        .bindings
        .iter()
        .map(|binding| generate_operation(binding, &unit.template, runtime));
    let children = unit.children.iter().map(|child| generate_unit(child, runtime));

    quote! {
        #[doc = #doc]
        pub mod #module {
            #(#operations)*
            #(#children)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, module: &str, template: &str, children: Vec<CompiledUnit>) -> CompiledUnit {
        CompiledUnit {
            name: name.to_string(),
            path: format!("crate::api::{name}"),
            module: module.to_string(),
            template: template.to_string(),
            bindings: Vec::new(),
            children,
        }
    }

    #[test]
    fn modules_nest_like_the_tree() {
        let tree = unit(
            "Orders",
            "orders",
            "/orders",
            vec![unit("OrderById", "order_by_id", "/orders/{id}", Vec::new())],
        );
        let runtime: syn::Path = syn::parse_str("::tether_define").unwrap();
        let item: syn::ItemMod = syn::parse2(generate_unit(&tree, &runtime)).unwrap();
        assert_eq!(item.ident, "orders");

        let (_, content) = item.content.unwrap();
        let syn::Item::Mod(child) = &content[0] else {
            panic!("expected nested module");
        };
        assert_eq!(child.ident, "order_by_id");
    }

    #[test]
    fn keyword_modules_are_raw() {
        let runtime: syn::Path = syn::parse_str("::tether_define").unwrap();
        let tokens = generate_unit(&unit("Type", "type", "/type", Vec::new()), &runtime);
        assert!(tokens.to_string().contains("mod r#type"));
    }
}
