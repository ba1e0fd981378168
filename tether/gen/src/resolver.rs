//! Capability resolution.
//!
//! Each `#[capability]` must implement exactly one contract, `Get` or `Post`
//! from the runtime crate. Its type arguments are read **by position** into
//! the verb's slots:
//!
//! | verb | slot 0 | slot 1 | slot 2 | slot 3 |
//! |------|--------|--------|--------|--------|
//! | GET  | Node   | Result | Error  |        |
//! | POST | Node   | Param  | Result | Error  |
//!
//! Resolution is best-effort per capability. A failing capability is
//! reported to the [`Diagnostics`] collector and left out; the others still
//! resolve.

use std::path::PathBuf;

use syn::ext::IdentExt;
use syn::visit::{self, Visit};
use syn::{GenericArgument, PathArguments, Type};
use tether_define::Verb;
use tracing::debug;

use crate::descriptor::{CapabilityDecl, Descriptor, TraitImpl, path_key, type_key, type_label};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::naming::snake_case;

/// A capability with every contract slot resolved to a qualified type.
#[derive(Debug, Clone)]
pub struct CapabilityBinding {
    /// Absolute path of the capability struct.
    pub capability: String,
    /// Simple name, e.g. `PlaceOrder`.
    pub name: String,
    pub verb: Verb,
    pub node: Type,
    /// POST only.
    pub param: Option<Type>,
    pub result: Type,
    pub error: Type,
    pub file: PathBuf,
}

impl CapabilityBinding {
    /// Name of the generated forwarding function.
    pub fn operation(&self) -> String {
        snake_case(&self.name)
    }

    /// Item path of the Node slot, for attaching the binding to its node.
    pub fn node_path(&self) -> Option<String> {
        type_key(&self.node)
    }
}

/// Resolves every capability in declaration order.
pub fn resolve_all(
    descriptor: &Descriptor,
    runtime_crate: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<CapabilityBinding> {
    descriptor
        .capabilities
        .iter()
        .filter_map(|cap| resolve_capability(cap, &descriptor.impls, runtime_crate, diagnostics))
        .collect()
}

/// Resolves one capability against the trait impls found in the descriptor.
///
/// Only impls of traits named `Get` or `Post` are contract candidates; other
/// trait impls on the capability (`Default`, `Display`, ..) are ignored.
pub fn resolve_capability(
    cap: &CapabilityDecl,
    impls: &[TraitImpl],
    runtime_crate: &str,
    diagnostics: &mut Diagnostics,
) -> Option<CapabilityBinding> {
    let candidates: Vec<&TraitImpl> = impls
        .iter()
        .filter(|i| i.self_path == cap.path && contract_name(&i.contract).is_some())
        .collect();

    let contract = match candidates.as_slice() {
        [] => {
            diagnostics.report_in(
                &cap.file,
                DiagnosticKind::MissingContract {
                    capability: cap.path.clone(),
                },
            );
            return None;
        }
        [single] => *single,
        many => {
            diagnostics.report_in(
                &cap.file,
                DiagnosticKind::AmbiguousContract {
                    capability: cap.path.clone(),
                    contracts: many.iter().map(|i| path_key(&i.contract)).collect(),
                },
            );
            return None;
        }
    };

    let Some(verb) = classify(&contract.contract, runtime_crate) else {
        diagnostics.report_in(
            &cap.file,
            DiagnosticKind::UnrecognizedContract {
                capability: cap.path.clone(),
                contract: path_key(&contract.contract),
            },
        );
        return None;
    };

    let args: Vec<&GenericArgument> = match contract.contract.segments.last().map(|s| &s.arguments) {
        Some(PathArguments::AngleBracketed(a)) => a.args.iter().collect(),
        Some(PathArguments::None) | None => Vec::new(),
        Some(PathArguments::Parenthesized(_)) => {
            diagnostics.report_in(
                &cap.file,
                DiagnosticKind::UnrecognizedContract {
                    capability: cap.path.clone(),
                    contract: path_key(&contract.contract),
                },
            );
            return None;
        }
    };

    let mut slots = Vec::with_capacity(verb.arity());
    for (slot, name) in verb.slots().iter().copied().enumerate() {
        let Some(arg) = args.get(slot) else {
            diagnostics.report_in(
                &cap.file,
                DiagnosticKind::MissingTypeArgument {
                    capability: cap.path.clone(),
                    verb,
                    slot,
                    name,
                },
            );
            return None;
        };
        match slot_type(arg, &contract.generics) {
            Ok(ty) => slots.push(ty),
            Err(reason) => {
                diagnostics.report_in(
                    &cap.file,
                    DiagnosticKind::UnresolvedTypeArgument {
                        capability: cap.path.clone(),
                        slot,
                        name,
                        reason,
                    },
                );
                return None;
            }
        }
    }

    if args.len() > verb.arity() {
        diagnostics.report_in(
            &cap.file,
            DiagnosticKind::UnexpectedTypeArgument {
                capability: cap.path.clone(),
                verb,
                slot: verb.arity(),
            },
        );
        return None;
    }

    let binding = match (verb, slots.as_slice()) {
        (Verb::Get, [node, result, error]) => CapabilityBinding {
            capability: cap.path.clone(),
            name: cap.name.clone(),
            verb,
            node: node.clone(),
            param: None,
            result: result.clone(),
            error: error.clone(),
            file: cap.file.clone(),
        },
        (Verb::Post, [node, param, result, error]) => CapabilityBinding {
            capability: cap.path.clone(),
            name: cap.name.clone(),
            verb,
            node: node.clone(),
            param: Some(param.clone()),
            result: result.clone(),
            error: error.clone(),
            file: cap.file.clone(),
        },
        // Every slot was pushed above, so the lengths always match the verb.
        (Verb::Get | Verb::Post, _) => return None,
    };

    debug!(
        capability = %binding.capability,
        verb = %binding.verb,
        node = %type_label(&binding.node),
        "resolved capability"
    );
    Some(binding)
}

/// `Get` or `Post`, by the trait's last segment.
fn contract_name(path: &syn::Path) -> Option<Verb> {
    let last = path.segments.last()?.ident.unraw();
    if last == "Get" {
        Some(Verb::Get)
    } else if last == "Post" {
        Some(Verb::Post)
    } else {
        None
    }
}

/// Recognizes a contract from the runtime crate: either a bare `Get`/`Post`
/// (from a prelude glob) or a path rooted at the runtime crate.
fn classify(path: &syn::Path, runtime_crate: &str) -> Option<Verb> {
    let verb = contract_name(path)?;
    let first = path.segments.first()?.ident.unraw();
    if path.segments.len() == 1 || first == runtime_crate {
        Some(verb)
    } else {
        None
    }
}

fn slot_type(arg: &GenericArgument, generics: &[String]) -> Result<Type, String> {
    match arg {
        GenericArgument::Type(ty) => {
            let mut check = Unresolved {
                generics,
                reason: None,
            };
            check.visit_type(ty);
            match check.reason {
                Some(reason) => Err(reason),
                None => Ok(ty.clone()),
            }
        }
        GenericArgument::Lifetime(l) => Err(format!("lifetime `{l}` where a type is expected")),
        GenericArgument::Const(_) => Err("const argument where a type is expected".to_string()),
        GenericArgument::AssocType(a) => Err(format!("associated type binding `{}`", a.ident)),
        GenericArgument::AssocConst(a) => Err(format!("associated const binding `{}`", a.ident)),
        GenericArgument::Constraint(c) => Err(format!("constraint `{}`", c.ident)),
        _ => Err("unsupported generic argument".to_string()),
    }
}

/// Finds the first part of a type the generator cannot name in emitted code.
struct Unresolved<'a> {
    generics: &'a [String],
    reason: Option<String>,
}

impl<'ast> Visit<'ast> for Unresolved<'_> {
    fn visit_type(&mut self, ty: &'ast Type) {
        if self.reason.is_some() {
            return;
        }
        let reason = match ty {
            Type::Infer(_) => "`_` placeholder",
            Type::ImplTrait(_) => "`impl Trait` type",
            Type::Macro(_) => "macro in type position",
            Type::Verbatim(_) => "unsupported type syntax",
            _ => {
                visit::visit_type(self, ty);
                return;
            }
        };
        self.reason = Some(reason.to_string());
    }

    fn visit_path(&mut self, path: &'ast syn::Path) {
        if self.reason.is_some() {
            return;
        }
        if path.leading_colon.is_none()
            && let Some(first) = path.segments.first()
        {
            let name = first.ident.unraw().to_string();
            if self.generics.contains(&name) {
                self.reason = Some(format!("mentions generic parameter `{name}`"));
                return;
            }
        }
        visit::visit_path(self, path);
    }

    fn visit_lifetime(&mut self, lifetime: &'ast syn::Lifetime) {
        if self.reason.is_none() && lifetime.ident != "static" {
            self.reason = Some(format!("non-'static lifetime `{lifetime}`"));
        }
    }
}
