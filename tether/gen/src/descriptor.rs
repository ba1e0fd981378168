//! Descriptor scanning.
//!
//! A descriptor is ordinary Rust source: `#[resource]` structs, `#[capability]`
//! structs and their contract impls. The scanner parses it with `syn` (nothing
//! is compiled or executed) and collects those items in declaration order.
//!
//! Generated code lives in a different module than the descriptor, so every
//! type the generator will emit is rewritten to an absolute path first. Each
//! descriptor module gets a [`Scope`] holding its local items, its `use`
//! imports and its glob imports; [`NameTable::qualify_type`] consults it.
//!
//! ```text
//! // src/orders.rs, scanned as `crate::orders`
//! use tether_define::prelude::*;
//! pub struct Order { .. }
//! impl Post<Orders, Order, u64, PlaceOrderError> for PlaceOrder {}
//!
//! // qualified contract
//! Post<crate::orders::Orders, crate::orders::Order, u64, crate::orders::PlaceOrderError>
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::visit_mut::{self, VisitMut};
use syn::{Attribute, Item, LitStr, PathSegment, Type, UseTree};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming::path_segment;

/// One descriptor file and the module path it occupies in its crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSource {
    pub file: PathBuf,
    /// e.g. `crate::orders`
    pub module_path: String,
}

impl DescriptorSource {
    pub fn new(file: impl Into<PathBuf>, module_path: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            module_path: module_path.into(),
        }
    }
}

/// Parses the CLI form `FILE=MODULE_PATH`.
impl FromStr for DescriptorSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('=') {
            Some((file, module)) if !file.is_empty() && !module.is_empty() => {
                Ok(Self::new(file, module.trim()))
            }
            _ => Err(format!("expected FILE=MODULE_PATH, got '{s}'")),
        }
    }
}

/// A `#[resource]` struct.
#[derive(Debug, Clone)]
pub struct NodeDecl {
    pub name: String,
    /// Absolute item path.
    pub path: String,
    pub segment: String,
    /// Qualified type of the `#[parent]` field.
    pub parent: Option<Type>,
    pub file: PathBuf,
}

/// A `#[capability]` struct.
#[derive(Debug, Clone)]
pub struct CapabilityDecl {
    pub name: String,
    pub path: String,
    pub file: PathBuf,
}

/// A trait impl (`impl Trait<..> for Type`), with both sides qualified.
#[derive(Debug, Clone)]
pub struct TraitImpl {
    /// Absolute path of the implementing type, without generic arguments.
    pub self_path: String,
    pub contract: syn::Path,
    /// Names of the impl's own generic parameters.
    pub generics: Vec<String>,
    pub file: PathBuf,
}

/// Everything the generator needs from the descriptor sources.
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    pub nodes: Vec<NodeDecl>,
    pub capabilities: Vec<CapabilityDecl>,
    pub impls: Vec<TraitImpl>,
}

/// Collects descriptor files, then scans them together so glob imports
/// can see across files.
#[derive(Default)]
pub struct Scanner {
    files: Vec<ParsedFile>,
}

struct ParsedFile {
    file: PathBuf,
    module: Vec<String>,
    ast: syn::File,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses one descriptor file.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::ReadError`] if the file cannot be read, otherwise
    /// see [`Scanner::add_str`].
    pub fn add_source(&mut self, source: &DescriptorSource) -> Result<(), GeneratorError> {
        let content = fs::read_to_string(&source.file).map_err(|e| GeneratorError::ReadError {
            path: source.file.display().to_string(),
            source: e,
        })?;
        self.add_str(&source.file, &source.module_path, &content)
    }

    /// Parses descriptor source held in memory.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::ConfigError`] for a malformed module path and
    /// [`GeneratorError::ParseError`] when the content is not valid Rust.
    pub fn add_str(
        &mut self,
        file: impl AsRef<Path>,
        module_path: &str,
        content: &str,
    ) -> Result<(), GeneratorError> {
        let file = file.as_ref().to_path_buf();
        let module = parse_module_path(module_path)?;
        let ast = syn::parse_file(content).map_err(|e| GeneratorError::ParseError {
            path: file.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(file = %file.display(), module = module_path, "parsed descriptor");
        self.files.push(ParsedFile { file, module, ast });
        Ok(())
    }

    /// Builds scopes for every module, then collects declarations.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::ParseError`] when a `#[resource]` attribute does
    /// not carry a string literal.
    pub fn finish(self) -> Result<(Descriptor, NameTable), GeneratorError> {
        let mut table = NameTable::default();
        for parsed in &self.files {
            table.collect(&parsed.ast.items, &parsed.module);
        }

        let mut descriptor = Descriptor::default();
        for parsed in &self.files {
            collect_items(
                &parsed.ast.items,
                &parsed.module,
                &parsed.file,
                &table,
                &mut descriptor,
            )?;
        }

        debug!(
            nodes = descriptor.nodes.len(),
            capabilities = descriptor.capabilities.len(),
            impls = descriptor.impls.len(),
            "scanned descriptor"
        );
        Ok((descriptor, table))
    }
}

fn parse_module_path(module_path: &str) -> Result<Vec<String>, GeneratorError> {
    let path: syn::Path = syn::parse_str(module_path).map_err(|e| {
        GeneratorError::ConfigError(format!("invalid module path '{module_path}': {e}"))
    })?;
    if path.leading_colon.is_some()
        || path
            .segments
            .iter()
            .any(|s| !s.arguments.is_none() || s.ident == "self" || s.ident == "super")
    {
        return Err(GeneratorError::ConfigError(format!(
            "module path '{module_path}' must be a plain path such as `crate::orders`"
        )));
    }
    Ok(path.segments.iter().map(|s| s.ident.unraw().to_string()).collect())
}

/// Names visible in one descriptor module.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    module: Vec<String>,
    locals: BTreeSet<String>,
    imports: BTreeMap<String, Vec<String>>,
    globs: Vec<Vec<String>>,
}

/// Scopes of every scanned module, keyed by module path.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    scopes: BTreeMap<String, Scope>,
}

impl NameTable {
    fn collect(&mut self, items: &[Item], module: &[String]) {
        let mut locals = BTreeSet::new();
        let mut raw_imports = Vec::new();
        let mut raw_globs = Vec::new();
        let mut nested = Vec::new();

        for item in items {
            match item {
                Item::Struct(s) => {
                    locals.insert(s.ident.unraw().to_string());
                }
                Item::Enum(e) => {
                    locals.insert(e.ident.unraw().to_string());
                }
                Item::Union(u) => {
                    locals.insert(u.ident.unraw().to_string());
                }
                Item::Type(t) => {
                    locals.insert(t.ident.unraw().to_string());
                }
                Item::Trait(t) => {
                    locals.insert(t.ident.unraw().to_string());
                }
                Item::Mod(m) => {
                    locals.insert(m.ident.unraw().to_string());
                    if let Some((_, content)) = &m.content {
                        let mut child = module.to_vec();
                        child.push(m.ident.unraw().to_string());
                        nested.push((child, content));
                    }
                }
                Item::Use(u) => {
                    let external = u.leading_colon.is_some();
                    flatten_use(&u.tree, Vec::new(), &mut raw_imports, &mut raw_globs, external);
                }
                _ => {}
            }
        }

        let scope = self.scopes.entry(module.join("::")).or_default();
        scope.module = module.to_vec();
        for (alias, path, external) in raw_imports {
            let path = if external {
                path
            } else {
                absolutize(&path, module, &locals)
            };
            scope.imports.insert(alias, path);
        }
        for (path, external) in raw_globs {
            let path = if external {
                path
            } else {
                absolutize(&path, module, &locals)
            };
            scope.globs.push(path);
        }
        scope.locals.extend(locals);

        for (child, content) in nested {
            self.collect(content, &child);
        }
    }

    /// Absolute path of `name` as seen from `module`, if the descriptor
    /// declares or imports it.
    pub fn resolve(&self, module: &[String], name: &str) -> Option<Vec<String>> {
        let scope = self.scopes.get(&module.join("::"))?;
        if scope.locals.contains(name) {
            let mut path = scope.module.clone();
            path.push(name.to_string());
            return Some(path);
        }
        if let Some(path) = scope.imports.get(name) {
            return Some(path.clone());
        }
        scope.globs.iter().find_map(|glob| {
            let target = self.scopes.get(&glob.join("::"))?;
            if target.locals.contains(name) {
                let mut path = glob.clone();
                path.push(name.to_string());
                Some(path)
            } else {
                target.imports.get(name).cloned()
            }
        })
    }

    /// Rewrites every path in `ty` to an absolute one, as seen from `module`.
    ///
    /// Names in `shadowed` (generic parameters), `Self`, and names the
    /// descriptor does not know (prelude and extern items) are left as written.
    pub fn qualify_type(&self, module: &[String], ty: &mut Type, shadowed: &[String]) {
        Qualifier {
            table: self,
            module,
            shadowed,
        }
        .visit_type_mut(ty);
    }

    /// [`qualify_type`](Self::qualify_type) for a bare path, e.g. a trait.
    pub fn qualify_path(&self, module: &[String], path: &mut syn::Path, shadowed: &[String]) {
        Qualifier {
            table: self,
            module,
            shadowed,
        }
        .visit_path_mut(path);
    }
}

struct Qualifier<'a> {
    table: &'a NameTable,
    module: &'a [String],
    shadowed: &'a [String],
}

impl Qualifier<'_> {
    fn rewrite(&self, path: &mut syn::Path) {
        if path.leading_colon.is_some() {
            return;
        }
        let names: Vec<String> = path.segments.iter().map(|s| s.ident.unraw().to_string()).collect();
        let Some(first) = names.first() else {
            return;
        };
        if first == "Self" || self.shadowed.contains(first) {
            return;
        }

        let (prefix, consumed) = match first.as_str() {
            "crate" | "self" | "super" => {
                let consumed = match first.as_str() {
                    "super" => names.iter().take_while(|n| *n == "super").count(),
                    _ => 1,
                };
                let absolute = absolutize(&names[..consumed], self.module, &BTreeSet::new());
                (absolute, consumed)
            }
            name => match self.table.resolve(self.module, name) {
                Some(absolute) => (absolute, 1),
                None => return,
            },
        };
        if prefix.is_empty() {
            return;
        }

        let old: Vec<PathSegment> = path.segments.iter().cloned().collect();
        let mut segments = Punctuated::new();
        for (i, name) in prefix.iter().enumerate() {
            let mut segment = PathSegment::from(path_segment(name));
            if i + 1 == prefix.len() {
                segment.arguments = old[consumed - 1].arguments.clone();
            }
            segments.push(segment);
        }
        for segment in &old[consumed..] {
            segments.push(segment.clone());
        }
        path.segments = segments;
    }
}

impl VisitMut for Qualifier<'_> {
    fn visit_path_mut(&mut self, path: &mut syn::Path) {
        self.rewrite(path);
        visit_mut::visit_path_mut(self, path);
    }
}

/// Resolves a leading `crate`/`self`/`super` (or a local item name) against
/// `module`. Anything else is an extern path and is returned unchanged.
fn absolutize(path: &[String], module: &[String], locals: &BTreeSet<String>) -> Vec<String> {
    let Some(first) = path.first() else {
        return Vec::new();
    };
    match first.as_str() {
        "crate" => module
            .first()
            .into_iter()
            .cloned()
            .chain(path[1..].iter().cloned())
            .collect(),
        "self" => module.iter().chain(&path[1..]).cloned().collect(),
        "super" => {
            let ups = path.iter().take_while(|n| *n == "super").count();
            if ups >= module.len() {
                return path.to_vec();
            }
            module[..module.len() - ups]
                .iter()
                .chain(&path[ups..])
                .cloned()
                .collect()
        }
        name if locals.contains(name) => module.iter().chain(path).cloned().collect(),
        _ => path.to_vec(),
    }
}

type RawImport = (String, Vec<String>, bool);

fn flatten_use(
    tree: &UseTree,
    prefix: Vec<String>,
    imports: &mut Vec<RawImport>,
    globs: &mut Vec<(Vec<String>, bool)>,
    external: bool,
) {
    match tree {
        UseTree::Path(p) => {
            let mut prefix = prefix;
            prefix.push(p.ident.unraw().to_string());
            flatten_use(&p.tree, prefix, imports, globs, external);
        }
        UseTree::Name(n) => {
            let name = n.ident.unraw().to_string();
            if name == "self" {
                if let Some(last) = prefix.last().cloned() {
                    imports.push((last, prefix, external));
                }
            } else {
                let mut path = prefix;
                path.push(name.clone());
                imports.push((name, path, external));
            }
        }
        UseTree::Rename(r) => {
            let alias = r.rename.unraw().to_string();
            if alias == "_" {
                return;
            }
            let name = r.ident.unraw().to_string();
            let mut path = prefix;
            if name != "self" {
                path.push(name);
            }
            imports.push((alias, path, external));
        }
        UseTree::Glob(_) => globs.push((prefix, external)),
        UseTree::Group(g) => {
            for item in &g.items {
                flatten_use(item, prefix.clone(), imports, globs, external);
            }
        }
    }
}

fn collect_items(
    items: &[Item],
    module: &[String],
    file: &Path,
    table: &NameTable,
    out: &mut Descriptor,
) -> Result<(), GeneratorError> {
    for item in items {
        match item {
            Item::Struct(s) => {
                let name = s.ident.unraw().to_string();
                let path = item_path(module, &name);
                if let Some(attr) = marker(&s.attrs, "resource") {
                    let segment = attr.parse_args::<LitStr>().map_err(|e| {
                        GeneratorError::ParseError {
                            path: file.display().to_string(),
                            message: format!("#[resource] on `{name}`: {e}"),
                        }
                    })?;
                    let parent = s
                        .fields
                        .iter()
                        .find(|f| marker(&f.attrs, "parent").is_some())
                        .map(|f| {
                            let mut ty = f.ty.clone();
                            table.qualify_type(module, &mut ty, &[]);
                            ty
                        });
                    debug!(node = %path, segment = %segment.value(), "found resource node");
                    out.nodes.push(NodeDecl {
                        name,
                        path,
                        segment: segment.value(),
                        parent,
                        file: file.to_path_buf(),
                    });
                } else if marker(&s.attrs, "capability").is_some() {
                    debug!(capability = %path, "found capability");
                    out.capabilities.push(CapabilityDecl {
                        name,
                        path,
                        file: file.to_path_buf(),
                    });
                }
            }
            Item::Impl(i) => {
                let Some((None, trait_path, _)) = &i.trait_ else {
                    continue;
                };
                let generics: Vec<String> = i
                    .generics
                    .type_params()
                    .map(|p| p.ident.unraw().to_string())
                    .chain(i.generics.const_params().map(|p| p.ident.unraw().to_string()))
                    .collect();

                let mut self_ty = (*i.self_ty).clone();
                table.qualify_type(module, &mut self_ty, &generics);
                let Some(self_path) = type_key(&self_ty) else {
                    continue;
                };

                let mut contract = trait_path.clone();
                table.qualify_path(module, &mut contract, &generics);
                out.impls.push(TraitImpl {
                    self_path,
                    contract,
                    generics,
                    file: file.to_path_buf(),
                });
            }
            Item::Mod(m) => {
                if let Some((_, content)) = &m.content {
                    let mut child = module.to_vec();
                    child.push(m.ident.unraw().to_string());
                    collect_items(content, &child, file, table, out)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn item_path(module: &[String], name: &str) -> String {
    let mut path = module.join("::");
    path.push_str("::");
    path.push_str(name);
    path
}

/// Finds a marker attribute by its last path segment, so both
/// `#[resource(..)]` and `#[tether_define::resource(..)]` match.
fn marker<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs
        .iter()
        .find(|a| a.path().segments.last().is_some_and(|s| s.ident == name))
}

/// The item path a type names, ignoring generic arguments.
///
/// Returns `None` for anything that is not a plain path type.
pub fn type_key(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(p) if p.qself.is_none() => Some(path_key(&p.path)),
        Type::Paren(p) => type_key(&p.elem),
        Type::Group(g) => type_key(&g.elem),
        _ => None,
    }
}

/// A path as `a::b::C`, ignoring generic arguments.
pub fn path_key(path: &syn::Path) -> String {
    let names: Vec<String> = path.segments.iter().map(|s| s.ident.unraw().to_string()).collect();
    let joined = names.join("::");
    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

/// Compact rendering of a type for diagnostics: `Vec<crate::orders::Order>`.
pub fn type_label(ty: &Type) -> String {
    compact_tokens(quote::quote!(#ty).to_string())
}

/// Compact rendering of a path, generic arguments included.
pub fn path_label(path: &syn::Path) -> String {
    compact_tokens(quote::quote!(#path).to_string())
}

fn compact_tokens(rendered: String) -> String {
    rendered
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(sources: &[(&str, &str)]) -> (Descriptor, NameTable) {
        let mut scanner = Scanner::new();
        for (module, content) in sources {
            scanner
                .add_str(format!("{module}.rs"), module, content)
                .unwrap();
        }
        scanner.finish().unwrap()
    }

    fn qualified(table: &NameTable, module: &str, ty: &str) -> String {
        let module: Vec<String> = module.split("::").map(str::to_string).collect();
        let mut ty: Type = syn::parse_str(ty).unwrap();
        table.qualify_type(&module, &mut ty, &[]);
        type_label(&ty)
    }

    const ORDERS: &str = r#"
        use tether_define::prelude::*;

        pub struct Order { pub id: u64 }

        #[resource("/orders")]
        pub struct Orders;

        #[resource("{id}")]
        pub struct OrderById {
            #[parent]
            pub parent: Orders,
            pub id: u64,
        }

        #[capability]
        pub struct PlaceOrder;
        impl Post<Orders, Order, u64, ()> for PlaceOrder {}
    "#;

    #[test]
    fn collects_nodes_and_capabilities_in_order() {
        let (descriptor, _) = scan(&[("crate::orders", ORDERS)]);
        let names: Vec<_> = descriptor.nodes.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(names, vec!["crate::orders::Orders", "crate::orders::OrderById"]);
        assert_eq!(descriptor.nodes[1].segment, "{id}");
        assert_eq!(
            descriptor.nodes[1].parent.as_ref().and_then(type_key).as_deref(),
            Some("crate::orders::Orders")
        );
        assert_eq!(descriptor.capabilities[0].path, "crate::orders::PlaceOrder");
    }

    #[test]
    fn contract_arguments_are_qualified() {
        let (descriptor, _) = scan(&[("crate::orders", ORDERS)]);
        let contract = &descriptor.impls[0];
        assert_eq!(contract.self_path, "crate::orders::PlaceOrder");
        assert_eq!(
            path_label(&contract.contract),
            "Post<crate::orders::Orders, crate::orders::Order, u64, ()>"
        );
    }

    #[test]
    fn locals_imports_and_prelude_names() {
        let (_, table) = scan(&[(
            "crate::api",
            r#"
                use std::collections::BTreeMap;
                use crate::models::{Order, Item as Line};
                pub struct Local;
            "#,
        )]);
        assert_eq!(qualified(&table, "crate::api", "Local"), "crate::api::Local");
        assert_eq!(
            qualified(&table, "crate::api", "Vec<Order>"),
            "Vec<crate::models::Order>"
        );
        assert_eq!(qualified(&table, "crate::api", "Line"), "crate::models::Item");
        assert_eq!(
            qualified(&table, "crate::api", "BTreeMap<String, Local>"),
            "std::collections::BTreeMap<String, crate::api::Local>"
        );
        assert_eq!(qualified(&table, "crate::api", "Option<u64>"), "Option<u64>");
    }

    #[test]
    fn self_and_super_are_absolutized() {
        let (_, table) = scan(&[("crate::api::v1", "")]);
        assert_eq!(qualified(&table, "crate::api::v1", "self::X"), "crate::api::v1::X");
        assert_eq!(qualified(&table, "crate::api::v1", "super::X"), "crate::api::X");
        assert_eq!(qualified(&table, "crate::api::v1", "super::super::X"), "crate::X");
        assert_eq!(qualified(&table, "crate::api::v1", "crate::X"), "crate::X");
        assert_eq!(qualified(&table, "crate::api::v1", "::serde::X"), "::serde::X");
    }

    #[test]
    fn crate_root_follows_the_module_path() {
        let (_, table) = scan(&[("orders_api::orders", "")]);
        assert_eq!(
            qualified(&table, "orders_api::orders", "crate::Shared"),
            "orders_api::Shared"
        );
    }

    #[test]
    fn glob_imports_see_other_scanned_modules() {
        let (_, table) = scan(&[
            ("crate::models", "pub struct Order;"),
            ("crate::api", "use crate::models::*; use super::models::*;"),
        ]);
        assert_eq!(qualified(&table, "crate::api", "Order"), "crate::models::Order");
        assert_eq!(qualified(&table, "crate::api", "Unknown"), "Unknown");
    }

    #[test]
    fn inline_modules_extend_the_path() {
        let (descriptor, table) = scan(&[(
            "crate::orders",
            r#"
                pub mod nested {
                    use super::Orders;

                    #[tether_define::resource("items")]
                    pub struct Items {
                        #[parent]
                        pub parent: Orders,
                    }
                }

                #[resource("/orders")]
                pub struct Orders;
            "#,
        )]);
        let items = &descriptor.nodes[0];
        assert_eq!(items.path, "crate::orders::nested::Items");
        assert_eq!(
            items.parent.as_ref().and_then(type_key).as_deref(),
            Some("crate::orders::Orders")
        );
        assert_eq!(
            qualified(&table, "crate::orders", "nested::Items"),
            "crate::orders::nested::Items"
        );
    }

    #[test]
    fn impl_generics_are_not_qualified() {
        let (descriptor, _) = scan(&[(
            "crate::x",
            r#"
                pub struct T;
                pub struct Wrap<T>(T);
                impl<T> Get<Orders, T, ()> for Wrap<T> {}
            "#,
        )]);
        let contract = &descriptor.impls[0];
        assert_eq!(contract.generics, vec!["T"]);
        assert_eq!(contract.self_path, "crate::x::Wrap");
        assert_eq!(path_label(&contract.contract), "Get<Orders, T, ()>");
    }

    #[test]
    fn malformed_resource_attribute_is_a_parse_error() {
        let mut scanner = Scanner::new();
        scanner
            .add_str("bad.rs", "crate", "#[resource(orders)] pub struct Orders;")
            .unwrap();
        assert!(matches!(
            scanner.finish(),
            Err(GeneratorError::ParseError { .. })
        ));
    }

    #[test]
    fn invalid_rust_is_a_parse_error() {
        let mut scanner = Scanner::new();
        let err = scanner.add_str("bad.rs", "crate", "pub struct {").unwrap_err();
        assert!(matches!(err, GeneratorError::ParseError { .. }));
    }

    #[test]
    fn module_path_must_be_plain() {
        let mut scanner = Scanner::new();
        assert!(matches!(
            scanner.add_str("x.rs", "super::x", ""),
            Err(GeneratorError::ConfigError(_))
        ));
    }

    #[test]
    fn descriptor_source_from_cli_form() {
        let source: DescriptorSource = "src/orders.rs=crate::orders".parse().unwrap();
        assert_eq!(source.file, PathBuf::from("src/orders.rs"));
        assert_eq!(source.module_path, "crate::orders");
        assert!("src/orders.rs".parse::<DescriptorSource>().is_err());
    }
}
