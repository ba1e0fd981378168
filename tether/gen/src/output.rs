//! Output assembly and file writing for generated code.
//!
//! The generator produces a single file per output namespace:
//!
//! ```text
//! $OUT_DIR/
//! └── client.rs   # one `pub mod` per root, nested per node
//! ```
//!
//! The file carries no inner attributes or `//!` docs, so it can be pulled
//! in with `include!` as well as declared as a module.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;
use tracing::info;

use crate::codegen::generate_unit;
use crate::errors::GeneratorError;
use crate::tree::CompiledTree;

/// Notice placed at the top of every generated file.
pub const GENERATED_HEADER: &str =
    "// This code was automatically generated by tether-gen. Do not edit manually.\n";

/// Assembles every root unit into one token stream.
pub fn assemble(tree: &CompiledTree, runtime: &syn::Path) -> TokenStream {
    let roots = tree.roots.iter().map(|unit| generate_unit(unit, runtime));
    quote! {
        #(#roots)*
    }
}

/// Validates generated code using syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease, prepending the generated notice.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_HEADER}\n{formatted}")
}

/// Assembles, validates and formats the whole tree.
///
/// ## Errors
///
/// See [`validate_code`].
pub fn render(tree: &CompiledTree, runtime: &syn::Path) -> Result<String, GeneratorError> {
    let file = validate_code(&assemble(tree, runtime))?;
    Ok(format_code(&file))
}

/// `<out_dir>/<namespace>.rs`
pub fn output_path(out_dir: &Path, namespace: &str) -> PathBuf {
    out_dir.join(format!("{namespace}.rs"))
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(path = %path.display(), bytes = content.len(), "wrote generated client");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::CompiledUnit;
    use tempfile::TempDir;

    fn runtime() -> syn::Path {
        syn::parse_str("::tether_define").unwrap()
    }

    fn tree() -> CompiledTree {
        CompiledTree {
            roots: vec![CompiledUnit {
                name: "Orders".to_string(),
                path: "crate::orders::Orders".to_string(),
                module: "orders".to_string(),
                template: "/orders".to_string(),
                bindings: Vec::new(),
                children: Vec::new(),
            }],
        }
    }

    #[test]
    fn validate_rejects_broken_tokens() {
        let broken = quote! { pub mod };
        assert!(matches!(
            validate_code(&broken),
            Err(GeneratorError::CodeGenError(_))
        ));
    }

    #[test]
    fn rendered_file_starts_with_header_and_has_no_inner_docs() {
        let code = render(&tree(), &runtime()).unwrap();
        assert!(code.starts_with(GENERATED_HEADER));
        assert!(code.contains("pub mod orders {"));
        assert!(code.contains("/// `Orders` at `/orders`."));
        assert!(!code.contains("//!"));
    }

    #[test]
    fn empty_tree_renders_header_only() {
        let code = render(&CompiledTree::default(), &runtime()).unwrap();
        assert_eq!(code.trim_end(), GENERATED_HEADER.trim_end());
    }

    #[test]
    fn output_path_uses_namespace() {
        assert_eq!(
            output_path(Path::new("/tmp/out"), "client"),
            PathBuf::from("/tmp/out/client.rs")
        );
    }

    #[test]
    fn write_atomic_creates_parents_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("client.rs");
        write_atomic(&path, "// generated\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "// generated\n");
        assert!(!path.with_extension("tmp").exists());
    }
}
