//! Generator configuration and the `build.rs` builder.

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::descriptor::DescriptorSource;
use crate::errors::GeneratorError;
use crate::output::{output_path, write_atomic};
use crate::{Generation, compile};

/// Default output namespace (file stem of the generated file).
pub const DEFAULT_NAMESPACE: &str = "client";

/// Default path to the runtime crate in generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "::tether_define";

/// Everything one generator run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub sources: Vec<DescriptorSource>,
    /// Root node names (simple or absolute). Empty selects every parentless node.
    pub roots: Vec<String>,
    pub namespace: String,
    pub runtime_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            roots: Vec::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Checks the namespace and runtime path before anything is scanned.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::ConfigError`] when there are no sources, the
    /// namespace is not a plain identifier, or the runtime path does not
    /// parse as a Rust path.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.sources.is_empty() {
            return Err(GeneratorError::ConfigError(
                "at least one descriptor source is required".to_string(),
            ));
        }
        if syn::parse_str::<syn::Ident>(&self.namespace).is_err() {
            return Err(GeneratorError::ConfigError(format!(
                "namespace '{}' is not a valid identifier",
                self.namespace
            )));
        }
        self.runtime()?;
        Ok(())
    }

    /// The runtime path as a `syn::Path`.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::ConfigError`] if it does not parse.
    pub fn runtime(&self) -> Result<syn::Path, GeneratorError> {
        syn::parse_str(&self.runtime_path).map_err(|e| {
            GeneratorError::ConfigError(format!(
                "runtime path '{}' is not a valid path: {e}",
                self.runtime_path
            ))
        })
    }

    /// Crate name the contracts are recognized under, e.g. `tether_define`.
    pub fn runtime_crate(&self) -> String {
        self.runtime_path
            .trim_start_matches("::")
            .split("::")
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

/// Configures and runs the generator from a build script.
///
/// ## Examples
///
/// ```no_run
/// // build.rs
/// fn main() {
///     println!("cargo:rerun-if-changed=src/orders.rs");
///     tether_gen::Builder::new()
///         .descriptor("src/orders.rs", "crate::orders")
///         .namespace("client")
///         .generate()
///         .unwrap();
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: GeneratorConfig,
    out_dir: Option<PathBuf>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor file and the module path it occupies.
    pub fn descriptor(mut self, file: impl Into<PathBuf>, module_path: impl Into<String>) -> Self {
        self.config
            .sources
            .push(DescriptorSource::new(file, module_path));
        self
    }

    /// Restricts generation to the named root (repeatable).
    pub fn root(mut self, name: impl Into<String>) -> Self {
        self.config.roots.push(name.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.config.runtime_path = path.into();
        self
    }

    /// Output directory; defaults to `$OUT_DIR`.
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Compiles without writing. Diagnostics are returned as data.
    ///
    /// ## Errors
    ///
    /// See [`compile`].
    pub fn compile(&self) -> Result<Generation, GeneratorError> {
        compile(&self.config)
    }

    /// Compiles and writes `<out_dir>/<namespace>.rs`, returning its path.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::Diagnostics`] when the descriptor has any problem
    /// (nothing is written), [`GeneratorError::ConfigError`] when no output
    /// directory is known, plus everything [`compile`] and
    /// [`write_atomic`] return.
    pub fn generate(&self) -> Result<PathBuf, GeneratorError> {
        let out_dir = self.resolve_out_dir()?;
        let generation = self.compile()?.into_clean()?;
        let path = output_path(&out_dir, &self.config.namespace);
        write_atomic(&path, &generation.code)?;
        info!(
            operations = generation.tree.operation_count(),
            units = generation.tree.unit_count(),
            "generated {}",
            path.display()
        );
        Ok(path)
    }

    fn resolve_out_dir(&self) -> Result<PathBuf, GeneratorError> {
        if let Some(dir) = &self.out_dir {
            return Ok(dir.clone());
        }
        env::var_os("OUT_DIR")
            .map(|dir| Path::new(&dir).to_path_buf())
            .ok_or_else(|| {
                GeneratorError::ConfigError(
                    "no output directory: call out_dir() or run from a build script".to_string(),
                )
            })
    }
}
