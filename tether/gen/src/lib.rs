//! Tether code generator library.
//!
//! This crate reads tether API descriptors (Rust source annotated with
//! `#[resource]` and `#[capability]`) and generates typed forwarding
//! clients. Nothing in the descriptor is compiled or executed; it is parsed
//! with `syn`.
//!
//! ## Pipeline
//!
//! 1. [`descriptor`] - Scan sources, qualify every type to an absolute path
//! 2. [`resolver`] - Resolve each capability's contract slots by position
//! 3. [`tree`] - Build the node tree, detect collisions, prune empty nodes
//! 4. [`codegen`] - Emit one module per node and one function per capability
//! 5. [`output`] - Validate, format and write the file atomically
//!
//! Descriptor problems never stop the pipeline early. They accumulate in
//! [`Diagnostics`] so a single run reports all of them; [`compile`] returns
//! them alongside whatever could be generated, and [`Builder::generate`]
//! refuses to write when there are any.
//!
//! ## Example Usage
//!
//! ```no_run
//! use tether_gen::{Builder, GeneratorError};
//!
//! let generation = Builder::new()
//!     .descriptor("src/orders.rs", "crate::orders")
//!     .compile()?;
//! for diagnostic in &generation.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! println!("{}", generation.code);
//! # Ok::<(), GeneratorError>(())
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! pub mod orders {
//!     pub async fn list_orders(transport, node: Orders) -> ApiResponse<Vec<Order>, ()>;
//!     pub async fn place_order(transport, node: Orders, param: Order) -> ApiResponse<u64, PlaceOrderError>;
//!
//!     pub mod order_by_id {
//!         pub async fn fetch_order(transport, node: OrderById) -> ApiResponse<Order, FetchOrderError>;
//!     }
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod errors;
pub mod naming;
pub mod output;
pub mod resolver;
pub mod tree;

pub use config::{Builder, GeneratorConfig};
pub use descriptor::{DescriptorSource, Scanner};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use errors::GeneratorError;
pub use tree::{CompiledTree, CompiledUnit};

use tracing::debug;

/// The result of one generator run.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The formatted file, header included.
    pub code: String,
    pub tree: CompiledTree,
    pub diagnostics: Diagnostics,
}

impl Generation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Turns reported diagnostics into an error.
    ///
    /// ## Errors
    ///
    /// [`GeneratorError::Diagnostics`] if any were reported.
    pub fn into_clean(self) -> Result<Self, GeneratorError> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(GeneratorError::Diagnostics(self.diagnostics))
        }
    }
}

/// Reads every configured source and compiles it.
///
/// ## Errors
///
/// Invalid configuration, unreadable or unparseable sources, or generated
/// code that fails validation. Descriptor problems are not errors here; they
/// are returned in [`Generation::diagnostics`].
pub fn compile(config: &GeneratorConfig) -> Result<Generation, GeneratorError> {
    config.validate()?;
    let mut scanner = Scanner::new();
    for source in &config.sources {
        scanner.add_source(source)?;
    }
    compile_scanned(scanner, config)
}

/// Compiles sources already added to `scanner`; `config.sources` is ignored.
///
/// ## Errors
///
/// See [`compile`].
pub fn compile_scanned(
    scanner: Scanner,
    config: &GeneratorConfig,
) -> Result<Generation, GeneratorError> {
    let runtime = config.runtime()?;
    let (descriptor, _) = scanner.finish()?;

    let mut diagnostics = Diagnostics::new();
    let bindings = resolver::resolve_all(&descriptor, &config.runtime_crate(), &mut diagnostics);
    let tree = tree::compile_tree(&descriptor, bindings, &config.roots, &mut diagnostics);
    let code = output::render(&tree, &runtime)?;

    debug!(
        operations = tree.operation_count(),
        units = tree.unit_count(),
        diagnostics = diagnostics.len(),
        "compiled descriptor"
    );
    Ok(Generation {
        code,
        tree,
        diagnostics,
    })
}
