//! Accumulating diagnostics for descriptor problems.
//!
//! Generation never stops at the first bad capability or colliding subtree.
//! Every stage pushes what it finds into a shared [`Diagnostics`] collector,
//! skips the smallest affected scope, and carries on, so one run reports
//! every problem in the descriptor.

use std::fmt;
use std::path::PathBuf;

use tether_define::Verb;
use thiserror::Error;
use tracing::warn;

/// What went wrong. Names are absolute item paths (`crate::orders::Orders`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("capability `{capability}` implements no contract; implement `Get<..>` or `Post<..>`")]
    MissingContract { capability: String },

    #[error(
        "capability `{capability}` implements {} contracts ({}); exactly one is allowed",
        .contracts.len(),
        .contracts.join(", ")
    )]
    AmbiguousContract {
        capability: String,
        contracts: Vec<String>,
    },

    #[error("capability `{capability}` implements `{contract}`, which is not a tether contract")]
    UnrecognizedContract { capability: String, contract: String },

    #[error("capability `{capability}`: {verb} contract has no type argument for slot {slot} ({name})")]
    MissingTypeArgument {
        capability: String,
        verb: Verb,
        slot: usize,
        name: &'static str,
    },

    #[error("capability `{capability}`: slot {slot} ({name}) is unresolved: {reason}")]
    UnresolvedTypeArgument {
        capability: String,
        slot: usize,
        name: &'static str,
        reason: String,
    },

    #[error(
        "capability `{capability}`: {verb} contract takes {} type arguments, found another at slot {slot}",
        .verb.arity()
    )]
    UnexpectedTypeArgument {
        capability: String,
        verb: Verb,
        slot: usize,
    },

    #[error("capability `{capability}`: Node slot `{node}` is not a #[resource] node")]
    UnknownNode { capability: String, node: String },

    #[error("node `{node}`: parent `{parent}` is not a #[resource] node")]
    UnknownParent { node: String, parent: String },

    #[error("root `{root}` does not name a #[resource] node")]
    UnknownRoot { root: String },

    #[error("root `{root}` is nested under `{parent}` and cannot be generated on its own")]
    NotARoot { root: String, parent: String },

    #[error("roots `{first}` and `{second}` both map to output module `{module}`; both are skipped")]
    RootCollision {
        first: String,
        second: String,
        module: String,
    },

    #[error(
        "node `{parent}`: children `{first}` and `{second}` both map to output module `{module}`; the subtree is skipped"
    )]
    SiblingCollision {
        parent: String,
        first: String,
        second: String,
        module: String,
    },

    #[error(
        "node `{node}`: capabilities {} all produce operation `{operation}`; all are skipped",
        .capabilities.join(", ")
    )]
    OperationCollision {
        node: String,
        operation: String,
        capabilities: Vec<String>,
    },

    #[error("`{path}` is declared more than once")]
    DuplicateDeclaration { path: String },

    #[error("`{item}` has no usable snake_case name (got `{name}`); rename it")]
    InvalidOutputName { item: String, name: String },
}

impl DiagnosticKind {
    /// Resolution errors concern one capability's type arguments; everything
    /// else is a configuration error.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::MissingTypeArgument { .. }
                | DiagnosticKind::UnresolvedTypeArgument { .. }
                | DiagnosticKind::UnexpectedTypeArgument { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        if self.is_resolution() {
            "resolution error"
        } else {
            "configuration error"
        }
    }
}

/// One reported problem, optionally tied to the descriptor file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub file: Option<PathBuf>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}: {}", file.display(), self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Collector passed through every generation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a problem that is not tied to one file.
    pub fn report(&mut self, kind: DiagnosticKind) {
        self.push(Diagnostic { kind, file: None });
    }

    /// Records a problem found in `file`.
    pub fn report_in(&mut self, file: impl Into<PathBuf>, kind: DiagnosticKind) {
        self.push(Diagnostic {
            kind,
            file: Some(file.into()),
        });
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        warn!(kind = diagnostic.kind.label(), "{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// The kinds alone, in report order. Handy for assertions.
    pub fn kinds(&self) -> Vec<&DiagnosticKind> {
        self.entries.iter().map(|d| &d.kind).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.entries.len() == 1 {
            "problem"
        } else {
            "problems"
        };
        write!(f, "descriptor has {} {noun}", self.entries.len())?;
        for entry in &self.entries {
            write!(f, "\n  - {}: {entry}", entry.kind.label())?;
        }
        Ok(())
    }
}
