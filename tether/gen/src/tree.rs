//! Tree compilation.
//!
//! Turns the flat descriptor into a tree of [`CompiledUnit`]s, one per node
//! that carries a capability or has a descendant that does. Children are
//! found structurally (a node is a child of the node its `#[parent]` field
//! names) and visited in declaration order, so output is reproducible.
//!
//! Configuration problems skip the smallest scope that contains them:
//!
//! - unknown parent: that node's subtree
//! - sibling collision: the parent's whole subtree
//! - root collision: both roots
//! - operation collision: every colliding binding on that node
//! - unusable output name: that binding, or that node's subtree

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::descriptor::{Descriptor, NodeDecl, type_key, type_label};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::naming::{is_valid_output_name, snake_case};
use crate::resolver::CapabilityBinding;

/// One generated module.
#[derive(Debug, Clone)]
pub struct CompiledUnit {
    /// Node simple name.
    pub name: String,
    /// Node absolute path.
    pub path: String,
    /// Output module name.
    pub module: String,
    /// Full route template, e.g. `/orders/{id}`.
    pub template: String,
    pub bindings: Vec<CapabilityBinding>,
    pub children: Vec<CompiledUnit>,
}

impl CompiledUnit {
    pub fn operation_count(&self) -> usize {
        self.bindings.len()
            + self
                .children
                .iter()
                .map(CompiledUnit::operation_count)
                .sum::<usize>()
    }

    pub fn unit_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CompiledUnit::unit_count)
            .sum::<usize>()
    }
}

/// The mirrored hierarchy for every emitted root.
#[derive(Debug, Clone, Default)]
pub struct CompiledTree {
    pub roots: Vec<CompiledUnit>,
}

impl CompiledTree {
    pub fn operation_count(&self) -> usize {
        self.roots.iter().map(CompiledUnit::operation_count).sum()
    }

    pub fn unit_count(&self) -> usize {
        self.roots.iter().map(CompiledUnit::unit_count).sum()
    }

    /// Finds a unit by its module path below the roots, e.g. `["orders", "order_by_id"]`.
    pub fn unit(&self, modules: &[&str]) -> Option<&CompiledUnit> {
        let (first, rest) = modules.split_first()?;
        let mut unit = self.roots.iter().find(|u| u.module == *first)?;
        for module in rest {
            unit = unit.children.iter().find(|u| u.module == *module)?;
        }
        Some(unit)
    }
}

/// Compiles the tree for the selected roots (all parentless nodes when
/// `roots` is empty).
pub fn compile_tree(
    descriptor: &Descriptor,
    bindings: Vec<CapabilityBinding>,
    roots: &[String],
    diagnostics: &mut Diagnostics,
) -> CompiledTree {
    let mut compiler = TreeCompiler::new(descriptor, diagnostics);
    compiler.attach(bindings);
    let selected = compiler.select_roots(roots);

    let roots = selected
        .into_iter()
        .filter_map(|idx| compiler.build(idx, ""))
        .collect();
    CompiledTree { roots }
}

struct TreeCompiler<'a> {
    nodes: &'a [NodeDecl],
    /// Node path -> index of its first declaration.
    index: BTreeMap<&'a str, usize>,
    /// Parent index per node; `None` for parentless nodes.
    parents: Vec<Option<usize>>,
    /// Nodes whose parent could not be resolved.
    detached: BTreeSet<usize>,
    children: Vec<Vec<usize>>,
    bindings: Vec<Vec<CapabilityBinding>>,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> TreeCompiler<'a> {
    fn new(descriptor: &'a Descriptor, diagnostics: &'a mut Diagnostics) -> Self {
        let nodes = descriptor.nodes.as_slice();
        let mut index = BTreeMap::new();
        let mut duplicates = BTreeSet::new();
        for (idx, node) in nodes.iter().enumerate() {
            if index.contains_key(node.path.as_str()) {
                diagnostics.report_in(
                    &node.file,
                    DiagnosticKind::DuplicateDeclaration {
                        path: node.path.clone(),
                    },
                );
                duplicates.insert(idx);
            } else {
                index.insert(node.path.as_str(), idx);
            }
        }

        let mut parents = vec![None; nodes.len()];
        let mut detached = BTreeSet::new();
        let mut children = vec![Vec::new(); nodes.len()];
        for (idx, node) in nodes.iter().enumerate() {
            if duplicates.contains(&idx) {
                detached.insert(idx);
                continue;
            }
            let Some(parent_ty) = &node.parent else {
                continue;
            };
            match type_key(parent_ty).and_then(|key| index.get(key.as_str()).copied()) {
                Some(parent) => {
                    parents[idx] = Some(parent);
                    children[parent].push(idx);
                }
                None => {
                    diagnostics.report_in(
                        &node.file,
                        DiagnosticKind::UnknownParent {
                            node: node.path.clone(),
                            parent: type_label(parent_ty),
                        },
                    );
                    detached.insert(idx);
                }
            }
        }

        Self {
            nodes,
            index,
            parents,
            detached,
            children,
            bindings: vec![Vec::new(); nodes.len()],
            diagnostics,
        }
    }

    /// Attaches each binding to the node its Node slot names, dropping
    /// every binding involved in an operation-name collision.
    fn attach(&mut self, bindings: Vec<CapabilityBinding>) {
        for binding in bindings {
            let operation = binding.operation();
            if !is_valid_output_name(&operation) {
                self.diagnostics.report_in(
                    &binding.file,
                    DiagnosticKind::InvalidOutputName {
                        item: binding.capability.clone(),
                        name: operation,
                    },
                );
                continue;
            }
            match binding
                .node_path()
                .and_then(|key| self.index.get(key.as_str()).copied())
            {
                Some(idx) => self.bindings[idx].push(binding),
                None => self.diagnostics.report_in(
                    &binding.file,
                    DiagnosticKind::UnknownNode {
                        capability: binding.capability.clone(),
                        node: type_label(&binding.node),
                    },
                ),
            }
        }

        for idx in 0..self.nodes.len() {
            let mut by_operation: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for binding in &self.bindings[idx] {
                by_operation
                    .entry(binding.operation())
                    .or_default()
                    .push(binding.capability.clone());
            }
            let colliding: BTreeSet<String> = by_operation
                .into_iter()
                .filter(|(_, capabilities)| capabilities.len() > 1)
                .map(|(operation, capabilities)| {
                    self.diagnostics.report(DiagnosticKind::OperationCollision {
                        node: self.nodes[idx].path.clone(),
                        operation: operation.clone(),
                        capabilities,
                    });
                    operation
                })
                .collect();
            if !colliding.is_empty() {
                self.bindings[idx].retain(|b| !colliding.contains(&b.operation()));
            }
        }
    }

    fn select_roots(&mut self, requested: &[String]) -> Vec<usize> {
        let mut selected: Vec<usize> = Vec::new();
        if requested.is_empty() {
            selected.extend(
                (0..self.nodes.len())
                    .filter(|idx| self.nodes[*idx].parent.is_none() && !self.detached.contains(idx)),
            );
        } else {
            for root in requested {
                let matches: Vec<usize> = (0..self.nodes.len())
                    .filter(|idx| !self.detached.contains(idx))
                    .filter(|idx| {
                        let node = &self.nodes[*idx];
                        node.name == *root || node.path == *root
                    })
                    .collect();
                if matches.is_empty() {
                    self.diagnostics.report(DiagnosticKind::UnknownRoot { root: root.clone() });
                }
                for idx in matches {
                    if let Some(parent) = self.parents[idx] {
                        self.diagnostics.report(DiagnosticKind::NotARoot {
                            root: self.nodes[idx].path.clone(),
                            parent: self.nodes[parent].path.clone(),
                        });
                    } else if !selected.contains(&idx) {
                        selected.push(idx);
                    }
                }
            }
            selected.sort_unstable();
        }

        let rejected = self.collisions(&selected, None);
        selected.retain(|idx| !rejected.contains(idx));
        selected
    }

    /// Reports every pair in `group` sharing a simple name or output module
    /// name, and returns the indices involved. `parent` is `None` for roots.
    fn collisions(&mut self, group: &[usize], parent: Option<usize>) -> BTreeSet<usize> {
        let nodes = self.nodes;
        let mut involved = BTreeSet::new();
        for (i, &a) in group.iter().enumerate() {
            for &b in &group[i + 1..] {
                let (first, second) = (&nodes[a], &nodes[b]);
                let module = snake_case(&first.name);
                if first.name != second.name && module != snake_case(&second.name) {
                    continue;
                }
                let kind = match parent {
                    Some(parent) => DiagnosticKind::SiblingCollision {
                        parent: nodes[parent].path.clone(),
                        first: first.path.clone(),
                        second: second.path.clone(),
                        module,
                    },
                    None => DiagnosticKind::RootCollision {
                        first: first.path.clone(),
                        second: second.path.clone(),
                        module,
                    },
                };
                self.diagnostics.report(kind);
                involved.insert(a);
                involved.insert(b);
            }
        }
        involved
    }

    fn build(&mut self, idx: usize, parent_template: &str) -> Option<CompiledUnit> {
        let nodes = self.nodes;
        let node = &nodes[idx];
        let module = snake_case(&node.name);
        if !is_valid_output_name(&module) {
            self.diagnostics.report_in(
                &node.file,
                DiagnosticKind::InvalidOutputName {
                    item: node.path.clone(),
                    name: module,
                },
            );
            return None;
        }
        let template = tether_define::resource::join_segments(parent_template, &node.segment);
        debug!(node = %node.path, template = %template, "visiting node");

        let children = self.children[idx].clone();
        if !self.collisions(&children, Some(idx)).is_empty() {
            return None;
        }

        let child_units: Vec<CompiledUnit> = children
            .into_iter()
            .filter_map(|child| self.build(child, &template))
            .collect();
        let bindings = std::mem::take(&mut self.bindings[idx]);

        if bindings.is_empty() && child_units.is_empty() {
            debug!(node = %node.path, "pruned node without capabilities");
            return None;
        }

        Some(CompiledUnit {
            name: node.name.clone(),
            path: node.path.clone(),
            module,
            template,
            bindings,
            children: child_units,
        })
    }
}
