//! Core graph types
//!
//! This module contains the fundamental data structures used in the include
//! graph.

use petgraph::graph::DiGraph;

use crate::scanner::IncludeForm;

/// The directed include graph: headers as nodes, includes as edges
pub type IncludeGraph = DiGraph<HeaderNode, IncludeEdge>;

/// A header file in the include graph
///
/// Identity is the normalized identifier string; a node carries no other
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNode {
    name: String,
}

impl HeaderNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An include relationship between two headers
///
/// Duplicate includes of the same target collapse to one edge; the weight
/// records the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeEdge {
    form: IncludeForm,
    line: usize,
}

impl IncludeEdge {
    pub fn new(form: IncludeForm, line: usize) -> Self {
        Self { form, line }
    }

    pub fn form(&self) -> IncludeForm {
        self.form
    }

    /// 1-based line number of the first include of this target
    pub fn line(&self) -> usize {
        self.line
    }
}
