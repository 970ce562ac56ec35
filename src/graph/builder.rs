use std::collections::HashMap;
use std::path::Path;

use petgraph::graph::NodeIndex;

use super::types::{HeaderNode, IncludeEdge, IncludeGraph};
use crate::error::IncludeCyclesError;
use crate::scanner::{self, IncludeDirective};

/// Builder for constructing include graphs
///
/// The builder owns the graph while it is being assembled. Nodes are
/// created lazily for both ends of every edge and interned by normalized
/// identifier, so the same header referenced from any number of files maps
/// to a single node. Inserting an edge that already exists is a no-op (set
/// semantics); multiplicity never matters for cycle enumeration.
pub struct IncludeGraphBuilder {
    graph: IncludeGraph,
    node_indices: HashMap<String, NodeIndex>,
    strip_prefix: String,
}

impl IncludeGraphBuilder {
    /// Create a new builder.
    ///
    /// `strip_prefix` is the root prefix removed during identifier
    /// normalization (see [`scanner::normalize_header_id`]); it applies
    /// equally to scanned file paths and include targets.
    pub fn new(strip_prefix: impl Into<String>) -> Self {
        Self {
            graph: IncludeGraph::new(),
            node_indices: HashMap::new(),
            strip_prefix: strip_prefix.into(),
        }
    }

    /// Scan one header file and union its include edges into the graph.
    ///
    /// An unreadable file is a hard error carrying the path; nothing is
    /// partially inserted for it.
    pub fn add_file(&mut self, path: &Path) -> Result<(), IncludeCyclesError> {
        let directives = scanner::scan_file(path)?;
        let from = path.to_string_lossy();
        self.add_directives(&from, &directives);
        Ok(())
    }

    /// Union pre-scanned directives attributed to `from` into the graph.
    ///
    /// Both `from` and every target run through the shared normalization
    /// rule here, in one place.
    pub fn add_directives(&mut self, from: &str, directives: &[IncludeDirective]) {
        let from_id = scanner::normalize_header_id(from, &self.strip_prefix);

        for directive in directives {
            let to_id = scanner::normalize_header_id(&directive.target, &self.strip_prefix);

            let from_idx = self.intern(&from_id);
            let to_idx = self.intern(&to_id);

            if self.graph.find_edge(from_idx, to_idx).is_none() {
                self.graph
                    .add_edge(from_idx, to_idx, IncludeEdge::new(directive.form, directive.line));
            }
        }
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(HeaderNode::new(id));
        self.node_indices.insert(id.to_string(), idx);
        idx
    }

    pub fn graph(&self) -> &IncludeGraph {
        &self.graph
    }

    /// Consume the builder, yielding the finished graph.
    pub fn into_graph(self) -> IncludeGraph {
        self.graph
    }
}
