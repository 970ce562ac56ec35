use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;

use crate::graph::IncludeGraph;

/// Detector for enumerating elementary include cycles
///
/// Decomposes the graph into strongly connected components with Tarjan's
/// algorithm, then enumerates the elementary cycles inside each component
/// with a rooted depth-first search: for every member `s` of a component,
/// in ascending node-index order, the search walks simple paths through
/// members with index >= `s` and records each path that returns to `s`.
/// Every elementary cycle is therefore found exactly once, rooted at its
/// smallest node index, and rotations of the same cycle never appear
/// twice.
///
/// Enumeration is exponential in the worst case; include graphs are sparse
/// enough in practice that this does not matter, and no cap is imposed
/// unless one is requested via [`CycleDetector::with_limit`].
pub struct CycleDetector {
    cycles: Vec<IncludeCycle>,
    limit: Option<usize>,
    truncated: bool,
}

/// One elementary cycle through the include graph
///
/// Headers are stored in traversal order; the closing edge back to the
/// first header is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeCycle {
    headers: Vec<String>,
}

impl IncludeCycle {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Render the cycle as a closed chain: `a.h → b.h → a.h`
    pub fn chain(&self) -> String {
        let mut parts: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        if let Some(&first) = parts.first() {
            parts.push(first);
        }
        parts.join(" → ")
    }
}

struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    cursor: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector with unbounded enumeration
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create a detector that stops enumerating after `limit` cycles
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            cycles: Vec::new(),
            limit,
            truncated: false,
        }
    }

    /// Enumerate all elementary cycles in the include graph
    pub fn detect_cycles(&mut self, graph: &IncludeGraph) {
        for scc in tarjan_scc(graph) {
            if self.truncated {
                break;
            }

            if scc.len() == 1 {
                // A single-node component is a cycle only via a self-loop.
                let node = scc[0];
                if graph.find_edge(node, node).is_some() {
                    self.record(graph, &[node]);
                }
            } else {
                self.find_cycles_in_scc(graph, &scc);
            }
        }
    }

    fn find_cycles_in_scc(&mut self, graph: &IncludeGraph, scc: &[NodeIndex]) {
        let members: HashSet<NodeIndex> = scc.iter().copied().collect();
        let mut roots: Vec<NodeIndex> = scc.to_vec();
        roots.sort_unstable();

        for &root in &roots {
            if self.truncated {
                return;
            }
            self.search_from_root(graph, &members, root);
        }
    }

    /// Walk every simple path through `members` with index >= `root` that
    /// starts and ends at `root`, recording each as a cycle.
    fn search_from_root(
        &mut self,
        graph: &IncludeGraph,
        members: &HashSet<NodeIndex>,
        root: NodeIndex,
    ) {
        let mut path: Vec<NodeIndex> = vec![root];
        let mut on_path: HashSet<NodeIndex> = HashSet::from([root]);
        let mut stack = vec![Frame {
            node: root,
            successors: successors_in(graph, members, root),
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.cursor >= frame.successors.len() {
                let node = frame.node;
                stack.pop();
                path.pop();
                on_path.remove(&node);
                continue;
            }

            let next = frame.successors[frame.cursor];
            frame.cursor += 1;

            if next == root {
                self.record(graph, &path);
                if self.truncated {
                    return;
                }
                continue;
            }

            // Cycles whose smallest node is below `root` were already
            // found from that smaller root.
            if next < root || on_path.contains(&next) {
                continue;
            }

            path.push(next);
            on_path.insert(next);
            stack.push(Frame {
                node: next,
                successors: successors_in(graph, members, next),
                cursor: 0,
            });
        }
    }

    fn record(&mut self, graph: &IncludeGraph, path: &[NodeIndex]) {
        let headers = path.iter().map(|&idx| graph[idx].name().to_string()).collect();
        self.cycles.push(IncludeCycle::new(headers));

        if let Some(limit) = self.limit
            && self.cycles.len() >= limit
        {
            self.truncated = true;
        }
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[IncludeCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Whether enumeration stopped early because the cycle limit was hit
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Add a cycle to the detector (used by report tests and filters)
    pub fn add_cycle(&mut self, cycle: IncludeCycle) {
        self.cycles.push(cycle);
    }
}

/// Sorted, deduplicated outgoing neighbors of `node` within `members`.
///
/// Sorting makes enumeration order deterministic; deduplication guards
/// against parallel edges in graphs not built through the builder.
fn successors_in(
    graph: &IncludeGraph,
    members: &HashSet<NodeIndex>,
    node: NodeIndex,
) -> Vec<NodeIndex> {
    let mut succs: Vec<NodeIndex> = graph
        .neighbors(node)
        .filter(|n| members.contains(n))
        .collect();
    succs.sort_unstable();
    succs.dedup();
    succs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::IncludeGraphBuilder;
    use crate::scanner::{IncludeDirective, IncludeForm};

    fn graph_from(edges: &[(&str, &str)]) -> IncludeGraph {
        let mut builder = IncludeGraphBuilder::new("");
        for (from, to) in edges {
            builder.add_directives(
                from,
                &[IncludeDirective {
                    target: (*to).to_string(),
                    form: IncludeForm::Angle,
                    line: 1,
                }],
            );
        }
        builder.into_graph()
    }

    fn detect(edges: &[(&str, &str)]) -> CycleDetector {
        let graph = graph_from(edges);
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph);
        detector
    }

    fn sorted_chains(detector: &CycleDetector) -> Vec<String> {
        let mut chains: Vec<String> = detector.cycles().iter().map(IncludeCycle::chain).collect();
        chains.sort();
        chains
    }

    #[test]
    fn test_no_cycles_in_linear_chain() {
        let detector = detect(&[("a.h", "b.h"), ("b.h", "c.h"), ("c.h", "d.h")]);

        assert_eq!(detector.cycle_count(), 0);
        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_empty_graph() {
        let graph = IncludeGraph::new();
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph);

        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // a includes b and c; both include d. Shared descendant, no cycle.
        let detector = detect(&[
            ("a.h", "b.h"),
            ("a.h", "c.h"),
            ("b.h", "d.h"),
            ("c.h", "d.h"),
        ]);

        assert_eq!(detector.cycle_count(), 0);
    }

    #[test]
    fn test_simple_two_node_cycle() {
        let detector = detect(&[("foo.h", "bar.h"), ("bar.h", "foo.h")]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.len(), 2);
        assert!(cycle.headers().contains(&"foo.h".to_string()));
        assert!(cycle.headers().contains(&"bar.h".to_string()));
    }

    #[test]
    fn test_three_node_cycle_reported_once() {
        // A planted a -> b -> c -> a cycle must come back exactly once,
        // not once per rotation.
        let detector = detect(&[("a.h", "b.h"), ("b.h", "c.h"), ("c.h", "a.h")]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.len(), 3);
        for header in ["a.h", "b.h", "c.h"] {
            assert!(cycle.headers().contains(&header.to_string()));
        }
    }

    #[test]
    fn test_cycle_order_reflects_traversal() {
        let detector = detect(&[("a.h", "b.h"), ("b.h", "c.h"), ("c.h", "a.h")]);

        // Consecutive headers (and last -> first) must each be a real edge.
        let headers = detector.cycles()[0].headers();
        assert_eq!(headers, ["a.h", "b.h", "c.h"]);
    }

    #[test]
    fn test_self_include_is_a_length_one_cycle() {
        let detector = detect(&[("a.h", "a.h")]);

        assert_eq!(detector.cycle_count(), 1);
        assert_eq!(detector.cycles()[0].headers(), ["a.h"]);
        assert_eq!(detector.cycles()[0].chain(), "a.h → a.h");
    }

    #[test]
    fn test_self_loop_inside_larger_component() {
        let detector = detect(&[("a.h", "b.h"), ("b.h", "a.h"), ("a.h", "a.h")]);

        assert_eq!(detector.cycle_count(), 2);
        assert_eq!(
            sorted_chains(&detector),
            vec!["a.h → a.h", "a.h → b.h → a.h"]
        );
    }

    #[test]
    fn test_two_disjoint_cycles() {
        let detector = detect(&[
            ("a.h", "b.h"),
            ("b.h", "a.h"),
            ("c.h", "d.h"),
            ("d.h", "e.h"),
            ("e.h", "c.h"),
        ]);

        assert_eq!(detector.cycle_count(), 2);
    }

    #[test]
    fn test_overlapping_cycles_in_one_component() {
        // a -> b -> c -> a plus the shortcut b -> a gives two elementary
        // cycles sharing the edge a -> b.
        let detector = detect(&[
            ("a.h", "b.h"),
            ("b.h", "c.h"),
            ("c.h", "a.h"),
            ("b.h", "a.h"),
        ]);

        assert_eq!(detector.cycle_count(), 2);
        assert_eq!(
            sorted_chains(&detector),
            vec!["a.h → b.h → a.h", "a.h → b.h → c.h → a.h"]
        );
    }

    #[test]
    fn test_cycles_sharing_a_node() {
        let detector = detect(&[
            ("hub.h", "left.h"),
            ("left.h", "hub.h"),
            ("hub.h", "right.h"),
            ("right.h", "hub.h"),
        ]);

        assert_eq!(detector.cycle_count(), 2);
    }

    #[test]
    fn test_fully_connected_triangle_enumerates_all_five() {
        // Three 2-cycles plus the two directed 3-cycles.
        let detector = detect(&[
            ("a.h", "b.h"),
            ("b.h", "a.h"),
            ("b.h", "c.h"),
            ("c.h", "b.h"),
            ("a.h", "c.h"),
            ("c.h", "a.h"),
        ]);

        assert_eq!(detector.cycle_count(), 5);
    }

    #[test]
    fn test_cycle_limit_truncates_enumeration() {
        let graph = graph_from(&[
            ("a.h", "b.h"),
            ("b.h", "a.h"),
            ("b.h", "c.h"),
            ("c.h", "b.h"),
            ("a.h", "c.h"),
            ("c.h", "a.h"),
        ]);

        let mut detector = CycleDetector::with_limit(Some(2));
        detector.detect_cycles(&graph);

        assert_eq!(detector.cycle_count(), 2);
        assert!(detector.truncated());
    }

    #[test]
    fn test_unlimited_detector_is_not_truncated() {
        let detector = detect(&[("a.h", "b.h"), ("b.h", "a.h")]);
        assert!(!detector.truncated());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let edges = [
            ("a.h", "b.h"),
            ("b.h", "c.h"),
            ("c.h", "a.h"),
            ("b.h", "a.h"),
            ("d.h", "d.h"),
        ];

        let first = detect(&edges);
        let second = detect(&edges);

        assert_eq!(sorted_chains(&first), sorted_chains(&second));
    }

    #[test]
    fn test_acyclic_tail_into_cycle() {
        // entry.h reaches the cycle but is not part of it.
        let detector = detect(&[("entry.h", "a.h"), ("a.h", "b.h"), ("b.h", "a.h")]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert!(!cycle.headers().contains(&"entry.h".to_string()));
    }
}
