//! # Cycle Detection Module
//!
//! This module implements the enumeration of elementary cycles in the
//! include graph.
//!
//! ## Algorithm
//!
//! Tarjan's Strongly Connected Components algorithm decomposes the graph
//! in O(V + E); elementary cycles can only exist inside a single
//! component. Within each component a rooted depth-first search walks
//! simple paths restricted to nodes with index not below the root,
//! recording every path that closes back on the root. Each elementary
//! cycle is produced exactly once - rooted at its smallest node index -
//! so rotations of the same cycle are never reported twice.
//!
//! Enumeration is exponential in the worst case (dense components hold
//! combinatorially many cycles). Include graphs are sparse in practice;
//! for pathological inputs an explicit limit can be set, which marks the
//! result as truncated instead of failing.
//!
//! ## Example
//!
//! ```
//! use include_cycles::detector::CycleDetector;
//! use include_cycles::graph::{HeaderNode, IncludeEdge, IncludeGraph};
//! use include_cycles::scanner::IncludeForm;
//!
//! let mut graph = IncludeGraph::new();
//! let foo = graph.add_node(HeaderNode::new("foo.h"));
//! let bar = graph.add_node(HeaderNode::new("bar.h"));
//!
//! // foo.h and bar.h include each other
//! graph.add_edge(foo, bar, IncludeEdge::new(IncludeForm::Angle, 1));
//! graph.add_edge(bar, foo, IncludeEdge::new(IncludeForm::Angle, 1));
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycle_count(), 1);
//! assert_eq!(detector.cycles()[0].chain(), "foo.h → bar.h → foo.h");
//! ```

mod detector_impl;

pub use detector_impl::*;
