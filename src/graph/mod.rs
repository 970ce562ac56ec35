//! # Include Graph Module
//!
//! This module provides the include graph representation and its builder.
//!
//! ## Components
//!
//! - **IncludeGraphBuilder**: Scans header files and assembles the owned
//!   directed graph, interning nodes by normalized identifier
//! - **HeaderNode**: A header file; identity is its normalized name
//! - **IncludeEdge**: A directed "includes" relationship
//!
//! ## Example
//!
//! ```
//! use include_cycles::graph::{HeaderNode, IncludeEdge, IncludeGraph};
//! use include_cycles::scanner::IncludeForm;
//!
//! let mut graph = IncludeGraph::new();
//!
//! let mesh = graph.add_node(HeaderNode::new("geometry/mesh.h"));
//! let cell = graph.add_node(HeaderNode::new("geometry/cell.h"));
//!
//! graph.add_edge(mesh, cell, IncludeEdge::new(IncludeForm::Angle, 12));
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod builder;
mod types;

pub use builder::IncludeGraphBuilder;
pub use types::{HeaderNode, IncludeEdge, IncludeGraph};
