//! # Bigraph - Bipartite Adjacency Core
//!
//! A mutable, index-based adjacency structure for bipartite graphs: the node
//! set splits into two disjoint classes and every edge connects a node of one
//! class to a node of the other. Higher-level algorithms (message passing over
//! factor graphs, locality heuristics) use it to enumerate, for any node, its
//! neighbors on the opposite side in O(1) per neighbor, and to translate
//! between "node X is the k-th neighbor of node Y" and "node Y is some
//! neighbor of node X" without search.
//!
//! ## Architecture
//!
//! - **graph**: the [`BipartiteGraph`] structure with construction, mutation,
//!   second-order neighborhood and structural queries
//! - **graph::neighbor**: the [`Neighbor`] record carrying the dual index
//! - **graph::errors**: error types for checked construction and insertion
//! - **graph::dot**: GraphViz export for debugging and visualization
//! - **graph::edge_index**: deprecated flat edge-index adapter for legacy
//!   callers
//!
//! ## Usage
//!
//! ```rust
//! use bigraph::BipartiteGraph;
//!
//! // Three type-1 nodes, two type-2 nodes, five edges.
//! let g = BipartiteGraph::from_edges(
//!     3,
//!     2,
//!     [(0, 0), (1, 0), (2, 0), (1, 1), (2, 1)],
//!     false,
//! )
//! .expect("ids are in range");
//!
//! assert_eq!(g.nr_edges(), 5);
//! assert_eq!(g.degree2(0), 3);
//! // The dual index round-trips without search.
//! let rec = g.nb1_at(1, 0);
//! assert_eq!(g.nb2_at(rec.node, rec.dual).node, 1);
//! assert!(g.is_connected());
//! ```

#![forbid(unsafe_code)]

pub mod graph;

// Re-export commonly used types
pub use graph::errors::GraphError;
pub use graph::{BipartiteGraph, Neighbor, Neighbors};
