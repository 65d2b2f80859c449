//! Deprecated flat edge-index adapter for legacy callers.
//!
//! The core never materializes edge objects: an edge is a reciprocal pair of
//! neighbor records. Some legacy callers instead expect a flat, sorted edge
//! list addressed by a linear index. [`EdgeIndex`] rebuilds that view on
//! demand from the read interface; it shares no state with the graph and is
//! **not** kept in sync with later mutations -- mutate, then rebuild.

// This module *implements* the deprecated surface; only external use of it
// should warn.
#![allow(deprecated)]

use std::sync::Once;

use rustc_hash::FxHashMap;

use super::BipartiteGraph;

static DEPRECATION_NOTICE: Once = Once::new();

/// A flat, sorted snapshot of the edge set with pair-to-index lookup.
///
/// Superseded by walking neighbor lists directly; retained only for callers
/// that still address edges by linear index.
#[deprecated(
    since = "0.1.0",
    note = "iterate neighbor lists instead of addressing edges by flat index"
)]
#[derive(Debug, Clone)]
pub struct EdgeIndex {
    /// All edges as (type-1 id, type-2 id) pairs, sorted lexicographically.
    edges: Vec<(usize, usize)>,
    /// Pair-to-index lookup over `edges`.
    by_pair: FxHashMap<(usize, usize), usize>,
}

impl EdgeIndex {
    /// Builds the flat index from the graph's current edge set.
    ///
    /// Emits a deprecation notice the first time any index is built in the
    /// process. The snapshot does not observe later graph mutations; callers
    /// must rebuild after mutating.
    ///
    /// Parallel edges each occupy a slot in [`edges`](Self::edges), but the
    /// pair lookup resolves to only one of them.
    pub fn build(graph: &BipartiteGraph) -> Self {
        DEPRECATION_NOTICE.call_once(|| {
            tracing::warn!(
                "the flat edge index is deprecated; iterate neighbor lists instead"
            );
        });
        let mut edges = Vec::with_capacity(graph.nr_edges());
        for n1 in 0..graph.nr1() {
            for nb in graph.nb1(n1) {
                edges.push((n1, nb.node));
            }
        }
        edges.sort_unstable();
        let by_pair = edges
            .iter()
            .enumerate()
            .map(|(index, &pair)| (pair, index))
            .collect();
        EdgeIndex { edges, by_pair }
    }

    /// Returns the edge at `index`, if it exists.
    pub fn edge(&self, index: usize) -> Option<(usize, usize)> {
        self.edges.get(index).copied()
    }

    /// Returns the full sorted edge list.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Returns the linear index of the edge `(n1, n2)`, if present.
    pub fn index_of(&self, n1: usize, n2: usize) -> Option<usize> {
        self.by_pair.get(&(n1, n2)).copied()
    }

    /// Returns the number of edges in the snapshot.
    pub fn nr_edges(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_snapshot_with_pair_lookup() {
        let g = BipartiteGraph::from_edges(3, 2, [(2, 1), (0, 0), (1, 0), (1, 1)], false).unwrap();
        let index = EdgeIndex::build(&g);
        assert_eq!(index.nr_edges(), 4);
        assert_eq!(index.edges(), &[(0, 0), (1, 0), (1, 1), (2, 1)]);
        assert_eq!(index.edge(2), Some((1, 1)));
        assert_eq!(index.edge(9), None);
        assert_eq!(index.index_of(2, 1), Some(3));
        assert_eq!(index.index_of(2, 0), None);
    }

    #[test]
    fn snapshot_ignores_later_mutations_until_rebuilt() {
        let mut g = BipartiteGraph::from_edges(2, 2, [(0, 0)], false).unwrap();
        let stale = EdgeIndex::build(&g);
        g.add_edge(1, 1, false).unwrap();
        assert_eq!(stale.nr_edges(), 1);
        assert_eq!(stale.index_of(1, 1), None);
        let fresh = EdgeIndex::build(&g);
        assert_eq!(fresh.nr_edges(), 2);
        assert_eq!(fresh.index_of(1, 1), Some(1));
    }
}
