//! Read-only structural queries: second-order neighborhoods, connectivity,
//! and tree detection.
//!
//! Connectivity and tree-ness treat the graph as a single undirected graph
//! on `nr1() + nr2()` vertices; the two id namespaces are folded into one
//! combined vertex space (`0..nr1()` for type-1, `nr1()..` for type-2) for
//! the duration of a traversal.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::{BipartiteGraph, Neighbor};

impl BipartiteGraph {
    /// Returns the second-order neighborhood of type-1 node `n1`: the type-1
    /// nodes reachable through exactly one type-2 intermediate.
    ///
    /// The result is deduplicated; its order is unspecified. `n1` itself is
    /// excluded unless `include_self` is set (an isolated node yields an
    /// empty set either way). Cost is proportional to the summed degrees of
    /// `n1`'s neighbors.
    ///
    /// # Panics
    ///
    /// If `n1 >= nr1()`.
    pub fn delta1(&self, n1: usize, include_self: bool) -> Vec<usize> {
        debug_assert!(n1 < self.nr1(), "type-1 id {n1} out of range");
        let mut seen = FxHashSet::default();
        for nb in self.nb1(n1) {
            for nb2 in self.nb2(nb.node) {
                if include_self || nb2.node != n1 {
                    seen.insert(nb2.node);
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Returns the second-order neighborhood of type-2 node `n2`.
    ///
    /// Mirror image of [`delta1`](Self::delta1).
    ///
    /// # Panics
    ///
    /// If `n2 >= nr2()`.
    pub fn delta2(&self, n2: usize, include_self: bool) -> Vec<usize> {
        debug_assert!(n2 < self.nr2(), "type-2 id {n2} out of range");
        let mut seen = FxHashSet::default();
        for nb in self.nb2(n2) {
            for nb1 in self.nb1(nb.node) {
                if include_self || nb1.node != n2 {
                    seen.insert(nb1.node);
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Returns true if every vertex of both classes is reachable from every
    /// other.
    ///
    /// An empty graph is connected by convention. A graph whose only
    /// vertices are isolated nodes of a single class is *not* connected
    /// (unless it has exactly one vertex).
    pub fn is_connected(&self) -> bool {
        let total = self.nr1() + self.nr2();
        if total == 0 {
            return true;
        }
        let mut seen = vec![false; total];
        let mut queue = VecDeque::new();
        // Combined vertex 0 exists whichever class is empty.
        seen[0] = true;
        queue.push_back(0usize);
        let mut reached = 1usize;
        while let Some(v) = queue.pop_front() {
            let (nbs, offset) = self.combined_neighbors(v);
            for nb in nbs {
                let w = offset + nb.node;
                if !seen[w] {
                    seen[w] = true;
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }
        reached == total
    }

    /// Returns true if the graph is a tree: connected and cycle-free.
    ///
    /// Implemented as a breadth-first traversal from an arbitrary root that
    /// remembers, per vertex, the edge it was discovered through. Reaching an
    /// already-visited vertex over any other edge is a cycle (this catches
    /// parallel edges too, since the second record of a pair rediscovers the
    /// same vertex). A zero-vertex graph is a tree by the degenerate base
    /// case, as is a single vertex.
    pub fn is_tree(&self) -> bool {
        let total = self.nr1() + self.nr2();
        if total == 0 {
            return true;
        }
        // Position, in each vertex's own list, of the edge it was discovered
        // through; usize::MAX for the root (it has no discovery edge).
        let mut entry_pos = vec![usize::MAX; total];
        let mut seen = vec![false; total];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(0usize);
        let mut reached = 1usize;
        while let Some(v) = queue.pop_front() {
            let (nbs, offset) = self.combined_neighbors(v);
            for (i, nb) in nbs.iter().enumerate() {
                if i == entry_pos[v] {
                    continue;
                }
                let w = offset + nb.node;
                if seen[w] {
                    return false;
                }
                seen[w] = true;
                entry_pos[w] = nb.dual;
                reached += 1;
                queue.push_back(w);
            }
        }
        reached == total
    }

    /// Resolves a combined-space vertex to its neighbor list and the offset
    /// that maps the list's `node` fields back into combined space.
    fn combined_neighbors(&self, v: usize) -> (&[Neighbor], usize) {
        if v < self.nr1() {
            // type-1 vertex; neighbors are type-2 ids
            (self.nb1(v), self.nr1())
        } else {
            // type-2 vertex; neighbors are type-1 ids
            (self.nb2(v - self.nr1()), 0)
        }
    }
}
