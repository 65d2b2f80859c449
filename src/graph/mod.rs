//! # Bipartite adjacency structure
//!
//! This module implements the core bipartite graph: two independently
//! growable arrays of neighbor lists, one per node class, kept mutually
//! consistent across every structural edit.
//!
//! ## Key components
//!
//! - **[`Neighbor`]**: one entry of a neighbor list, carrying its own
//!   position (`iter`), the adjacent node id (`node`), and the position of
//!   the reciprocal record on the opposite side (`dual`)
//! - **[`BipartiteGraph`]**: the owning structure; both arrays are private
//!   and only invariant-preserving methods mutate them
//!
//! ## Invariants
//!
//! After every mutating method returns:
//!
//! - *Mutual reciprocity*: for every record `nb` at position `i` of node
//!   `n`'s list, the record at `nb.dual` in `nb.node`'s list points back at
//!   `(n, i)`.
//! - *Self-consistent position*: every record's `iter` equals its position.
//! - *No dangling ids*: every `node` field is a valid id on the opposite
//!   side.
//!
//! Debug builds re-verify all three after each mutation; see
//! [`BipartiteGraph::check_consistency`].

pub mod analysis;
pub mod dot;
pub mod edge_index;
pub mod errors;
pub mod neighbor;

pub use self::neighbor::{Neighbor, Neighbors};

use crate::graph::errors::GraphError;

/// The neighborhood structure of a bipartite graph.
///
/// Nodes come in two classes: if there are `nr1()` nodes of type 1 and
/// `nr2()` nodes of type 2, type-1 ids are `0..nr1()` and type-2 ids are
/// `0..nr2()`. The two namespaces are never comparable. Edges exist only
/// between classes and are represented structurally: one [`Neighbor`] record
/// in the type-1 node's list and its reciprocal in the type-2 node's list.
///
/// Ids are positions in dense arrays, not stable handles: erasing a node
/// renumbers the ids above it.
///
/// The structure is not safe for concurrent mutation; `&mut self` mutators
/// and `&self` queries make that explicit. Callers needing a multi-step edit
/// sequence to appear atomic must serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BipartiteGraph {
    /// Neighbor lists of type-1 nodes (entries name type-2 ids).
    nb1: Vec<Neighbors>,
    /// Neighbor lists of type-2 nodes (entries name type-1 ids).
    nb2: Vec<Neighbors>,
}

impl BipartiteGraph {
    /// Creates an empty graph with `nr1() == nr2() == 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with the given node counts and no edges.
    pub fn with_node_counts(nr1: usize, nr2: usize) -> Self {
        BipartiteGraph {
            nb1: vec![Neighbors::new(); nr1],
            nb2: vec![Neighbors::new(); nr2],
        }
    }

    /// Builds a graph from an edge stream, validating every id.
    ///
    /// Both arrays start empty with the declared node counts; the edges are
    /// then inserted in order. With `dedupe` set, an edge whose pair already
    /// exists is skipped (an O(degree) scan per insertion); otherwise
    /// duplicates produce independent parallel records.
    ///
    /// # Errors
    ///
    /// [`GraphError::OutOfRange1`] / [`GraphError::OutOfRange2`] if an edge
    /// references an id outside the declared bounds. The error is reported
    /// for the first offending edge; the partially built graph is discarded.
    pub fn from_edges<I>(
        nr1: usize,
        nr2: usize,
        edges: I,
        dedupe: bool,
    ) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::with_node_counts(nr1, nr2);
        for (n1, n2) in edges {
            g.add_edge(n1, n2, dedupe)?;
        }
        g.debug_check();
        Ok(g)
    }

    /// Builds a graph from an edge stream without validating ids.
    ///
    /// The unchecked twin of [`from_edges`](Self::from_edges): no dedupe, no
    /// per-edge validation beyond debug assertions. An out-of-range id panics
    /// on the list append (it is never silently accepted).
    pub fn from_edges_unchecked<I>(nr1: usize, nr2: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::with_node_counts(nr1, nr2);
        for (n1, n2) in edges {
            g.add_edge_unchecked(n1, n2);
        }
        g.debug_check();
        g
    }

    /// Returns the number of type-1 nodes.
    pub fn nr1(&self) -> usize {
        self.nb1.len()
    }

    /// Returns the number of type-2 nodes.
    pub fn nr2(&self) -> usize {
        self.nb2.len()
    }

    /// Returns the number of edges, by summing type-1 degrees. O(nr1()).
    pub fn nr_edges(&self) -> usize {
        self.nb1.iter().map(|nbs| nbs.len()).sum()
    }

    /// Returns the full neighbor list of type-1 node `n1`.
    ///
    /// # Panics
    ///
    /// If `n1 >= nr1()`.
    pub fn nb1(&self, n1: usize) -> &[Neighbor] {
        debug_assert!(n1 < self.nb1.len(), "type-1 id {n1} out of range");
        &self.nb1[n1]
    }

    /// Returns the full neighbor list of type-2 node `n2`.
    ///
    /// # Panics
    ///
    /// If `n2 >= nr2()`.
    pub fn nb2(&self, n2: usize) -> &[Neighbor] {
        debug_assert!(n2 < self.nb2.len(), "type-2 id {n2} out of range");
        &self.nb2[n2]
    }

    /// Returns the record at position `i` of type-1 node `n1`'s list. O(1).
    ///
    /// # Panics
    ///
    /// If `n1 >= nr1()` or `i >= degree1(n1)`.
    pub fn nb1_at(&self, n1: usize, i: usize) -> Neighbor {
        debug_assert!(n1 < self.nb1.len(), "type-1 id {n1} out of range");
        debug_assert!(i < self.nb1[n1].len(), "position {i} out of range");
        self.nb1[n1][i]
    }

    /// Returns the record at position `i` of type-2 node `n2`'s list. O(1).
    ///
    /// # Panics
    ///
    /// If `n2 >= nr2()` or `i >= degree2(n2)`.
    pub fn nb2_at(&self, n2: usize, i: usize) -> Neighbor {
        debug_assert!(n2 < self.nb2.len(), "type-2 id {n2} out of range");
        debug_assert!(i < self.nb2[n2].len(), "position {i} out of range");
        self.nb2[n2][i]
    }

    /// Returns the degree of type-1 node `n1`. O(1).
    pub fn degree1(&self, n1: usize) -> usize {
        self.nb1[n1].len()
    }

    /// Returns the degree of type-2 node `n2`. O(1).
    pub fn degree2(&self, n2: usize) -> usize {
        self.nb2[n2].len()
    }

    /// Returns true if an edge between `n1` and `n2` exists. O(degree1(n1)).
    pub fn has_edge(&self, n1: usize, n2: usize) -> bool {
        self.find_nb1(n1, n2).is_some()
    }

    /// Returns the position of `n2` in `n1`'s neighbor list, if adjacent.
    ///
    /// With parallel edges, the first occurrence wins.
    pub fn find_nb1(&self, n1: usize, n2: usize) -> Option<usize> {
        self.nb1[n1].iter().position(|nb| nb.node == n2)
    }

    /// Returns the position of `n1` in `n2`'s neighbor list, if adjacent.
    ///
    /// With parallel edges, the first occurrence wins.
    pub fn find_nb2(&self, n2: usize, n1: usize) -> Option<usize> {
        self.nb2[n2].iter().position(|nb| nb.node == n1)
    }

    /// Appends a type-1 node without neighbors; returns its id. O(1).
    pub fn add_node1(&mut self) -> usize {
        self.nb1.push(Neighbors::new());
        self.nb1.len() - 1
    }

    /// Appends a type-2 node without neighbors; returns its id. O(1).
    pub fn add_node2(&mut self) -> usize {
        self.nb2.push(Neighbors::new());
        self.nb2.len() - 1
    }

    /// Appends a type-1 node adjacent to the given type-2 nodes.
    ///
    /// The new node's list is built in the order given (`iter` = position in
    /// `neighbors`); each named type-2 node gains a reciprocal record.
    /// All ids are validated before any mutation, so an error leaves the
    /// graph untouched.
    ///
    /// # Errors
    ///
    /// [`GraphError::OutOfRange2`] if any supplied id is `>= nr2()`.
    pub fn add_node1_with_neighbors(&mut self, neighbors: &[usize]) -> Result<usize, GraphError> {
        for &n2 in neighbors {
            if n2 >= self.nb2.len() {
                return Err(GraphError::OutOfRange2 {
                    id: n2,
                    count: self.nb2.len(),
                });
            }
        }
        let n1 = self.nb1.len();
        let mut nbs = Neighbors::with_capacity(neighbors.len());
        for (iter, &n2) in neighbors.iter().enumerate() {
            let dual = self.nb2[n2].len();
            nbs.push(Neighbor::new(iter, n2, dual));
            self.nb2[n2].push(Neighbor::new(dual, n1, iter));
        }
        self.nb1.push(nbs);
        self.debug_check();
        Ok(n1)
    }

    /// Appends a type-2 node adjacent to the given type-1 nodes.
    ///
    /// Mirror image of [`add_node1_with_neighbors`](Self::add_node1_with_neighbors).
    ///
    /// # Errors
    ///
    /// [`GraphError::OutOfRange1`] if any supplied id is `>= nr1()`.
    pub fn add_node2_with_neighbors(&mut self, neighbors: &[usize]) -> Result<usize, GraphError> {
        for &n1 in neighbors {
            if n1 >= self.nb1.len() {
                return Err(GraphError::OutOfRange1 {
                    id: n1,
                    count: self.nb1.len(),
                });
            }
        }
        let n2 = self.nb2.len();
        let mut nbs = Neighbors::with_capacity(neighbors.len());
        for (iter, &n1) in neighbors.iter().enumerate() {
            let dual = self.nb1[n1].len();
            nbs.push(Neighbor::new(iter, n1, dual));
            self.nb1[n1].push(Neighbor::new(dual, n2, iter));
        }
        self.nb2.push(nbs);
        self.debug_check();
        Ok(n2)
    }

    /// Adds an edge between type-1 node `n1` and type-2 node `n2`.
    ///
    /// With `dedupe` set, the insertion is skipped if the edge already exists
    /// (an O(degree1(n1)) scan); otherwise a parallel edge is created.
    ///
    /// # Errors
    ///
    /// [`GraphError::OutOfRange1`] / [`GraphError::OutOfRange2`] if either id
    /// is out of range; the graph is left untouched.
    pub fn add_edge(&mut self, n1: usize, n2: usize, dedupe: bool) -> Result<(), GraphError> {
        if n1 >= self.nb1.len() {
            return Err(GraphError::OutOfRange1 {
                id: n1,
                count: self.nb1.len(),
            });
        }
        if n2 >= self.nb2.len() {
            return Err(GraphError::OutOfRange2 {
                id: n2,
                count: self.nb2.len(),
            });
        }
        if dedupe && self.has_edge(n1, n2) {
            return Ok(());
        }
        self.push_edge(n1, n2);
        Ok(())
    }

    /// Adds an edge without validating ids and without deduplication.
    ///
    /// The unchecked twin of [`add_edge`](Self::add_edge) for callers that
    /// have already established both bounds. Debug builds still assert them;
    /// release builds panic on the list append if an id is out of range.
    pub fn add_edge_unchecked(&mut self, n1: usize, n2: usize) {
        debug_assert!(n1 < self.nb1.len(), "type-1 id {n1} out of range");
        debug_assert!(n2 < self.nb2.len(), "type-2 id {n2} out of range");
        self.push_edge(n1, n2);
    }

    /// Appends the reciprocal record pair for an edge.
    ///
    /// Both records are computed from degrees captured before either append,
    /// so each `dual` names the position the other record is about to take.
    fn push_edge(&mut self, n1: usize, n2: usize) {
        let iter1 = self.nb1[n1].len();
        let iter2 = self.nb2[n2].len();
        self.nb1[n1].push(Neighbor::new(iter1, n2, iter2));
        self.nb2[n2].push(Neighbor::new(iter2, n1, iter1));
        self.debug_check();
    }

    /// Removes the edge between `n1` and `n2`, if present.
    ///
    /// Only the first matching record pair is removed; parallel duplicates
    /// beyond the first are untouched. Returns `false` as a silent no-op when
    /// no such edge exists -- this is the documented not-found policy.
    ///
    /// # Panics
    ///
    /// If either id is out of range (debug assertion; release builds panic on
    /// the list access).
    pub fn erase_edge(&mut self, n1: usize, n2: usize) -> bool {
        debug_assert!(n1 < self.nb1.len(), "type-1 id {n1} out of range");
        debug_assert!(n2 < self.nb2.len(), "type-2 id {n2} out of range");
        let Some(i1) = self.find_nb1(n1, n2) else {
            return false;
        };
        // The dual of the first match on side 1 is the first match on side 2:
        // appends land on both sides in the same order and removals strip
        // matching occurrences, so occurrence ranks agree.
        let i2 = self.nb1[n1][i1].dual;
        self.nb1[n1].remove(i1);
        self.repair_from1(n1, i1);
        self.nb2[n2].remove(i2);
        self.repair_from2(n2, i2);
        self.debug_check();
        true
    }

    /// Removes type-1 node `n1` and every incident edge.
    ///
    /// The remaining type-1 nodes above `n1` shift down by one to close the
    /// gap: ids are positions in a dense array, not stable handles. Every
    /// type-2 record that referenced a shifted id is renumbered.
    ///
    /// # Panics
    ///
    /// If `n1 >= nr1()`.
    pub fn erase_node1(&mut self, n1: usize) {
        assert!(n1 < self.nb1.len(), "type-1 id {n1} out of range");
        // Detach incident edges back-to-front; popping keeps the remaining
        // records' positions (and therefore their duals) intact, and each
        // opposite-side repair rewrites the duals stored here as needed.
        while let Some(nb) = self.nb1[n1].pop() {
            self.nb2[nb.node].remove(nb.dual);
            self.repair_from2(nb.node, nb.dual);
        }
        self.nb1.remove(n1);
        // Positions inside the surviving lists are unchanged; only the ids
        // above the gap move.
        for nbs in &mut self.nb2 {
            for nb in nbs.iter_mut() {
                debug_assert_ne!(nb.node, n1, "record still points at the erased node");
                if nb.node > n1 {
                    nb.node -= 1;
                }
            }
        }
        self.debug_check();
    }

    /// Removes type-2 node `n2` and every incident edge.
    ///
    /// Mirror image of [`erase_node1`](Self::erase_node1).
    ///
    /// # Panics
    ///
    /// If `n2 >= nr2()`.
    pub fn erase_node2(&mut self, n2: usize) {
        assert!(n2 < self.nb2.len(), "type-2 id {n2} out of range");
        while let Some(nb) = self.nb2[n2].pop() {
            self.nb1[nb.node].remove(nb.dual);
            self.repair_from1(nb.node, nb.dual);
        }
        self.nb2.remove(n2);
        for nbs in &mut self.nb1 {
            for nb in nbs.iter_mut() {
                debug_assert_ne!(nb.node, n2, "record still points at the erased node");
                if nb.node > n2 {
                    nb.node -= 1;
                }
            }
        }
        self.debug_check();
    }

    /// Repairs `nb1[n1]` from position `from` after a removal shifted the
    /// suffix down by one.
    ///
    /// Each shifted record gets its `iter` rewritten to its new position, and
    /// the reciprocal record on the type-2 side gets its `dual` rewritten to
    /// match. Skipping the second half silently breaks mutual reciprocity,
    /// which is why the pass lives in one named place.
    fn repair_from1(&mut self, n1: usize, from: usize) {
        for i in from..self.nb1[n1].len() {
            self.nb1[n1][i].iter = i;
            let Neighbor { node, dual, .. } = self.nb1[n1][i];
            self.nb2[node][dual].dual = i;
        }
    }

    /// Repairs `nb2[n2]` from position `from` after a removal shifted the
    /// suffix down by one. Mirror image of [`repair_from1`](Self::repair_from1).
    fn repair_from2(&mut self, n2: usize, from: usize) {
        for i in from..self.nb2[n2].len() {
            self.nb2[n2][i].iter = i;
            let Neighbor { node, dual, .. } = self.nb2[n2][i];
            self.nb1[node][dual].dual = i;
        }
    }

    /// Verifies the internal consistency invariants, panicking on violation.
    ///
    /// A failure here is a defect in this crate, not a recoverable runtime
    /// condition, so it asserts instead of returning an error. Debug builds
    /// run this after every mutation; tests may call it directly.
    pub fn check_consistency(&self) {
        for (n1, nbs) in self.nb1.iter().enumerate() {
            for (i, nb) in nbs.iter().enumerate() {
                assert_eq!(
                    nb.iter, i,
                    "nb1[{n1}][{i}].iter is {}, expected {i}",
                    nb.iter
                );
                assert!(
                    nb.node < self.nb2.len(),
                    "nb1[{n1}][{i}].node {} is not a type-2 id (nr2 = {})",
                    nb.node,
                    self.nb2.len()
                );
                let back = match self.nb2[nb.node].get(nb.dual) {
                    Some(back) => back,
                    None => panic!(
                        "nb1[{n1}][{i}].dual {} is past the end of nb2[{}]",
                        nb.dual, nb.node
                    ),
                };
                assert_eq!(
                    back.node, n1,
                    "reciprocal of nb1[{n1}][{i}] points at type-1 node {}",
                    back.node
                );
                assert_eq!(
                    back.dual, i,
                    "reciprocal of nb1[{n1}][{i}] has dual {}, expected {i}",
                    back.dual
                );
            }
        }
        for (n2, nbs) in self.nb2.iter().enumerate() {
            for (i, nb) in nbs.iter().enumerate() {
                assert_eq!(
                    nb.iter, i,
                    "nb2[{n2}][{i}].iter is {}, expected {i}",
                    nb.iter
                );
                assert!(
                    nb.node < self.nb1.len(),
                    "nb2[{n2}][{i}].node {} is not a type-1 id (nr1 = {})",
                    nb.node,
                    self.nb1.len()
                );
                let back = match self.nb1[nb.node].get(nb.dual) {
                    Some(back) => back,
                    None => panic!(
                        "nb2[{n2}][{i}].dual {} is past the end of nb1[{}]",
                        nb.dual, nb.node
                    ),
                };
                assert_eq!(
                    back.node, n2,
                    "reciprocal of nb2[{n2}][{i}] points at type-2 node {}",
                    back.node
                );
                assert_eq!(
                    back.dual, i,
                    "reciprocal of nb2[{n2}][{i}] has dual {}, expected {i}",
                    back.dual
                );
            }
        }
    }

    #[inline]
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            self.check_consistency();
        }
    }
}
