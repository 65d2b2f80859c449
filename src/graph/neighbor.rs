//! The neighbor record and neighbor-list types.
//!
//! A bipartite graph stores, for each node, an ordered list of [`Neighbor`]
//! records describing its adjacent nodes on the opposite side. Each record
//! knows its own position (`iter`), the adjacent node's id (`node`), and the
//! position of its reciprocal record inside that node's list (`dual`). The
//! pair of reciprocal records *is* the edge; there is no separate edge object.

use smallvec::SmallVec;

/// Inline capacity of a neighbor list before it spills to the heap.
///
/// Factor graphs are sparse; most nodes have a handful of neighbors, so small
/// degrees stay inline.
pub(crate) const INLINE_DEGREE: usize = 4;

/// One entry of a node's neighbor list.
///
/// For a record `nb` at position `i` in the list of type-1 node `n1`:
///
/// - `nb.iter == i` (a record knows its own position),
/// - `nb.node` is the id of the adjacent type-2 node, and
/// - `nb.dual` is the position of the reciprocal record inside `nb.node`'s
///   list, so `nb2_at(nb.node, nb.dual).node == n1` holds.
///
/// The symmetric statements hold for records on the type-2 side. The two id
/// namespaces are independent: a `node` value is only meaningful relative to
/// the side of the list that contains the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    /// Position of this record within the neighbor list that contains it.
    pub iter: usize,
    /// Id of the adjacent node, in the opposite namespace.
    pub node: usize,
    /// Position of the reciprocal record inside `node`'s neighbor list.
    pub dual: usize,
}

impl Neighbor {
    /// Creates a record from its three indices.
    pub fn new(iter: usize, node: usize, dual: usize) -> Self {
        Neighbor { iter, node, dual }
    }
}

/// The neighbor list of a single node.
///
/// Ordered by insertion; the order doubles as the addressing scheme used by
/// `iter` and `dual`.
pub type Neighbors = SmallVec<[Neighbor; INLINE_DEGREE]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_its_indices() {
        let nb = Neighbor::new(2, 7, 0);
        assert_eq!(nb.iter, 2);
        assert_eq!(nb.node, 7);
        assert_eq!(nb.dual, 0);
    }

    #[test]
    fn small_lists_stay_inline() {
        let mut nbs = Neighbors::new();
        for i in 0..INLINE_DEGREE {
            nbs.push(Neighbor::new(i, i, 0));
        }
        assert!(!nbs.spilled());
        nbs.push(Neighbor::new(INLINE_DEGREE, INLINE_DEGREE, 0));
        assert!(nbs.spilled());
    }
}
