use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// A complete route between two states.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<S> {
    /// Visited states in start→goal order, both endpoints included.
    pub nodes: Vec<S>,
    /// Sum of the edge costs along `nodes`.
    pub cost: i32,
}

/// Sentinel score for states not yet reached.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal bookkeeping
// ---------------------------------------------------------------------------

/// Per-state record, created lazily the first time a state is referenced.
///
/// `parent` is an index into the owning arena (`usize::MAX` = no
/// predecessor), never a second ownership path.
pub(crate) struct Node<S> {
    pub(crate) data: S,
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
    pub(crate) open: bool,
}

impl<S> Node<S> {
    fn new(data: S) -> Self {
        Self {
            data,
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: usize::MAX,
            closed: false,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable search context.
///
/// `PathFinder` owns all bookkeeping of a search — the node arena, the
/// state→node table, the open heap, and a neighbor scratch buffer — and
/// keeps the allocations across queries. Every call to
/// [`find_path`](Self::find_path) starts from a clean slate; nothing from a
/// previous query leaks into the next. One instance serves one search at a
/// time, so concurrent searches each need their own `PathFinder`.
pub struct PathFinder<S> {
    pub(crate) nodes: Vec<Node<S>>,
    pub(crate) table: HashMap<S, usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) nbuf: Vec<S>,
}

impl<S: Clone + Eq + Hash> PathFinder<S> {
    /// Create a new, empty `PathFinder`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            table: HashMap::new(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Drop the bookkeeping of the previous query, keeping allocations.
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.table.clear();
        self.open.clear();
    }

    /// Arena index of the node for `state`, creating it on first reference
    /// with both scores at [`UNREACHABLE`] and no predecessor.
    pub(crate) fn intern(&mut self, state: S) -> usize {
        match self.table.entry(state) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let idx = self.nodes.len();
                self.nodes.push(Node::new(e.key().clone()));
                e.insert(idx);
                idx
            }
        }
    }
}

impl<S: Clone + Eq + Hash> Default for PathFinder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestar_geom::Vector;

    #[test]
    fn intern_is_idempotent_per_state() {
        let mut pf: PathFinder<Vector> = PathFinder::new();
        let a = pf.intern(Vector::new(1, 2));
        let b = pf.intern(Vector::new(3, 4));
        assert_ne!(a, b);
        assert_eq!(pf.intern(Vector::new(1, 2)), a);
        assert_eq!(pf.nodes.len(), 2);
    }

    #[test]
    fn fresh_nodes_start_unreachable() {
        let mut pf: PathFinder<Vector> = PathFinder::new();
        let i = pf.intern(Vector::ZERO);
        let n = &pf.nodes[i];
        assert_eq!(n.g, UNREACHABLE);
        assert_eq!(n.f, UNREACHABLE);
        assert_eq!(n.parent, usize::MAX);
        assert!(!n.closed);
        assert!(!n.open);
    }

    #[test]
    fn reset_clears_bookkeeping() {
        let mut pf: PathFinder<Vector> = PathFinder::new();
        pf.intern(Vector::new(1, 1));
        pf.open.push(NodeRef { idx: 0, f: 3 });
        pf.reset();
        assert!(pf.nodes.is_empty());
        assert!(pf.table.is_empty());
        assert!(pf.open.is_empty());
    }

    #[test]
    fn heap_pops_minimum_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 9 });
        heap.push(NodeRef { idx: 1, f: 2 });
        heap.push(NodeRef { idx: 2, f: 5 });
        assert_eq!(heap.pop().unwrap().f, 2);
        assert_eq!(heap.pop().unwrap().f, 5);
        assert_eq!(heap.pop().unwrap().f, 9);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use lodestar_geom::Vector;

    #[test]
    fn route_round_trip() {
        let route = Route {
            nodes: vec![Vector::new(0, 0), Vector::new(1, 0), Vector::new(1, 1)],
            cost: 2,
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route<Vector> = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
