use lodestar_geom::Vector;

/// Buffer-reusing neighbor enumeration for grid states.
///
/// Filters the 4- or 8-way neighbours of a [`Vector`] through a caller
/// predicate; bounds and passability checks belong in the predicate. Handy
/// for writing [`Pather::neighbors`](crate::Pather::neighbors) on plain
/// grids without allocating per call.
pub struct Neighbors {
    buf: Vec<Vector>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// The cardinal neighbours of `p` for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Vector, keep: impl Fn(Vector) -> bool) -> &[Vector] {
        self.buf.clear();
        self.buf
            .extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// All eight neighbours of `p` for which `keep` returns `true`.
    pub fn all(&mut self, p: Vector, keep: impl Fn(Vector) -> bool) -> &[Vector] {
        self.buf.clear();
        self.buf
            .extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_respects_predicate() {
        let mut nb = Neighbors::new();
        // 3x3 grid bounds check as the predicate.
        let inside = |p: Vector| p.x >= 0 && p.y >= 0 && p.x < 3 && p.y < 3;
        let ns = nb.cardinal(Vector::new(0, 0), inside);
        assert_eq!(ns, [Vector::new(1, 0), Vector::new(0, 1)]);
        let ns = nb.cardinal(Vector::new(1, 1), inside);
        assert_eq!(ns.len(), 4);
    }

    #[test]
    fn all_respects_predicate() {
        let mut nb = Neighbors::new();
        let ns = nb.all(Vector::new(1, 1), |p| p.x >= 0 && p.y >= 0);
        assert_eq!(ns.len(), 8);
        let ns = nb.all(Vector::new(0, 0), |p| p.x >= 0 && p.y >= 0);
        assert_eq!(ns.len(), 3);
    }

    #[test]
    fn buffer_is_reused_between_calls() {
        let mut nb = Neighbors::new();
        let len = nb.cardinal(Vector::new(5, 5), |_| true).len();
        assert_eq!(len, 4);
        // A later call with a stricter predicate must not see old entries.
        let ns = nb.cardinal(Vector::new(5, 5), |_| false);
        assert!(ns.is_empty());
    }
}
