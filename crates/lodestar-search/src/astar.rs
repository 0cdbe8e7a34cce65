use std::hash::Hash;

use log::trace;

use crate::finder::{NodeRef, PathFinder, Route};
use crate::traits::Pather;

impl<S: Clone + Eq + Hash> PathFinder<S> {
    /// Compute the cheapest route from `start` to `goal`.
    ///
    /// Returns the full route (both endpoints included) together with its
    /// total cost, or `None` if the goal is unreachable under
    /// [`Pather::neighbors`]. Unreachability is an expected outcome, not an
    /// error; callers branch on it.
    ///
    /// When `start` already satisfies [`Pather::goal_reached`], the
    /// single-state route with cost 0 is returned without consulting the
    /// other callbacks.
    pub fn find_path<P>(&mut self, pather: &P, start: S, goal: S) -> Option<Route<S>>
    where
        P: Pather<State = S>,
    {
        if pather.goal_reached(&start, &goal) {
            return Some(Route {
                nodes: vec![start],
                cost: 0,
            });
        }

        self.reset();

        let start_idx = self.intern(start);
        let start_f = pather.estimate(&self.nodes[start_idx].data, &goal);
        {
            let n = &mut self.nodes[start_idx];
            n.g = 0;
            n.f = start_f;
            n.open = true;
        }
        self.open.push(NodeRef {
            idx: start_idx,
            f: start_f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper re-insertion.
            if !self.nodes[ci].open {
                continue;
            }

            if pather.goal_reached(&self.nodes[ci].data, &goal) {
                break 'search Some(ci);
            }

            self.nodes[ci].open = false;
            self.nodes[ci].closed = true;
            expanded += 1;

            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(&self.nodes[ci].data, &mut nbuf);

            for np in &nbuf {
                let ni = self.intern(np.clone());
                if self.nodes[ni].closed {
                    continue;
                }

                let tentative =
                    current_g + pather.cost(&self.nodes[ci].data, &self.nodes[ni].data);
                if tentative >= self.nodes[ni].g {
                    continue;
                }

                let f = tentative + pather.estimate(&self.nodes[ni].data, &goal);
                let n = &mut self.nodes[ni];
                n.parent = ci;
                n.g = tentative;
                n.f = f;
                n.open = true;
                // An entry already queued for this node is now stale and
                // gets skipped when popped.
                self.open.push(NodeRef { idx: ni, f });
            }
        };

        self.nbuf = nbuf;

        let goal_idx = match found {
            Some(idx) => idx,
            None => {
                trace!("astar: open set exhausted after {expanded} expansions");
                return None;
            }
        };
        trace!("astar: goal reached after {expanded} expansions");

        // Reconstruct by walking parent links back to the start.
        let mut nodes = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            nodes.push(self.nodes[ci].data.clone());
            ci = self.nodes[ci].parent;
        }
        nodes.reverse();

        Some(Route {
            nodes,
            cost: self.nodes[goal_idx].g,
        })
    }
}
