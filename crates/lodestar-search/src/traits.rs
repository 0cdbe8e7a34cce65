use std::hash::Hash;

/// Capability contract for goal-directed search over an abstract state space.
///
/// Implementors describe the search graph; the engine never inspects a state
/// beyond cloning, equality, and hashing. The state type is commonly a grid
/// coordinate, but anything hashable works (a coordinate plus a facing
/// direction, a tuple of positions, ...).
pub trait Pather {
    /// One position in the search space.
    type State: Clone + Eq + Hash;

    /// Append the states reachable in one step from `state` into `buf`.
    /// The engine clears `buf` before calling. Enumeration order influences
    /// tie-breaking only, never correctness. Bounds and passability checks
    /// belong here.
    fn neighbors(&self, state: &Self::State, buf: &mut Vec<Self::State>);

    /// Cost of the edge from `from` to adjacent `to`. Must be non-negative.
    /// Only ever invoked for pairs where `to` was produced by
    /// [`neighbors`](Self::neighbors)`(from)` in the same expansion.
    fn cost(&self, from: &Self::State, to: &Self::State) -> i32;

    /// Heuristic estimate of the remaining cost from `from` to `goal`.
    /// Must be non-negative.
    ///
    /// The returned route is cheapest only when the estimate is admissible
    /// (never overestimates) and consistent across edges; the engine never
    /// reopens a closed state. An inadmissible estimate still terminates but
    /// may yield a suboptimal route.
    fn estimate(&self, from: &Self::State, goal: &Self::State) -> i32;

    /// Whether `current` counts as having reached `goal`.
    ///
    /// Defaults to equality; override for approximate or multi-criterion
    /// goal tests.
    fn goal_reached(&self, current: &Self::State, goal: &Self::State) -> bool {
        current == goal
    }
}
