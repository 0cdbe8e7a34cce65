//! **lodestar-geom** — geometry primitives for grid puzzles.
//!
//! Provides [`Vector`], an immutable 2D integer point/displacement with
//! component-wise arithmetic and the distance metrics shared across the
//! lodestar workspace.

mod vector;

pub use vector::Vector;
