//! Heuristics for guiding A* search.
//!
//! A heuristic estimates the remaining cost from a node to the goal. For the
//! returned path to be optimal it must be admissible (never overestimate) and
//! consistent (`h(a) <= w(a, b) + h(b)` along every edge). Neither property is
//! checked; a bad estimate still terminates but may yield a longer path.
//!
//! Any `Fn(&N, &N) -> f64` closure is a [`Heuristic`], so callers can pass a
//! plain function. The geometric heuristics work on [`Planar`] nodes.

use crate::models::Planar;

/// Estimate of the remaining distance from `node` to `goal`.
pub trait Heuristic<N> {
    /// Estimated cost of the cheapest path from `node` to `goal`.
    fn estimate(&self, node: &N, goal: &N) -> f64;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    #[inline]
    fn estimate(&self, node: &N, goal: &N) -> f64 {
        self(node, goal)
    }
}

/// Constant-zero heuristic. A* with it is Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<N> Heuristic<N> for Zero {
    #[inline]
    fn estimate(&self, _node: &N, _goal: &N) -> f64 {
        0.0
    }
}

macro_rules! planar_heuristic {
    ($(#[$doc:meta])* $name:ident, |$dx:ident, $dy:ident| $body:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            /// Multiplier applied to the raw distance.
            pub scale: f64,
        }

        impl Default for $name {
            fn default() -> Self {
                Self { scale: 1.0 }
            }
        }

        impl $name {
            /// Create with unit scale.
            pub fn new() -> Self {
                Self::default()
            }

            /// Set the multiplier applied to the raw distance.
            ///
            /// Use a scale below 1 when edge weights are cheaper than the
            /// coordinate distance, to keep the estimate admissible.
            pub fn with_scale(mut self, scale: f64) -> Self {
                self.scale = scale;
                self
            }
        }

        impl<N: Planar> Heuristic<N> for $name {
            #[inline]
            fn estimate(&self, node: &N, goal: &N) -> f64 {
                let $dx = (goal.x() - node.x()).abs();
                let $dy = (goal.y() - node.y()).abs();
                self.scale * $body
            }
        }
    };
}

planar_heuristic!(
    /// Straight-line distance.
    Euclidean,
    |dx, dy| dx.hypot(dy)
);

planar_heuristic!(
    /// Sum of axis distances. Admissible on 4-connected grids.
    Manhattan,
    |dx, dy| dx + dy
);

planar_heuristic!(
    /// Largest axis distance. Admissible on 8-connected grids with unit diagonals.
    Chebyshev,
    |dx, dy| dx.max(dy)
);
