//! Node bounds for graph search.
//!
//! This module provides the traits graph vertices must satisfy:
//! - [`Node`]: any cloneable, hashable, comparable identifier
//! - [`Planar`]: nodes with 2D coordinates, used by the geometric heuristics

use std::fmt::Debug;
use std::hash::Hash;

/// Graph vertex identifier.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so
/// coordinate tuples, string ids and integers all work as nodes. `Debug` is
/// only used to name the offending node in errors.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}

/// Node with a position in the plane.
pub trait Planar {
    /// Horizontal coordinate.
    fn x(&self) -> f64;

    /// Vertical coordinate.
    fn y(&self) -> f64;
}

macro_rules! impl_planar_tuple {
    ($($t:ty),*) => {
        $(
            impl Planar for ($t, $t) {
                #[inline]
                fn x(&self) -> f64 {
                    self.0 as f64
                }

                #[inline]
                fn y(&self) -> f64 {
                    self.1 as f64
                }
            }
        )*
    };
}

impl_planar_tuple!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<P: Planar> Planar for &P {
    fn x(&self) -> f64 {
        (*self).x()
    }

    fn y(&self) -> f64 {
        (*self).y()
    }
}
