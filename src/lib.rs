//! Visibility polygons by ray casting.
//!
//! Given a viewer position and a set of opaque line segments, [`get_visibility_polygon`]
//! computes the region of the plane that can be seen from the viewer. Rays are cast
//! towards every obstacle endpoint (and slightly to either side of it), each ray keeps
//! its nearest hit, and the hits are sorted by angle to form the polygon boundary.
//!
//! ```
//! use sightline::data::{LineSegment, Point};
//! use sightline::get_visibility_polygon;
//!
//! let corners = [
//!   Point::new([0.0, 0.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([10.0, 10.0]),
//!   Point::new([0.0, 10.0]),
//! ];
//! let walls: Vec<LineSegment<f64>> = (0..4)
//!   .map(|i| LineSegment::new(corners[i], corners[(i + 1) % 4]).unwrap())
//!   .collect();
//!
//! let visible = get_visibility_polygon(&Point::new([5.0, 5.0]), &walls);
//! assert_eq!(visible.len(), 4);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod config;
pub mod data;
mod intersection;
mod orientation;
pub mod scene;

pub use algorithms::visibility::naive::get_visibility_polygon;
pub use intersection::Intersects;
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Both endpoints of a segment are the same point.
  #[error("degenerate segment: endpoints coincide")]
  DegenerateSegment,
  /// A ray was given the zero vector as its direction.
  #[error("ray direction has zero length")]
  ZeroDirection,
  /// A coordinate is NaN or infinite.
  #[error("coordinate is NaN or infinite")]
  NonFinite,
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Floating point scalar used for ray casting.
///
/// The constants are the tolerances of the sweep. They are per-type so that `f32`
/// scenes don't merge or reject things based on `f64` round-off.
pub trait RayScalar: Float + Debug + TotalOrd + Send + Sync + 'static {
  /// Key with exact equality and a total order. `-0.0` and `0.0` map to the same key.
  type Ordered: Ord + Copy + Debug;

  /// Angular offset (radians) of the two bracketing rays cast next to each corner.
  const ANGLE_EPSILON: Self;
  /// Slack past the far end of a segment that still counts as a hit.
  const SEGMENT_TOLERANCE: Self;
  /// Sine of the smallest turn that is kept when merging boundary vertices.
  const COLINEAR_TOLERANCE: Self;

  fn ordered(self) -> Self::Ordered;
  fn to_f64_lossy(self) -> f64;
}

macro_rules! floating_precision {
  ( $( $ty:ty => $colinear:expr ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl RayScalar for $ty {
        type Ordered = OrderedFloat<$ty>;

        const ANGLE_EPSILON: Self = 0.00001;
        const SEGMENT_TOLERANCE: Self = 0.0000001;
        const COLINEAR_TOLERANCE: Self = $colinear;

        fn ordered(self) -> Self::Ordered {
          OrderedFloat(self)
        }

        fn to_f64_lossy(self) -> f64 {
          f64::from(self)
        }
      }
    )*
  };
}

floating_precision!(f32 => 1e-4, f64 => 1e-7);

#[cfg(test)]
pub mod testing;
