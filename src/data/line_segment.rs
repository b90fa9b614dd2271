use num_traits::Float;

use super::{Point, Vector};
use crate::Error;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// An opaque obstacle edge from `a` to `b`.
///
/// The endpoints only define the line. A segment blocks rays from either side and
/// `a`/`b` are interchangeable for intersection purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T> {
  pub a: Point<T>,
  pub b: Point<T>,
}

impl<T: Float> LineSegment<T> {
  /// # Errors
  ///
  /// Returns [`Error::NonFinite`] if any coordinate is NaN or infinite and
  /// [`Error::DegenerateSegment`] if `a == b`.
  pub fn new(a: Point<T>, b: Point<T>) -> Result<LineSegment<T>, Error> {
    if !a.is_finite() || !b.is_finite() {
      return Err(Error::NonFinite);
    }
    if a == b {
      return Err(Error::DegenerateSegment);
    }
    Ok(LineSegment { a, b })
  }

  /// Build a segment without validation. Intersection results are unspecified if
  /// the endpoints coincide.
  pub fn new_unchecked(a: Point<T>, b: Point<T>) -> LineSegment<T> {
    LineSegment { a, b }
  }

  pub fn endpoints(&self) -> [Point<T>; 2] {
    [self.a, self.b]
  }

  /// `b - a`
  pub fn direction(&self) -> Vector<T> {
    &self.b - &self.a
  }

  pub fn length(&self) -> T {
    self.a.distance(&self.b)
  }

  pub fn is_degenerate(&self) -> bool {
    self.a == self.b
  }

  /// The point `a + t * (b - a)`. `t = 0` is `a` and `t = 1` is `b`.
  pub fn point_at(&self, t: T) -> Point<T> {
    &self.a + &(self.direction() * t)
  }
}

impl<T: Float> TryFrom<((T, T), (T, T))> for LineSegment<T> {
  type Error = Error;
  fn try_from((a, b): ((T, T), (T, T))) -> Result<LineSegment<T>, Error> {
    LineSegment::new(a.into(), b.into())
  }
}
