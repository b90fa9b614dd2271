use num_traits::Float;

use super::{LineSegment, Point, Vector};
use crate::{Error, Intersects, RayScalar};

///////////////////////////////////////////////////////////////////////////////
// Ray

/// Half-line starting at `origin` and extending along `direction`.
///
/// The direction does not have to be normalized, but [`RayHit::t`] is measured in
/// multiples of it. Use unit directions when `t` should be a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T> {
  pub origin: Point<T>,
  pub direction: Vector<T>,
}

impl<T: Float> Ray<T> {
  /// # Errors
  ///
  /// [`Error::ZeroDirection`] if `direction` is the zero vector and
  /// [`Error::NonFinite`] for NaN or infinite coordinates.
  pub fn new_directed(origin: Point<T>, direction: Vector<T>) -> Result<Ray<T>, Error> {
    if !origin.is_finite() || !direction.0.iter().all(|c| c.is_finite()) {
      return Err(Error::NonFinite);
    }
    if direction.is_zero() {
      return Err(Error::ZeroDirection);
    }
    Ok(Ray { origin, direction })
  }

  /// Ray from `origin` passing through `through`.
  pub fn new_through(origin: Point<T>, through: Point<T>) -> Result<Ray<T>, Error> {
    Ray::new_directed(origin, &through - &origin)
  }

  /// Ray with a unit direction at `angle` radians.
  pub fn from_angle(origin: Point<T>, angle: T) -> Ray<T> {
    Ray {
      origin,
      direction: Vector::from_angle(angle),
    }
  }

  /// `origin + t * direction`
  pub fn at(&self, t: T) -> Point<T> {
    &self.origin + &(self.direction * t)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Ray / LineSegment intersection

/// Where a ray hits a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<T> {
  pub point: Point<T>,
  /// Ray parameter of `point`: `point == origin + t * direction`, `t >= 0`.
  pub t: T,
}

// Ray:     origin + t1 * direction
// Segment: a + t2 * (b - a), t2 in [0, 1]
//
// Rays that are parallel to the segment never hit it, not even when colinear.
// Hits up to SEGMENT_TOLERANCE past `b` are accepted so that rays aimed exactly at
// an endpoint aren't lost to round-off.
impl<T> Intersects<&LineSegment<T>> for &Ray<T>
where
  T: RayScalar,
{
  type Result = RayHit<T>;
  fn intersect(self, segment: &LineSegment<T>) -> Option<Self::Result> {
    debug_assert!(!self.direction.is_zero(), "ray direction has zero length");
    debug_assert!(!segment.is_degenerate(), "segment endpoints coincide");

    let [r_px, r_py] = self.origin.array;
    let [r_dx, r_dy] = self.direction.0;
    let [s_px, s_py] = segment.a.array;
    let Vector([s_dx, s_dy]) = segment.direction();

    match (self.direction.normalize(), segment.direction().normalize()) {
      // Same unit vector: parallel and facing the same way.
      (Some(r_unit), Some(s_unit)) if r_unit == s_unit => return None,
      (Some(_), Some(_)) => (),
      _ => return None,
    }

    // Anti-parallel and colinear rays end up here with a zero denominator.
    let denominator = s_dx * r_dy - s_dy * r_dx;
    let t2 = if denominator != T::zero() {
      (r_dx * (s_py - r_py) + r_dy * (r_px - s_px)) / denominator
    } else {
      T::infinity()
    };
    if !(T::zero()..=T::one() + T::SEGMENT_TOLERANCE).contains(&t2) {
      return None;
    }

    // Solve for t1 along the dominant axis of the ray. Dividing by a zero (or tiny)
    // component would put the hit at infinity for axis-aligned rays.
    let t1 = if r_dx.abs() >= r_dy.abs() {
      (s_px + s_dx * t2 - r_px) / r_dx
    } else {
      (s_py + s_dy * t2 - r_py) / r_dy
    };
    if !(T::zero()..).contains(&t1) {
      return None;
    }

    Some(RayHit {
      point: self.at(t1),
      t: t1,
    })
  }
}
