use array_init::array_init;
use num_traits::Float;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T: Float> Vector<T> {
  /// Unit vector pointing at `angle` radians from the positive x-axis.
  pub fn from_angle(angle: T) -> Vector<T> {
    Vector([angle.cos(), angle.sin()])
  }

  pub fn is_zero(&self) -> bool {
    self.0[0] == T::zero() && self.0[1] == T::zero()
  }

  pub fn magnitude(&self) -> T {
    self.0[0].hypot(self.0[1])
  }

  /// Same direction, unit length. `None` for the zero vector.
  pub fn normalize(&self) -> Option<Vector<T>> {
    let magnitude = self.magnitude();
    if magnitude == T::zero() || !magnitude.is_finite() {
      return None;
    }
    Some(Vector([self.0[0] / magnitude, self.0[1] / magnitude]))
  }

  /// z-component of the 3D cross product. Zero when the vectors are parallel.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

impl<T> Neg for Vector<T>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Vector<T>;

  fn neg(self) -> Vector<T> {
    Vector(array_init(|i| -self.0[i]))
  }
}

mod mul;

#[cfg(test)]
mod tests {
  use super::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn from_angle_is_unit(#[strategy(-10.0..10.0f64)] angle: f64) {
    let v = Vector::from_angle(angle);
    prop_assert!((v.magnitude() - 1.0).abs() < 1e-12);
  }

  #[proptest]
  fn normalize_is_unit(#[strategy(-1e6..1e6f64)] x: f64, #[strategy(-1e6..1e6f64)] y: f64) {
    prop_assume!(x != 0.0 || y != 0.0);
    let v = Vector([x, y]).normalize().unwrap();
    prop_assert!((v.magnitude() - 1.0).abs() < 1e-12);
  }

  #[test]
  fn normalize_zero() {
    assert_eq!(Vector([0.0, 0.0]).normalize(), None);
    assert_eq!(Vector([0.0, -3.0]).normalize(), Some(Vector([0.0, -1.0])));
  }

  #[test]
  fn cross_parallel() {
    let v = Vector([2.0, 1.0]);
    assert_eq!(v.cross(&(v * 3.0)), 0.0);
    assert_eq!(v.cross(&-v), 0.0);
    assert_eq!(Vector([1.0, 0.0]).cross(&Vector([0.0, 1.0])), 1.0);
  }
}
