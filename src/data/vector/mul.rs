use array_init::array_init;
use std::ops::Mul;

use super::Vector;

impl<T> Mul<T> for Vector<T>
where
  T: Mul<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn mul(self: Vector<T>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i] * other))
  }
}

impl<T> Mul<T> for &Vector<T>
where
  T: Mul<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn mul(self, other: T) -> Vector<T> {
    Vector(array_init(|i| self.0[i] * other))
  }
}
