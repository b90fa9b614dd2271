use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;

use super::Point;
use crate::data::Vector;

// &point + &vector = point
impl<'a, 'b, T> Add<&'a Vector<T>> for &'b Point<T>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Point<T>;

  fn add(self: &'b Point<T>, other: &'a Vector<T>) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i] + other.0[i]),
    }
  }
}

// point + vector = point
impl<T> Add<Vector<T>> for Point<T>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Point<T>;

  fn add(self: Point<T>, other: Vector<T>) -> Self::Output {
    Add::add(&self, &other)
  }
}

// point += vector
impl<T> AddAssign<Vector<T>> for Point<T>
where
  T: AddAssign + Copy,
{
  fn add_assign(&mut self, other: Vector<T>) {
    for i in 0..2 {
      self.array[i] += other.0[i]
    }
  }
}
