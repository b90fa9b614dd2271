use array_init::array_init;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Index;

use crate::{RayScalar, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T: Copy> Point<T> {
  pub fn x_coord(&self) -> T {
    self.array[0]
  }

  pub fn y_coord(&self) -> T {
    self.array[1]
  }
}

impl<T: Float> Point<T> {
  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    let dx = self.array[0] - rhs.array[0];
    let dy = self.array[1] - rhs.array[1];
    dx * dx + dy * dy
  }

  pub fn distance(&self, rhs: &Point<T>) -> T {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// Bearing of `self` as seen from `origin`, in `(-π, π]`.
  ///
  /// ```rust
  /// # use sightline::data::Point;
  /// let origin = Point::new([1.0, 1.0]);
  /// assert_eq!(Point::new([2.0, 1.0]).angle_from(&origin), 0.0);
  /// assert_eq!(Point::new([0.0, 1.0]).angle_from(&origin), std::f64::consts::PI);
  /// ```
  pub fn angle_from(&self, origin: &Point<T>) -> T {
    (self.array[1] - origin.array[1]).atan2(self.array[0] - origin.array[0])
  }
}

impl<T: RayScalar> Point<T> {
  /// Hashable, totally ordered key. Points with equal coordinates get equal keys.
  pub fn ordered(&self) -> (T::Ordered, T::Ordered) {
    (self.array[0].ordered(), self.array[1].ordered())
  }
}

impl<T: TotalOrd> TotalOrd for Point<T> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    TotalOrd::total_cmp(&(&self.array[0], &self.array[1]), &(&other.array[0], &other.array[1]))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

mod add;
mod sub;
