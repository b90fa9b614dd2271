use num_traits::Float;
use std::slice::Iter;

use crate::data::{Point, PointLocation, Vector};
use crate::{Orientation, RayScalar};

mod braille;
pub use braille::BraillePrinter;

/// Edge from `src` to `dst`, borrowed from a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<'a, T> {
  pub src: &'a Point<T>,
  pub dst: &'a Point<T>,
}

/// Ordered vertex sequence. The last vertex connects back to the first.
///
/// Visibility polygons are star-shaped around the viewer but no other validation is
/// done: the vertex list may be empty, short, or contain repeated points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<T> {
  pub points: Vec<Point<T>>,
}

impl<T> Polygon<T> {
  pub fn new(points: Vec<Point<T>>) -> Polygon<T> {
    Polygon { points }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, Point<T>> {
    self.points.iter()
  }

  /// Every edge including the closing one from the last vertex to the first.
  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = DirectedEdge<'_, T>> + '_ {
    self
      .points
      .iter()
      .zip(self.points.iter().cycle().skip(1))
      .map(|(src, dst)| DirectedEdge { src, dst })
  }
}

impl<T: RayScalar> Polygon<T> {
  /// Shoelace area. Positive when the vertices turn counter-clockwise in a y-up frame.
  pub fn signed_area(&self) -> T {
    let two = T::one() + T::one();
    self
      .iter_boundary_edges()
      .map(|edge| Vector::from(*edge.src).cross(&Vector::from(*edge.dst)))
      .fold(T::zero(), |acc, x| acc + x)
      / two
  }

  /// Smallest axis-aligned box containing every vertex, as `(min, max)`.
  pub fn bounding_box(&self) -> Option<(Point<T>, Point<T>)> {
    let first = *self.points.first()?;
    Some(self.iter().fold((first, first), |(min, max), pt| {
      (
        Point::new([min.x_coord().min(pt.x_coord()), min.y_coord().min(pt.y_coord())]),
        Point::new([max.x_coord().max(pt.x_coord()), max.y_coord().max(pt.y_coord())]),
      )
    }))
  }

  /// Point-in-polygon test by winding number. Works for either vertex orientation.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let mut winding = 0i32;
    for edge in self.iter_boundary_edges() {
      let orient = Orientation::new(edge.src, edge.dst, pt);
      if orient.is_colinear() && in_box(edge.src, edge.dst, pt) {
        return PointLocation::OnBoundary;
      }
      if edge.src.y_coord() <= pt.y_coord() {
        if edge.dst.y_coord() > pt.y_coord() && orient.is_ccw() {
          winding += 1;
        }
      } else if edge.dst.y_coord() <= pt.y_coord() && orient.is_cw() {
        winding -= 1;
      }
    }
    if winding != 0 {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.locate(pt) != PointLocation::Outside
  }

  /// Drop vertices that sit on a straight line between their neighbours.
  ///
  /// `tolerance` is the sine of the sharpest turn that still counts as straight.
  /// Repeated vertices and zero-area spikes are dropped as well. The enclosed
  /// region doesn't change beyond the tolerance.
  pub fn simplify_colinear(&mut self, tolerance: T) {
    if self.points.len() < 3 {
      return;
    }
    let mut kept: Vec<Point<T>> = Vec::with_capacity(self.points.len());
    for &pt in &self.points {
      while kept.len() >= 2
        && is_straight(&kept[kept.len() - 2], &kept[kept.len() - 1], &pt, tolerance)
      {
        kept.pop();
      }
      kept.push(pt);
    }
    // Close the ring: the seam between the last and first vertex.
    loop {
      let n = kept.len();
      if n < 3 {
        break;
      }
      if is_straight(&kept[n - 2], &kept[n - 1], &kept[0], tolerance) {
        kept.pop();
      } else if is_straight(&kept[n - 1], &kept[0], &kept[1], tolerance) {
        kept.remove(0);
      } else {
        break;
      }
    }
    self.points = kept;
  }
}

impl<T> FromIterator<Point<T>> for Polygon<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
    Polygon::new(iter.into_iter().collect())
  }
}

impl<'a, T> IntoIterator for &'a Polygon<T> {
  type Item = &'a Point<T>;
  type IntoIter = Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}

fn in_box<T: Float>(a: &Point<T>, b: &Point<T>, pt: &Point<T>) -> bool {
  let (x, y) = (pt.x_coord(), pt.y_coord());
  a.x_coord().min(b.x_coord()) <= x
    && x <= a.x_coord().max(b.x_coord())
    && a.y_coord().min(b.y_coord()) <= y
    && y <= a.y_coord().max(b.y_coord())
}

fn is_straight<T: Float>(a: &Point<T>, b: &Point<T>, c: &Point<T>, tolerance: T) -> bool {
  let u = b - a;
  let v = c - b;
  u.cross(&v).abs() <= tolerance * u.magnitude() * v.magnitude()
}
