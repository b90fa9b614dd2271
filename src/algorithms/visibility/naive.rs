use std::collections::BTreeSet;

use crate::data::{LineSegment, Point, Polygon, Ray, RayHit};
use crate::{Intersects, RayScalar, TotalOrd};

// Wikipedia: https://en.wikipedia.org/wiki/Visibility_polygon#Naive_algorithms
//
// Visibility polygons are star-shaped: every vertex can be seen from the viewer.
// That means the boundary can be found in any order and sorted around the viewer
// afterwards.
//
// The boundary only changes direction where a ray grazes an obstacle endpoint. For
// each endpoint we cast three rays: one straight at it and one a tiny angle to
// either side. The side rays tell us what lies just past the corner:
//
//          a
//   ray -> |  ###      The ray at angle(a) - ε hits the segment just below 'a'.
//   ray -> a  ###      The ray at angle(a) stops at 'a'.
//   ray -> .....###    The ray at angle(a) + ε slips past and hits whatever is
//                      behind 'a'.
//
// Algorithm overview:
//   1. Collect the unique endpoints of all segments.
//   2. For each endpoint, derive three candidate angles: bearing - ε, bearing,
//      bearing + ε.
//   3. For each candidate angle, cast a unit ray from the viewer against every
//      segment and keep the nearest hit. Rays that hit nothing are dropped.
//   4. Sort the hits by angle.
//
// Every candidate ray is tested against every segment: O(endpoints * segments).

/// Nearest hit of a candidate ray, as found by [`visible_hits`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleHit<T> {
  pub point: Point<T>,
  /// Angle of the ray that found `point`, radians.
  pub angle: T,
  /// Distance from the viewer to `point`.
  pub t: T,
  /// Index of the blocking segment in the input slice.
  pub segment: usize,
}

/// Endpoints of `segments` with exact duplicates removed. The first occurrence
/// is kept, so the result follows segment order.
pub fn unique_endpoints<T>(segments: &[LineSegment<T>]) -> Vec<Point<T>>
where
  T: RayScalar,
{
  let mut seen = BTreeSet::new();
  segments
    .iter()
    .flat_map(|segment| segment.endpoints())
    .filter(|pt| seen.insert(pt.ordered()))
    .collect()
}

/// Three angles per point: the bearing from `viewer`, and the bearing offset by
/// [`RayScalar::ANGLE_EPSILON`] to either side.
pub fn candidate_angles<T>(viewer: &Point<T>, points: &[Point<T>]) -> Vec<T>
where
  T: RayScalar,
{
  points
    .iter()
    .flat_map(|pt| {
      let angle = pt.angle_from(viewer);
      [angle - T::ANGLE_EPSILON, angle, angle + T::ANGLE_EPSILON]
    })
    .collect()
}

/// Nearest hit for every candidate ray, sorted by angle.
///
/// This is the raw boundary: corners of straight walls show up several times
/// (once per candidate ray that lands on the wall). [`get_visibility_polygon`]
/// merges those.
///
/// Equally distant hits are resolved in favour of the segment that comes first
/// in `segments`. Hits at equal angles keep the order of their endpoints in
/// `segments`. Zero-length segments are skipped.
pub fn visible_hits<T>(viewer: &Point<T>, segments: &[LineSegment<T>]) -> Vec<VisibleHit<T>>
where
  T: RayScalar,
{
  let angles = candidate_angles(viewer, &unique_endpoints(segments));
  let hits = angles
    .into_iter()
    .filter_map(|angle| cast(viewer, angle, segments))
    .collect();
  sort_by_angle(hits)
}

/// Region visible from `viewer`, given opaque `segments`.
///
/// Vertices are in ascending angle order as seen from the viewer (clockwise on
/// screens where y grows downwards). Vertices that lie on a straight run of the
/// boundary are merged, so a viewer inside a bare rectangle sees exactly its four
/// corners. Without segments, the polygon is empty.
///
/// ```
/// use sightline::data::{LineSegment, Point};
/// use sightline::get_visibility_polygon;
///
/// let walls = [
///   LineSegment::new(Point::new([-1.0, -1.0]), Point::new([1280.0, -1.0])).unwrap(),
///   LineSegment::new(Point::new([1280.0, -1.0]), Point::new([1280.0, 720.0])).unwrap(),
///   LineSegment::new(Point::new([1280.0, 720.0]), Point::new([-1.0, 720.0])).unwrap(),
///   LineSegment::new(Point::new([-1.0, 720.0]), Point::new([-1.0, -1.0])).unwrap(),
/// ];
/// let visible = get_visibility_polygon(&Point::new([640.0, 360.0]), &walls);
/// assert_eq!(visible.len(), 4);
/// assert!(visible.points[0].distance(&Point::new([-1.0, -1.0])) < 1e-6);
/// ```
pub fn get_visibility_polygon<T>(viewer: &Point<T>, segments: &[LineSegment<T>]) -> Polygon<T>
where
  T: RayScalar,
{
  into_polygon(visible_hits(viewer, segments))
}

/// Same as [`get_visibility_polygon`] but candidate rays are cast on the rayon
/// thread pool. The output is identical.
#[cfg(feature = "rayon")]
pub fn get_visibility_polygon_par<T>(viewer: &Point<T>, segments: &[LineSegment<T>]) -> Polygon<T>
where
  T: RayScalar,
{
  use rayon::prelude::*;

  let angles = candidate_angles(viewer, &unique_endpoints(segments));
  let hits: Vec<VisibleHit<T>> = angles
    .into_par_iter()
    .filter_map(|angle| cast(viewer, angle, segments))
    .collect();
  into_polygon(sort_by_angle(hits))
}

fn into_polygon<T: RayScalar>(hits: Vec<VisibleHit<T>>) -> Polygon<T> {
  let mut polygon: Polygon<T> = hits.into_iter().map(|hit| hit.point).collect();
  polygon.simplify_colinear(T::COLINEAR_TOLERANCE);
  polygon
}

// Stable, so equal angles keep their candidate order.
fn sort_by_angle<T: RayScalar>(mut hits: Vec<VisibleHit<T>>) -> Vec<VisibleHit<T>> {
  hits.sort_by(|a, b| TotalOrd::total_cmp(&a.angle, &b.angle));
  hits
}

fn cast<T>(viewer: &Point<T>, angle: T, segments: &[LineSegment<T>]) -> Option<VisibleHit<T>>
where
  T: RayScalar,
{
  let ray = Ray::from_angle(*viewer, angle);
  let mut nearest = NearestIntersection::new();
  for (index, segment) in segments.iter().enumerate() {
    if segment.is_degenerate() {
      continue;
    }
    if let Some(hit) = ray.intersect(segment) {
      nearest.push(index, hit);
    }
  }
  match nearest.take() {
    Some((segment, hit)) => Some(VisibleHit {
      point: hit.point,
      angle,
      t: hit.t,
      segment,
    }),
    None => {
      log::trace!("ray at {:?} rad from {:?} escaped", angle, viewer);
      None
    }
  }
}

// Container for intersections that only stores the hit nearest to the ray origin.
// The first of several equally near hits is kept.
struct NearestIntersection<T> {
  nearest: Option<(usize, RayHit<T>)>,
}

impl<T> NearestIntersection<T>
where
  T: RayScalar,
{
  fn new() -> NearestIntersection<T> {
    NearestIntersection { nearest: None }
  }

  fn push(&mut self, segment: usize, hit: RayHit<T>) {
    match &self.nearest {
      Some((_, previous)) if previous.t <= hit.t => (),
      _ => self.nearest = Some((segment, hit)),
    }
  }

  fn take(self) -> Option<(usize, RayHit<T>)> {
    self.nearest
  }
}
