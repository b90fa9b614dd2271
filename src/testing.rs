// Strategies for:
//  * points
//  * segments
//  * scenes (border plus random boxes)
use crate::data::{LineSegment, Point, Ray};
use crate::scene::Scene;

use proptest::collection::vec;
use proptest::prelude::*;

pub const COORD_RANGE: std::ops::Range<f64> = -1000.0..1000.0;

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (COORD_RANGE, COORD_RANGE).prop_map(|(x, y)| Point::new([x, y]))
}

/// Segments no shorter than 1e-3.
pub fn any_segment() -> impl Strategy<Value = LineSegment<f64>> {
  (any_point(), any_point())
    .prop_filter("segment too short", |(a, b)| a.distance(b) > 1e-3)
    .prop_map(|(a, b)| LineSegment::new_unchecked(a, b))
}

/// True if the ray crosses the segment at an angle steep enough for the
/// property tests' tolerances.
pub fn well_conditioned(ray: &Ray<f64>, segment: &LineSegment<f64>) -> bool {
  let r = ray.direction;
  let s = segment.direction();
  let sine = r.cross(&s) / (r.magnitude() * s.magnitude());
  sine.abs() > 0.1
}

/// A default-sized scene with up to `max_boxes` obstacles strictly inside the
/// border, and a viewer that isn't inside any of them.
pub fn any_scene(max_boxes: usize) -> impl Strategy<Value = Scene> {
  let centers = vec((60.0..1220.0f64, 60.0..660.0f64), 0..=max_boxes);
  let viewer = (1.0..1279.0f64, 1.0..719.0f64);
  (centers, viewer)
    .prop_filter("viewer inside an obstacle", |(centers, (vx, vy))| {
      centers
        .iter()
        .all(|(cx, cy)| (cx - vx).abs() > 30.0 || (cy - vy).abs() > 30.0)
    })
    .prop_map(|(centers, (vx, vy))| {
      let mut scene = Scene::default();
      for (x, y) in centers {
        scene
          .add_box(Point::new([x, y]))
          .expect("box centers are finite");
      }
      scene.set_viewer(Point::new([vx, vy]));
      scene
    })
}
