mod visibility {
  use sightline::algorithms::visibility::naive::*;
  use sightline::data::*;
  use sightline::*;

  fn walls(corners: &[(f64, f64)]) -> Result<Vec<LineSegment<f64>>, Error> {
    (0..corners.len())
      .map(|i| LineSegment::try_from((corners[i], corners[(i + 1) % corners.len()])))
      .collect()
  }

  fn near(a: &Point<f64>, b: (f64, f64)) -> bool {
    a.distance(&Point::from(b)) < 1e-6
  }

  #[test]
  fn room_corners() -> Result<(), Error> {
    let corners = [(-1.0, -1.0), (1280.0, -1.0), (1280.0, 720.0), (-1.0, 720.0)];
    let room = walls(&corners)?;
    let polygon = get_visibility_polygon(&Point::new([640.0, 360.0]), &room);
    assert_eq!(polygon.len(), 4);
    for (pt, corner) in polygon.iter().zip(corners) {
      assert!(near(pt, corner), "{:?} != {:?}", pt, corner);
    }
    Ok(())
  }

  // Corner order follows the angle, so it depends on where the viewer stands.
  #[test]
  fn starts_at_smallest_angle() -> Result<(), Error> {
    let room = walls(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])?;
    let viewer = Point::new([1.0, 5.0]);
    let polygon = get_visibility_polygon(&viewer, &room);
    assert_eq!(polygon.len(), 4);
    let angles: Vec<f64> = polygon.iter().map(|pt| pt.angle_from(&viewer)).collect();
    assert!(angles.windows(2).all(|w| w[0] < w[1]));
    assert!(near(&polygon.points[0], (0.0, 0.0)));
    Ok(())
  }

  //  /-----------------------\
  //  |                       |
  //  |           |           |
  //  |     x     |           |
  //  \-----------------------/
  #[test]
  fn wall_splits_room() -> Result<(), Error> {
    let mut segments = walls(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)])?;
    segments.push(LineSegment::try_from(((50.0, 20.0), (50.0, 30.0)))?);
    let viewer = Point::new([25.0, 25.0]);
    let polygon = get_visibility_polygon(&viewer, &segments);

    assert!(polygon.contains(&Point::new([75.0, 5.0])));
    assert!(polygon.contains(&Point::new([75.0, 45.0])));
    assert!(!polygon.contains(&Point::new([75.0, 25.0])));
    assert!(!polygon.contains(&Point::new([95.0, 25.0])));
    // Both ends of the wall are on the boundary. A ray aimed exactly at an
    // endpoint may slip past it, leaving only the bracketing hit next to it.
    let close = |target: Point<f64>| polygon.iter().any(|pt| pt.distance(&target) < 1e-3);
    assert!(close(Point::new([50.0, 20.0])));
    assert!(close(Point::new([50.0, 30.0])));
    Ok(())
  }

  #[test]
  fn hits_report_segment() -> Result<(), Error> {
    let mut segments = walls(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)])?;
    segments.push(LineSegment::try_from(((50.0, 20.0), (50.0, 30.0)))?);
    let hits = visible_hits(&Point::new([25.0, 25.0]), &segments);
    assert_eq!(hits.len(), 3 * unique_endpoints(&segments).len());
    for hit in &hits {
      let segment = &segments[hit.segment];
      let offset = (&hit.point - &segment.a).cross(&segment.direction());
      assert!(offset.abs() < 1e-6);
    }
    assert!(hits.iter().any(|hit| hit.segment == 4));
    Ok(())
  }

  #[test]
  fn no_obstacles() {
    let polygon = get_visibility_polygon(&Point::new([0.0, 0.0]), &[]);
    assert!(polygon.is_empty());
  }
}
