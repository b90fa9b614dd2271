use crate::data::Point;
use crate::RayScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is computed with the adaptive-precision `orient2d` predicate, so the
  /// answer is exact for the (rounded to `f64`) input coordinates.
  ///
  /// Orientations are reported in a y-up frame. In screen coordinates (y pointing
  /// down) a `CounterClockWise` turn looks clockwise.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use sightline::data::Point;
  /// # use sightline::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]);
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: RayScalar,
  {
    let orient = geometry_predicates::predicates::orient2d(
      [p1.x_coord().to_f64_lossy(), p1.y_coord().to_f64_lossy()],
      [p2.x_coord().to_f64_lossy(), p2.y_coord().to_f64_lossy()],
      [p3.x_coord().to_f64_lossy(), p3.y_coord().to_f64_lossy()],
    );
    if orient > 0.0 {
      CounterClockWise
    } else if orient < 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}
