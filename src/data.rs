mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod ray;
mod vector;

pub use line_segment::*;
pub use ray::*;

#[doc(inline)]
pub use crate::data::polygon::{BraillePrinter, Polygon};
pub use point::Point;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
