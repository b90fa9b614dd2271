/// Geometric intersection test between `Self` and `T`.
///
/// `None` means the two don't intersect. It is an ordinary outcome, not an error.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
