pub mod visibility {
  pub mod naive;
}

#[doc(inline)]
pub use visibility::naive::{get_visibility_polygon, visible_hits, VisibleHit};

#[cfg(feature = "rayon")]
#[doc(inline)]
pub use visibility::naive::get_visibility_polygon_par;
