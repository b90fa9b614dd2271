//! Interactive scene state: the obstacles, the viewer and whether the visible
//! region has to be recomputed.
//!
//! A frontend feeds user input in as [`Command`]s and calls [`Scene::frame`] when
//! [`Scene::needs_redraw`] says so.
//!
//! ```
//! use sightline::data::Point;
//! use sightline::scene::{Command, Scene};
//!
//! let mut scene = Scene::default();
//! scene.apply(Command::AddBox(Point::new([640.0, 200.0])))?;
//! let frame = scene.frame();
//! assert_eq!(frame.stats.segments, 8);
//! assert_eq!(frame.polygon.len(), 8);
//! assert!(!scene.needs_redraw());
//! # Ok::<(), sightline::Error>(())
//! ```
use array_init::{array_init, try_array_init};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crate::config::{ConfigError, SceneConfig};
use crate::data::{LineSegment, Point, Polygon};
use crate::{get_visibility_polygon, Error};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
  MoveViewer(Point<f64>),
  /// Add a square obstacle centered on the point.
  AddBox(Point<f64>),
  /// Remove every obstacle except the border.
  Reset,
  Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
  pub polygon: Polygon<f64>,
  pub stats: FrameStats,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
  /// Obstacle segments, border included.
  pub segments: usize,
  pub vertices: usize,
  /// Time spent computing the polygon.
  pub elapsed: Duration,
}

/// Invariant: `config` has passed [`SceneConfig::validate`].
#[derive(Debug, Clone)]
pub struct Scene {
  config: SceneConfig,
  viewer: Point<f64>,
  segments: Vec<LineSegment<f64>>,
  needs_redraw: bool,
}

impl Default for Scene {
  fn default() -> Self {
    Scene::with_valid_config(SceneConfig::default())
  }
}

impl Scene {
  /// A scene holding only the border, with the viewer in the middle.
  ///
  /// # Errors
  ///
  /// [`ConfigError::Invalid`] if `config` doesn't pass [`SceneConfig::validate`].
  pub fn new(config: SceneConfig) -> Result<Scene, ConfigError> {
    config.validate()?;
    Ok(Scene::with_valid_config(config))
  }

  fn with_valid_config(config: SceneConfig) -> Scene {
    Scene {
      viewer: Point::new([config.width / 2.0, config.height / 2.0]),
      segments: border_walls(&config).to_vec(),
      config,
      needs_redraw: true,
    }
  }

  /// Walls of the rectangle `(-m, -m)` to `(width, height)`, where `m` is the border
  /// margin. Top, right, bottom, left.
  pub fn border(config: &SceneConfig) -> Result<[LineSegment<f64>; 4], ConfigError> {
    config.validate()?;
    Ok(border_walls(config))
  }

  pub fn config(&self) -> &SceneConfig {
    &self.config
  }

  pub fn viewer(&self) -> &Point<f64> {
    &self.viewer
  }

  /// Obstacles in insertion order. The first four are the border.
  pub fn segments(&self) -> &[LineSegment<f64>] {
    &self.segments
  }

  pub fn needs_redraw(&self) -> bool {
    self.needs_redraw
  }

  pub fn set_viewer(&mut self, viewer: Point<f64>) {
    if viewer != self.viewer {
      self.viewer = viewer;
      self.needs_redraw = true;
    }
  }

  /// Square outline centered on `center`: top, right, bottom and left edges.
  ///
  /// # Errors
  ///
  /// [`Error::NonFinite`] for a non-finite center and [`Error::DegenerateSegment`] if
  /// the box is too small to tell its corners apart at `center`'s magnitude. The scene
  /// is unchanged on error.
  pub fn add_box(&mut self, center: Point<f64>) -> Result<(), Error> {
    let h = self.config.obstacle_half_extent;
    let [x, y] = center.array;
    let edges = square_outline(Point::new([x - h, y - h]), Point::new([x + h, y + h]));
    let walls: [LineSegment<f64>; 4] = try_array_init(|i| {
      let (a, b) = edges[i];
      LineSegment::new(a, b)
    })?;
    self.segments.extend(walls);
    self.needs_redraw = true;
    log::debug!("added box at {:?}, {} segments", center, self.segments.len());
    Ok(())
  }

  /// # Errors
  ///
  /// Fails like [`LineSegment::new`]. The scene is unchanged on error.
  pub fn add_segment(&mut self, a: Point<f64>, b: Point<f64>) -> Result<(), Error> {
    self.segments.push(LineSegment::new(a, b)?);
    self.needs_redraw = true;
    Ok(())
  }

  pub fn reset(&mut self) {
    self.segments = border_walls(&self.config).to_vec();
    self.needs_redraw = true;
    log::info!("scene reset");
  }

  /// Returns `Break` on [`Command::Quit`].
  ///
  /// # Errors
  ///
  /// Fails like [`Scene::add_box`].
  pub fn apply(&mut self, command: Command) -> Result<ControlFlow<()>, Error> {
    match command {
      Command::MoveViewer(viewer) => self.set_viewer(viewer),
      Command::AddBox(center) => self.add_box(center)?,
      Command::Reset => self.reset(),
      Command::Quit => return Ok(ControlFlow::Break(())),
    }
    Ok(ControlFlow::Continue(()))
  }

  /// Visible region for the current viewer and obstacles.
  pub fn visibility_polygon(&self) -> Polygon<f64> {
    get_visibility_polygon(&self.viewer, &self.segments)
  }

  /// Computes the visible region and clears the redraw flag.
  pub fn frame(&mut self) -> Frame {
    let start = Instant::now();
    let polygon = self.visibility_polygon();
    let stats = FrameStats {
      segments: self.segments.len(),
      vertices: polygon.len(),
      elapsed: start.elapsed(),
    };
    self.needs_redraw = false;
    log::debug!(
      "frame: {} segments, {} vertices in {:?}",
      stats.segments,
      stats.vertices,
      stats.elapsed
    );
    Frame { polygon, stats }
  }
}

// A validated config has finite sizes with `-border_margin < width` and
// `-border_margin < height`, so none of the walls is degenerate.
fn border_walls(config: &SceneConfig) -> [LineSegment<f64>; 4] {
  let lo = -config.border_margin;
  let edges = square_outline(Point::new([lo, lo]), Point::new([config.width, config.height]));
  edges.map(|(a, b)| LineSegment::new_unchecked(a, b))
}

/// Edges of the axis-aligned rectangle from `min` to `max`: top, right, bottom, left
/// (with y pointing down).
fn square_outline(min: Point<f64>, max: Point<f64>) -> [(Point<f64>, Point<f64>); 4] {
  let corners = [
    min,
    Point::new([max.x_coord(), min.y_coord()]),
    max,
    Point::new([min.x_coord(), max.y_coord()]),
  ];
  array_init(|i| (corners[i], corners[(i + 1) % 4]))
}
