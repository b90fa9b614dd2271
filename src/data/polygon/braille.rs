use crate::data::{LineSegment, Point, Polygon};
use crate::RayScalar;
use std::fmt;

/// Terminal preview of a polygon (and optionally the obstacles around it) using
/// Braille Unicode symbols.
///
/// Braille characters (U+2800 to U+28FF) encode 2×4 dot patterns. The drawing is
/// scaled to fit in `width` by `2 * width` dots, keeping the aspect ratio. Rows go
/// down with increasing y, matching screen coordinates.
///
/// # Braille Dot Numbering
///
/// ```text
/// 1  4
/// 2  5
/// 3  6
/// 7  8
/// ```
///
/// # Examples
///
/// ```
/// use sightline::data::{BraillePrinter, Point, Polygon};
///
/// let square = Polygon::new(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([0.0, 10.0]),
/// ]);
///
/// println!("{}", BraillePrinter::new(&square).with_width(20));
/// ```
pub struct BraillePrinter<'a, T> {
  polygon: &'a Polygon<T>,
  segments: &'a [LineSegment<T>],
  width: usize,
}

impl<'a, T: RayScalar> BraillePrinter<'a, T> {
  pub fn new(polygon: &'a Polygon<T>) -> Self {
    BraillePrinter {
      polygon,
      segments: &[],
      width: 80,
    }
  }

  /// Output width in dots. Each character is two dots wide.
  pub fn with_width(mut self, width: usize) -> Self {
    self.width = width.max(2);
    self
  }

  /// Also draw these obstacle segments.
  pub fn with_segments(mut self, segments: &'a [LineSegment<T>]) -> Self {
    self.segments = segments;
    self
  }

  fn render(&self) -> String {
    let points = self
      .polygon
      .iter()
      .copied()
      .chain(self.segments.iter().flat_map(|s| s.endpoints()));
    let bounds = Polygon::from_iter(points).bounding_box();
    let Some((min, max)) = bounds else {
      return String::new();
    };

    // The drawing is at most twice as tall as it is wide.
    let width = self.width;
    let max_height = width * 2;
    let extent_x = (max.x_coord() - min.x_coord()).to_f64_lossy();
    let extent_y = (max.y_coord() - min.y_coord()).to_f64_lossy();
    let scale = match (fit(width, extent_x), fit(max_height, extent_y)) {
      (Some(sx), Some(sy)) => sx.min(sy),
      (Some(s), None) | (None, Some(s)) => s,
      (None, None) => 1.0,
    };
    let height = if extent_y.is_finite() {
      ((extent_y * scale).ceil() as usize + 1).min(max_height)
    } else {
      1
    };
    let mut grid = vec![vec![false; width]; height];

    let to_pixel = |pt: &Point<T>| -> (i32, i32) {
      (
        ((pt.x_coord() - min.x_coord()).to_f64_lossy() * scale).round() as i32,
        ((pt.y_coord() - min.y_coord()).to_f64_lossy() * scale).round() as i32,
      )
    };
    let mut plot = |x: i32, y: i32| {
      if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
        grid[y as usize][x as usize] = true;
      }
    };

    for edge in self.polygon.iter_boundary_edges() {
      let (x0, y0) = to_pixel(edge.src);
      let (x1, y1) = to_pixel(edge.dst);
      bresenham_line(x0, y0, x1, y1, &mut plot);
    }
    for segment in self.segments {
      let (x0, y0) = to_pixel(&segment.a);
      let (x1, y1) = to_pixel(&segment.b);
      bresenham_line(x0, y0, x1, y1, &mut plot);
    }

    grid_to_braille(&grid)
  }
}

impl<'a, T: RayScalar> fmt::Display for BraillePrinter<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}

// Scale that maps `extent` onto `dots` pixels, if the extent is usable.
fn fit(dots: usize, extent: f64) -> Option<f64> {
  (extent.is_finite() && extent > 0.0).then(|| (dots - 1) as f64 / extent)
}

// Dot bits in Unicode order, indexed by [row][column] within a 2x4 cell.
const DOTS: [[u32; 2]; 4] = [
  [0b0000_0001, 0b0000_1000],
  [0b0000_0010, 0b0001_0000],
  [0b0000_0100, 0b0010_0000],
  [0b0100_0000, 0b1000_0000],
];

fn grid_to_braille(grid: &[Vec<bool>]) -> String {
  let height = grid.len();
  let width = grid.first().map_or(0, Vec::len);

  let mut result = String::new();
  for row in 0..height.div_ceil(4) {
    for col in 0..width.div_ceil(2) {
      let mut dots = 0u32;
      for (dy, bits) in DOTS.iter().enumerate() {
        for (dx, bit) in bits.iter().enumerate() {
          if get_pixel(grid, col * 2 + dx, row * 4 + dy) {
            dots |= bit;
          }
        }
      }
      // U+2800 is the blank pattern.
      result.push(char::from_u32(0x2800 + dots).unwrap_or('?'));
    }
    result.push('\n');
  }
  result
}

fn get_pixel(grid: &[Vec<bool>], x: usize, y: usize) -> bool {
  grid
    .get(y)
    .and_then(|row| row.get(x))
    .copied()
    .unwrap_or(false)
}

/// Bresenham's line drawing algorithm.
///
/// Calls `plot` for each point along the line from (x0, y0) to (x1, y1).
fn bresenham_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, plot: &mut F)
where
  F: FnMut(i32, i32),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;
  let (mut x, mut y) = (x0, y0);

  loop {
    plot(x, y);
    if x == x1 && y == y1 {
      break;
    }
    let e2 = 2 * error;
    if e2 >= dy {
      error += dy;
      x += sx;
    }
    if e2 <= dx {
      error += dx;
      y += sy;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn is_braille(c: char) -> bool {
    ('\u{2800}'..='\u{28FF}').contains(&c)
  }

  #[test]
  fn square_outline() {
    let square = Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([7.0, 0.0]),
      Point::new([7.0, 7.0]),
      Point::new([0.0, 7.0]),
    ]);
    let output = BraillePrinter::new(&square).with_width(8).to_string();
    // 8x8 dots: four characters by two rows.
    assert_eq!(output, "⡏⠉⠉⢹\n⣇⣀⣀⣸\n");
  }

  #[test]
  fn includes_segments() {
    let empty = Polygon::<f64>::default();
    let wall = [LineSegment::new(Point::new([0.0, 0.0]), Point::new([9.0, 0.0])).unwrap()];
    let output = BraillePrinter::new(&empty)
      .with_width(10)
      .with_segments(&wall)
      .to_string();
    assert_eq!(output.lines().count(), 1);
    assert!(output.trim_end().chars().all(is_braille));
  }

  #[test]
  fn thin_polygon() {
    let sliver = Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([1e-9, 1000.0]),
      Point::new([0.0, 1000.0]),
    ]);
    let output = BraillePrinter::new(&sliver).with_width(80).to_string();
    // Height is capped at 160 dots.
    assert_eq!(output.lines().count(), 40);
    assert!(output.lines().all(|line| line.chars().count() == 40));
    assert!(output.lines().all(|line| line.starts_with(|c| c != '\u{2800}')));
  }

  #[test]
  fn wide_polygon() {
    let strip = Polygon::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([1000.0, 0.0]),
      Point::new([1000.0, 1e-9]),
    ]);
    let output = BraillePrinter::new(&strip).with_width(80).to_string();
    assert_eq!(output.lines().count(), 1);
    assert_eq!(output.lines().next().map(|line| line.chars().count()), Some(40));
  }

  #[test]
  fn empty_renders_nothing() {
    let empty = Polygon::<f64>::default();
    assert_eq!(BraillePrinter::new(&empty).to_string(), "");
  }

  #[test]
  fn bresenham_endpoints() {
    let mut points = Vec::new();
    bresenham_line(0, 0, 5, 0, &mut |x, y| points.push((x, y)));
    assert_eq!(points.len(), 6);
    assert_eq!(points[5], (5, 0));

    points.clear();
    bresenham_line(0, 0, 3, 3, &mut |x, y| points.push((x, y)));
    assert_eq!(points, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
  }
}
