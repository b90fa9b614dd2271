use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sightline::config::SceneConfig;
use sightline::data::{BraillePrinter, Point};
use sightline::scene::{Command, Scene};

#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Compute the region visible from a point among line segment obstacles")]
struct Cli {
  /// Scene configuration (TOML)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Viewer position, defaults to the middle of the scene
  #[arg(long, value_name = "X,Y", value_parser = parse_point)]
  viewer: Option<Point<f64>>,

  /// Add a square obstacle centered here
  #[arg(long = "box", value_name = "X,Y", value_parser = parse_point)]
  boxes: Vec<Point<f64>>,

  /// Add a single wall
  #[arg(long = "segment", value_name = "X1,Y1,X2,Y2", value_parser = parse_segment)]
  segments: Vec<(Point<f64>, Point<f64>)>,

  /// Draw the result in the terminal
  #[arg(long)]
  braille: bool,

  /// Width of the drawing in dots
  #[arg(long, default_value_t = 120)]
  braille_width: usize,

  /// More logging (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn parse_numbers<const N: usize>(text: &str) -> Result<[f64; N], String> {
  let numbers = text
    .split(',')
    .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{:?}: {}", part, e)))
    .collect::<Result<Vec<f64>, String>>()?;
  <[f64; N]>::try_from(numbers)
    .map_err(|numbers| format!("expected {} numbers, got {}", N, numbers.len()))
}

fn parse_point(text: &str) -> Result<Point<f64>, String> {
  parse_numbers::<2>(text).map(Point::new)
}

fn parse_segment(text: &str) -> Result<(Point<f64>, Point<f64>), String> {
  let [x1, y1, x2, y2] = parse_numbers::<4>(text)?;
  Ok((Point::new([x1, y1]), Point::new([x2, y2])))
}

fn setup_logging(verbose: u8) -> Result<()> {
  let level = match verbose {
    0 => log::LevelFilter::Info,
    1 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
    })
    .level(level)
    .chain(std::io::stderr())
    .apply()?;
  Ok(())
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose)?;

  let config = match &cli.config {
    Some(path) => {
      SceneConfig::load(path).with_context(|| format!("loading {}", path.display()))?
    }
    None => SceneConfig::default(),
  };
  let mut scene = Scene::new(config)?;
  if let Some(viewer) = cli.viewer {
    scene.apply(Command::MoveViewer(viewer))?;
  }
  for center in &cli.boxes {
    scene
      .apply(Command::AddBox(*center))
      .with_context(|| format!("box at {:?}", center.array))?;
  }
  for (a, b) in &cli.segments {
    scene
      .add_segment(*a, *b)
      .with_context(|| format!("segment {:?} to {:?}", a.array, b.array))?;
  }

  let frame = scene.frame();
  for pt in &frame.polygon {
    println!("{} {}", pt.x_coord(), pt.y_coord());
  }
  eprintln!(
    "{} segments, {} vertices, {:?}",
    frame.stats.segments, frame.stats.vertices, frame.stats.elapsed
  );
  if cli.braille {
    let printer = BraillePrinter::new(&frame.polygon)
      .with_width(cli.braille_width)
      .with_segments(scene.segments());
    print!("{}", printer);
  }
  Ok(())
}
